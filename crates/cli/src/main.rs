// redirmap CLI - redirect-table generation, headless

mod exit_codes;
mod merge;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use exit_codes::EXIT_SUCCESS;

#[derive(Parser)]
#[command(name = "redirmap")]
#[command(about = "Reconcile two title/URL inventories into a redirect table")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a merge from a TOML job config
    #[command(after_help = "\
Examples:
  redirmap run relaunch.merge.toml
  redirmap run relaunch.merge.toml -o redirects.csv
  redirmap run relaunch.merge.toml --json | jq .summary
  redirmap run relaunch.merge.toml --progress")]
    Run {
        /// Path to the .merge.toml job config
        config: PathBuf,

        /// Write the redirect table to a file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Print the full JSON report to stdout instead of the table
        #[arg(long)]
        json: bool,

        /// Report per-record matching progress on stderr
        #[arg(long)]
        progress: bool,

        /// Suppress the stderr summary line
        #[arg(long, short = 'q')]
        quiet: bool,
    },

    /// Validate a job config without running
    #[command(after_help = "\
Examples:
  redirmap validate relaunch.merge.toml")]
    Validate {
        /// Path to the .merge.toml job config
        config: PathBuf,
    },
}

pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            config,
            output,
            json,
            progress,
            quiet,
        } => merge::cmd_run(config, output, json, progress, quiet),
        Commands::Validate { config } => merge::cmd_validate(config),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("error: {}", e.message);
            if let Some(hint) = e.hint {
                eprintln!("hint: {hint}");
            }
            ExitCode::from(e.code)
        }
    }
}

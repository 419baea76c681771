//! `redirmap run` — config-driven redirect reconciliation.

use std::path::{Path, PathBuf};

use redirmap_engine::parse::parse_records;
use redirmap_engine::{run_with_progress, MergeConfig, MergeError, MergeInput, Strictness};

use crate::exit_codes::{EXIT_MERGE_INVALID_CONFIG, EXIT_MERGE_PARSE, EXIT_MERGE_RUNTIME};
use crate::CliError;

fn merge_err(code: u8, msg: impl Into<String>) -> CliError {
    CliError {
        code,
        message: msg.into(),
        hint: None,
    }
}

fn engine_err(e: MergeError) -> CliError {
    let code = match e {
        MergeError::ConfigParse(_) | MergeError::ConfigValidation(_) => EXIT_MERGE_INVALID_CONFIG,
        MergeError::ShortRow { .. } => EXIT_MERGE_PARSE,
        MergeError::Io(_) => EXIT_MERGE_RUNTIME,
    };
    merge_err(code, e.to_string())
}

/// Parse the job config; inventory paths resolve relative to it.
fn load_config(config_path: &Path) -> Result<(MergeConfig, PathBuf), CliError> {
    let config_str = std::fs::read_to_string(config_path)
        .map_err(|e| merge_err(EXIT_MERGE_RUNTIME, format!("cannot read config: {e}")))?;
    let config = MergeConfig::from_toml(&config_str).map_err(engine_err)?;
    let base_dir = config_path
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .to_path_buf();
    Ok((config, base_dir))
}

fn read_inventory(base_dir: &Path, file: &str, which: &str) -> Result<String, CliError> {
    if file.is_empty() {
        return Err(CliError {
            code: EXIT_MERGE_INVALID_CONFIG,
            message: format!("config is missing {which}"),
            hint: Some(format!("set {which} = \"...\" to the CSV export path")),
        });
    }
    let path = base_dir.join(file);
    std::fs::read_to_string(&path).map_err(|e| {
        merge_err(
            EXIT_MERGE_RUNTIME,
            format!("cannot read {}: {e}", path.display()),
        )
    })
}

pub fn cmd_run(
    config_path: PathBuf,
    output: Option<PathBuf>,
    json: bool,
    progress: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let (config, base_dir) = load_config(&config_path)?;

    let old_csv = read_inventory(&base_dir, &config.old_file, "old_file")?;
    let new_csv = read_inventory(&base_dir, &config.new_file, "new_file")?;

    let input = MergeInput {
        old: parse_records(&old_csv, config.strictness).map_err(engine_err)?,
        new: parse_records(&new_csv, config.strictness).map_err(engine_err)?,
    };

    let report = run_with_progress(&config, &input, |done, total| {
        if progress {
            eprintln!("progress: {done}/{total}");
        }
    })
    .map_err(engine_err)?;

    if let Some(ref path) = output {
        std::fs::write(path, &report.csv)
            .map_err(|e| merge_err(EXIT_MERGE_RUNTIME, format!("cannot write output: {e}")))?;
        if !quiet {
            eprintln!("wrote {}", path.display());
        }
    }

    if json {
        let json_str = serde_json::to_string_pretty(&report).map_err(|e| {
            merge_err(EXIT_MERGE_RUNTIME, format!("JSON serialization error: {e}"))
        })?;
        println!("{json_str}");
    } else if output.is_none() {
        println!("{}", report.csv);
    }

    if !quiet {
        let s = &report.summary;
        eprintln!(
            "merge '{}': {} old, {} new — {} matched, {} dropped",
            report.meta.config_name, s.old_records, s.new_records, s.matched, s.dropped,
        );
    }

    Ok(())
}

pub fn cmd_validate(config_path: PathBuf) -> Result<(), CliError> {
    let (config, _) = load_config(&config_path)?;
    eprintln!(
        "valid: merge '{}' (threshold {}, {} keys, {} parsing)",
        config.name,
        config.similarity_threshold,
        if config.turbo_match { "turbo" } else { "title" },
        match config.strictness {
            Strictness::Lenient => "lenient",
            Strictness::Strict => "strict",
        },
    );
    Ok(())
}

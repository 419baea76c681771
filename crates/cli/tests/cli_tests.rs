// End-to-end tests for the redirmap binary.
// Run with: cargo test -p redirmap-cli --test cli_tests

use std::path::Path;
use std::process::{Command, Output};

fn redirmap(args: &[&str], dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_redirmap"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run redirmap binary")
}

fn write(dir: &Path, name: &str, contents: &str) {
    std::fs::write(dir.join(name), contents).unwrap();
}

const OLD_CSV: &str = "\
Title,URL
Face Cream,https://old.com/face-cream
Gift Voucher,https://old.com/gift-voucher
";

const NEW_CSV: &str = "\
Title,URL
Face Cream,https://new.com/shop/face-cream
";

const JOB: &str = r#"
name = "Relaunch"
old_file = "old.csv"
new_file = "new.csv"
old_base_url = "https://old.com"
new_base_url = "https://new.com"
similarity_threshold = 0.9
"#;

fn setup(dir: &Path) {
    write(dir, "old.csv", OLD_CSV);
    write(dir, "new.csv", NEW_CSV);
    write(dir, "job.toml", JOB);
}

#[test]
fn run_writes_table_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    setup(dir.path());

    let out = redirmap(&["run", "job.toml"], dir.path());
    assert!(
        out.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "Old URL,New URL\n/face-cream,/shop/face-cream\n"
    );

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("1 matched, 1 dropped"), "stderr: {stderr}");
}

#[test]
fn run_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    setup(dir.path());

    let out = redirmap(&["run", "job.toml", "-o", "redirects.csv"], dir.path());
    assert!(out.status.success());
    // Table goes to the file, not stdout; no trailing newline in the file.
    assert!(out.stdout.is_empty());
    let table = std::fs::read_to_string(dir.path().join("redirects.csv")).unwrap();
    assert_eq!(table, "Old URL,New URL\n/face-cream,/shop/face-cream");
}

#[test]
fn run_json_report() {
    let dir = tempfile::tempdir().unwrap();
    setup(dir.path());

    let out = redirmap(&["run", "job.toml", "--json", "--quiet"], dir.path());
    assert!(out.status.success());

    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["meta"]["config_name"], "Relaunch");
    assert_eq!(report["summary"]["matched"], 1);
    assert_eq!(report["summary"]["dropped"], 1);
    assert_eq!(report["pairs"][0]["old_url"], "/face-cream");
    assert_eq!(
        report["csv"],
        "Old URL,New URL\n/face-cream,/shop/face-cream"
    );
    // --quiet suppresses the summary line.
    assert!(out.stderr.is_empty(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
}

#[test]
fn progress_flag_reports_per_record() {
    let dir = tempfile::tempdir().unwrap();
    setup(dir.path());

    let out = redirmap(&["run", "job.toml", "--progress", "-q"], dir.path());
    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("progress: 1/2"), "stderr: {stderr}");
    assert!(stderr.contains("progress: 2/2"), "stderr: {stderr}");
}

#[test]
fn invalid_threshold_exits_config_code() {
    let dir = tempfile::tempdir().unwrap();
    setup(dir.path());
    write(
        dir.path(),
        "bad.toml",
        "name = \"Bad\"\nsimilarity_threshold = 1.5\n",
    );

    let out = redirmap(&["run", "bad.toml"], dir.path());
    assert_eq!(out.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("within [0, 1]"), "stderr: {stderr}");
}

#[test]
fn missing_input_file_reference_exits_config_code() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "job.toml", "name = \"No Files\"\n");

    let out = redirmap(&["run", "job.toml"], dir.path());
    assert_eq!(out.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("old_file"), "stderr: {stderr}");
    assert!(stderr.contains("hint:"), "stderr: {stderr}");
}

#[test]
fn strict_short_row_exits_parse_code() {
    let dir = tempfile::tempdir().unwrap();
    setup(dir.path());
    write(dir.path(), "old.csv", "Title,URL\nOrphan Row\n");
    write(
        dir.path(),
        "job.toml",
        &format!("{JOB}strictness = \"strict\"\n"),
    );

    let out = redirmap(&["run", "job.toml"], dir.path());
    assert_eq!(out.status.code(), Some(4));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("expected `title,url`"), "stderr: {stderr}");
}

#[test]
fn validate_accepts_good_config() {
    let dir = tempfile::tempdir().unwrap();
    setup(dir.path());

    let out = redirmap(&["validate", "job.toml"], dir.path());
    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("valid: merge 'Relaunch'"), "stderr: {stderr}");
}

#[test]
fn validate_rejects_malformed_toml() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "job.toml", "name = [unclosed\n");

    let out = redirmap(&["validate", "job.toml"], dir.path());
    assert_eq!(out.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("config parse error"), "stderr: {stderr}");
}

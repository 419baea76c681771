use crate::builder::{build_pairs, build_table};
use crate::config::MergeConfig;
use crate::error::MergeError;
use crate::matcher::match_records;
use crate::model::{MergeInput, MergeMeta, MergeReport, MergeSummary};
use crate::parse::parse_records;
use crate::similarity::SorensenDice;

/// Run one reconciliation over pre-parsed inventories.
pub fn run(config: &MergeConfig, input: &MergeInput) -> Result<MergeReport, MergeError> {
    run_with_progress(config, input, |_, _| {})
}

/// Like [`run`], reporting (processed, total) after each old record.
pub fn run_with_progress(
    config: &MergeConfig,
    input: &MergeInput,
    progress: impl FnMut(usize, usize),
) -> Result<MergeReport, MergeError> {
    config.validate()?;

    let results = match_records(
        &input.old,
        &input.new,
        config.turbo_match,
        config.similarity_threshold,
        &SorensenDice,
        progress,
    );

    let pairs = build_pairs(&results, &config.old_base_url, &config.new_base_url);
    let csv = build_table(&pairs);

    Ok(MergeReport {
        meta: MergeMeta {
            config_name: config.name.clone(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: chrono::Utc::now().to_rfc3339(),
            similarity_threshold: config.similarity_threshold,
            turbo_match: config.turbo_match,
        },
        summary: MergeSummary {
            old_records: input.old.len(),
            new_records: input.new.len(),
            matched: pairs.len(),
            dropped: input.old.len() - pairs.len(),
        },
        pairs,
        csv,
    })
}

/// One-call contract for blob callers: parse both inventories per the
/// configured strictness, then run.
pub fn merge_csv(
    config: &MergeConfig,
    old_csv: &str,
    new_csv: &str,
) -> Result<MergeReport, MergeError> {
    config.validate()?;

    let input = MergeInput {
        old: parse_records(old_csv, config.strictness)?,
        new: parse_records(new_csv, config.strictness)?,
    };

    run(config, &input)
}

use serde::Serialize;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// One title/URL row from an input blob. `url` is `None` when the source
/// line had no second field (lenient parsing keeps such rows).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub title: String,
    pub url: Option<String>,
}

/// Pre-parsed inventories. Old-set order drives iteration and output
/// order; new-set order only breaks ties between equal keys.
#[derive(Debug, Clone)]
pub struct MergeInput {
    pub old: Vec<Record>,
    pub new: Vec<Record>,
}

// ---------------------------------------------------------------------------
// Matching
// ---------------------------------------------------------------------------

/// Outcome of matching one old record against the whole new set.
/// `new` is `None` when no candidate reached the threshold; such
/// results are dropped from the redirect table, not errors.
#[derive(Debug, Clone)]
pub struct MatchResult {
    pub old: Record,
    pub new: Option<Record>,
    pub score: f64,
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// One row of the redirect table: comma-escaped, base-stripped URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedirectPair {
    pub old_url: String,
    pub new_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MergeSummary {
    pub old_records: usize,
    pub new_records: usize,
    pub matched: usize,
    pub dropped: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct MergeMeta {
    pub config_name: String,
    pub engine_version: String,
    pub run_at: String,
    pub similarity_threshold: f64,
    pub turbo_match: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct MergeReport {
    pub meta: MergeMeta,
    pub summary: MergeSummary,
    pub pairs: Vec<RedirectPair>,
    /// The serialized redirect table; byte-identical across reruns with
    /// the same inputs and config.
    pub csv: String,
}

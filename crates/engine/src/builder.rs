use crate::model::{MatchResult, RedirectPair};

/// Header row of the redirect table.
pub const OUTPUT_HEADER: &str = "Old URL,New URL";

/// Percent-encode literal commas so a URL survives the comma-delimited
/// output format.
pub fn escape_commas(url: &str) -> String {
    url.replace(',', "%2C")
}

/// Remove the first occurrence of `base` anywhere in `url`. Substring
/// semantics, not a prefix trim: callers needing guaranteed prefix-only
/// stripping must pre-validate that `base` is in fact a prefix.
pub fn strip_base(url: &str, base: &str) -> String {
    if base.is_empty() {
        return url.to_string();
    }
    url.replacen(base, "", 1)
}

/// Keep matched results only and derive the output row for each, in
/// old-set order. A matched record with a missing URL contributes an
/// empty field rather than failing.
pub fn build_pairs(
    results: &[MatchResult],
    old_base_url: &str,
    new_base_url: &str,
) -> Vec<RedirectPair> {
    results
        .iter()
        .filter_map(|r| r.new.as_ref().map(|n| (&r.old, n)))
        .map(|(old, new)| RedirectPair {
            old_url: strip_base(&escape_commas(old.url.as_deref().unwrap_or("")), old_base_url),
            new_url: strip_base(&escape_commas(new.url.as_deref().unwrap_or("")), new_base_url),
        })
        .collect()
}

/// Serialize pairs under the header row, newline-joined, no trailing
/// newline. No quoting beyond the comma escaping already applied.
pub fn build_table(pairs: &[RedirectPair]) -> String {
    let mut out = String::from(OUTPUT_HEADER);
    for pair in pairs {
        out.push('\n');
        out.push_str(&pair.old_url);
        out.push(',');
        out.push_str(&pair.new_url);
    }
    out
}

use crate::key::match_key;
use crate::model::{MatchResult, Record};
use crate::similarity::Similarity;

/// Best-scoring candidate for one key. `index` is the position of the
/// first candidate that reached the winning score.
#[derive(Debug, Clone, PartialEq)]
pub struct BestMatch {
    pub index: usize,
    pub key: String,
    pub score: f64,
}

/// Scan all candidates and keep the maximum score. Ties keep the
/// earliest candidate. `None` only when the candidate list is empty.
pub fn find_best_match(
    key: &str,
    candidates: &[String],
    similarity: &dyn Similarity,
) -> Option<BestMatch> {
    let mut best: Option<(usize, f64)> = None;

    for (i, candidate) in candidates.iter().enumerate() {
        let score = similarity.score(key, candidate);
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((i, score)),
        }
    }

    best.map(|(index, score)| BestMatch {
        index,
        key: candidates[index].clone(),
        score,
    })
}

/// Match every old record against the new set, in old-set order.
///
/// O(|old| × |new|) pairwise comparisons; fine for the hundreds to
/// low-thousands of URLs a site migration produces. The matched record
/// is resolved by first occurrence of the winning key in new-set order,
/// so duplicate keys always resolve to the earliest candidate.
/// `progress` is called once per old record with (processed, total);
/// it is advisory and has no effect on the results.
pub fn match_records(
    old: &[Record],
    new: &[Record],
    turbo: bool,
    threshold: f64,
    similarity: &dyn Similarity,
    mut progress: impl FnMut(usize, usize),
) -> Vec<MatchResult> {
    let new_keys: Vec<String> = new.iter().map(|r| match_key(r, turbo)).collect();
    let total = old.len();
    let mut results = Vec::with_capacity(total);

    for (done, old_record) in old.iter().enumerate() {
        let key = match_key(old_record, turbo);
        let best = find_best_match(&key, &new_keys, similarity);

        let matched = best
            .as_ref()
            .filter(|b| b.score >= threshold)
            .and_then(|b| {
                let first = new_keys.iter().position(|k| *k == b.key)?;
                Some(new[first].clone())
            });

        results.push(MatchResult {
            old: old_record.clone(),
            new: matched,
            score: best.map_or(0.0, |b| b.score),
        });

        progress(done + 1, total);
    }

    results
}

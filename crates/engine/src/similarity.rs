/// Pluggable string-similarity strategy.
///
/// Implementations must return a score in `[0, 1]`, score identical
/// strings 1.0, fully disjoint strings 0.0, and be symmetric.
pub trait Similarity {
    fn score(&self, a: &str, b: &str) -> f64;
}

/// Sørensen–Dice coefficient over character bigrams (`strsim`).
/// Whitespace is ignored, so slug-normalized keys compare on their
/// letters alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SorensenDice;

impl Similarity for SorensenDice {
    fn score(&self, a: &str, b: &str) -> f64 {
        strsim::sorensen_dice(a, b)
    }
}

use serde::Deserialize;

use crate::error::MergeError;

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// One merge job: where the two inventories come from and how to match
/// them. `old_file` / `new_file` are only meaningful to file-based
/// callers (the CLI); blob-based callers may leave them empty.
#[derive(Debug, Clone, Deserialize)]
pub struct MergeConfig {
    pub name: String,
    #[serde(default)]
    pub old_file: String,
    #[serde(default)]
    pub new_file: String,
    /// Stripped from matched old URLs as a literal substring.
    #[serde(default)]
    pub old_base_url: String,
    /// Stripped from matched new URLs as a literal substring.
    #[serde(default)]
    pub new_base_url: String,
    /// Minimum acceptable similarity score, in `[0, 1]`.
    #[serde(default = "default_threshold")]
    pub similarity_threshold: f64,
    /// Fold a slug-normalized form of each URL into the comparison key.
    #[serde(default)]
    pub turbo_match: bool,
    #[serde(default)]
    pub strictness: Strictness,
}

fn default_threshold() -> f64 {
    1.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strictness {
    /// Short rows become records with a missing URL.
    Lenient,
    /// Short rows are rejected with a parse error.
    Strict,
}

impl Default for Strictness {
    fn default() -> Self {
        Self::Lenient
    }
}

// ---------------------------------------------------------------------------
// Parse + Validate
// ---------------------------------------------------------------------------

impl MergeConfig {
    pub fn from_toml(input: &str) -> Result<Self, MergeError> {
        let config: MergeConfig =
            toml::from_str(input).map_err(|e| MergeError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), MergeError> {
        // NaN fails the range check too.
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(MergeError::ConfigValidation(format!(
                "similarity_threshold must be within [0, 1], got {}",
                self.similarity_threshold
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

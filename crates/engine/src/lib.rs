//! `redirmap-engine` — title-similarity URL redirect reconciliation.
//!
//! Pure engine crate: receives raw delimited text for the old and new
//! URL inventories, returns the redirect table. No CLI or IO
//! dependencies.

pub mod builder;
pub mod config;
pub mod engine;
pub mod error;
pub mod key;
pub mod matcher;
pub mod model;
pub mod parse;
pub mod similarity;

pub use config::{MergeConfig, Strictness};
pub use engine::{merge_csv, run, run_with_progress};
pub use error::MergeError;
pub use model::{MergeInput, MergeReport, Record};

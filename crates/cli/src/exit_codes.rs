//! CLI Exit Code Registry
//!
//! Single source of truth for redirmap exit codes. Exit codes are part
//! of the shell contract — scripts rely on them.
//!
//! | Code | Meaning                                   |
//! |------|-------------------------------------------|
//! | 0    | Success                                   |
//! | 2    | CLI usage error (handled by clap)         |
//! | 3    | Invalid or unreadable job config          |
//! | 4    | Input parse error (strict mode)           |
//! | 5    | Runtime error (IO, serialization)         |

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// Job config failed to parse or validate, or names no input files.
pub const EXIT_MERGE_INVALID_CONFIG: u8 = 3;

/// An input blob was rejected under strict parsing.
pub const EXIT_MERGE_PARSE: u8 = 4;

/// IO or serialization failure while running a merge.
pub const EXIT_MERGE_RUNTIME: u8 = 5;

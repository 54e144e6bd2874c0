//!
//! Benchmark log reading error.
//!

use std::path::PathBuf;

///
/// Benchmark log reading error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error reading the log file.
    #[error("Reading log file {path:?}: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the log file.
        path: PathBuf,
    },
    /// A line that is not a recognizable log entry.
    #[error("Parsing log line {line}: unrecognized entry `{text}`")]
    InvalidLine {
        /// The 1-based line number.
        line: usize,
        /// The offending line text.
        text: String,
    },
    /// A measurement that is not a valid non-negative number.
    #[error("Parsing log line {line}: invalid value `{value}` for `{key}`")]
    InvalidValue {
        /// The 1-based line number.
        line: usize,
        /// The measurement key.
        key: String,
        /// The offending value text.
        value: String,
    },
    /// A log without any recognizable entries.
    #[error("The log contains no benchmark entries")]
    NoEntries,
}

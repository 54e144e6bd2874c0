//!
//! A single framework measurement record.
//!

///
/// A single framework measurement record.
///
/// Built by the log parser and never mutated afterwards.
///
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Record {
    /// Requests per second.
    pub rps: f64,
    /// Peak memory in MB.
    pub memory: f64,
    /// Execution time in milliseconds.
    pub time: f64,
    /// Count of included files.
    pub file: u64,
    /// Classification tag, e.g. `micro` or `router`.
    #[serde(rename = "type", default)]
    pub kind: String,
}

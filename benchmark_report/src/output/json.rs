//!
//! Serializing report data to JSON.
//!

use std::path::PathBuf;

use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::model::relative::RelativeRecord;
use crate::model::relative::RelativeResultSet;

///
/// Information associated with the report.
///
#[derive(Debug, Serialize)]
pub struct Metadata {
    /// When the report was generated.
    pub generated: DateTime<Utc>,
    /// Path of the log the results were parsed from.
    pub source: PathBuf,
}

///
/// JSON output format for report data.
///
pub struct Json {
    /// The JSON string.
    pub content: String,
}

///
/// One serialized result row.
///
#[derive(Serialize)]
struct Row<'a> {
    /// The framework name.
    framework: &'a str,
    /// The measurements and relative values.
    #[serde(flatten)]
    entry: &'a RelativeRecord,
}

///
/// The serialized report document.
///
#[derive(Serialize)]
struct Document<'a> {
    /// The report metadata.
    metadata: Metadata,
    /// The result rows in log order.
    results: Vec<Row<'a>>,
}

impl TryFrom<(&RelativeResultSet, Metadata)> for Json {
    type Error = serde_json::Error;

    fn try_from((results, metadata): (&RelativeResultSet, Metadata)) -> Result<Self, Self::Error> {
        let document = Document {
            metadata,
            results: results
                .entries
                .iter()
                .map(|(name, entry)| Row {
                    framework: name.as_str(),
                    entry,
                })
                .collect(),
        };
        let content = serde_json::to_string_pretty(&document)?;
        Ok(Self { content })
    }
}

//!
//! Measurement records augmented with relative values.
//!

use crate::model::metric::Metric;
use crate::model::record::Record;
use crate::model::result_set::ResultSet;

///
/// A measurement record augmented with relative values.
///
/// Relative fields stay empty until the calculator fills them in for the
/// corresponding metric.
///
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct RelativeRecord {
    /// The measured metrics.
    #[serde(flatten)]
    pub record: Record,
    /// Throughput as a fraction of the set's fastest framework.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rps_relative: Option<f64>,
    /// Peak memory as a multiple of the set's leanest framework.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_relative: Option<f64>,
    /// Execution time as a multiple of the set's fastest execution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_relative: Option<f64>,
    /// Included files as a multiple of the set's smallest count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_relative: Option<f64>,
}

impl RelativeRecord {
    ///
    /// Returns the relative value for a metric, if computed.
    ///
    pub fn relative(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Rps => self.rps_relative,
            Metric::Memory => self.memory_relative,
            Metric::Time => self.time_relative,
            Metric::File => self.file_relative,
        }
    }

    ///
    /// Sets the relative value for a metric.
    ///
    pub fn set_relative(&mut self, metric: Metric, value: f64) {
        match metric {
            Metric::Rps => self.rps_relative = Some(value),
            Metric::Memory => self.memory_relative = Some(value),
            Metric::Time => self.time_relative = Some(value),
            Metric::File => self.file_relative = Some(value),
        }
    }
}

impl From<Record> for RelativeRecord {
    fn from(record: Record) -> Self {
        Self {
            record,
            ..Self::default()
        }
    }
}

///
/// A result set whose entries carry relative values.
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RelativeResultSet {
    /// The entries in insertion order.
    pub entries: Vec<(String, RelativeRecord)>,
}

impl From<ResultSet> for RelativeResultSet {
    fn from(set: ResultSet) -> Self {
        Self {
            entries: set
                .into_iter()
                .map(|(name, record)| (name, RelativeRecord::from(record)))
                .collect(),
        }
    }
}

impl RelativeResultSet {
    ///
    /// Returns the entry for a framework name, if present.
    ///
    pub fn get(&self, name: &str) -> Option<&RelativeRecord> {
        self.entries
            .iter()
            .find_map(|(existing, entry)| (existing == name).then_some(entry))
    }

    ///
    /// The number of entries.
    ///
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    ///
    /// Whether the set has no entries.
    ///
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

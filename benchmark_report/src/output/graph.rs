//!
//! Chart datasets derived from a result set.
//!

use serde::Serialize;

use crate::model::metric::Metric;
use crate::model::relative::RelativeResultSet;

///
/// The dataset one chart is drawn from. Rendering is left to external
/// tooling; this is only the data shape it consumes.
///
#[derive(Debug, Serialize)]
pub struct Graph {
    /// The metric the chart plots.
    pub metric: String,
    /// The chart title.
    pub title: String,
    /// The unit displayed on the value axis.
    pub unit: String,
    /// Framework name and metric value, in log order.
    pub rows: Vec<(String, f64)>,
}

impl Graph {
    ///
    /// Builds the dataset for one metric.
    ///
    pub fn new(results: &RelativeResultSet, metric: Metric, title: &str, unit: &str) -> Self {
        Self {
            metric: metric.to_string(),
            title: title.to_owned(),
            unit: unit.to_owned(),
            rows: results
                .entries
                .iter()
                .map(|(name, entry)| (name.clone(), metric.of(&entry.record)))
                .collect(),
        }
    }

    ///
    /// Builds the standard set of datasets: throughput, memory,
    /// execution time, and included files.
    ///
    pub fn standard_set(results: &RelativeResultSet) -> Vec<Self> {
        vec![
            Self::new(results, Metric::Rps, "Throughput", "requests per second"),
            Self::new(results, Metric::Memory, "Memory", "peak memory (MB)"),
            Self::new(results, Metric::Time, "Exec Time", "ms"),
            Self::new(results, Metric::File, "Included Files", "count"),
        ]
    }
}

//!
//! Provides tools for computing relative benchmark results.
//!

pub mod comparison;

use crate::model::metric::Direction;
use crate::model::metric::Metric;
use crate::model::relative::RelativeResultSet;

///
/// Selects the baseline value for a metric within a set: the maximum for
/// metrics where higher is better, the minimum where lower is better.
///
/// Returns zero for an empty set.
///
pub fn baseline(set: &RelativeResultSet, metric: Metric) -> f64 {
    let values = set
        .entries
        .iter()
        .map(|(_name, entry)| metric.of(&entry.record));
    match metric.direction() {
        Direction::HigherIsBetter => values.reduce(f64::max),
        Direction::LowerIsBetter => values.reduce(f64::min),
    }
    .unwrap_or_default()
}

///
/// Computes `<metric>_relative` for every entry of the set.
///
/// The relative value is the entry's value divided by the set baseline,
/// so the baseline holder always reads `1.0`: a fraction of the fastest
/// for throughput, a multiple of the leanest for cost metrics. A zero
/// baseline yields `0.0` for every entry.
///
pub fn recalc_relative(set: &mut RelativeResultSet, metric: Metric) {
    let baseline = baseline(set, metric);
    for (_name, entry) in set.entries.iter_mut() {
        let relative = if baseline == 0.0 {
            0.0
        } else {
            metric.of(&entry.record) / baseline
        };
        entry.set_relative(metric, relative);
    }
}

///
/// Computes relative values for all metrics.
///
pub fn recalc_relative_all(set: &mut RelativeResultSet) {
    for metric in Metric::ALL {
        recalc_relative(set, metric);
    }
}

//!
//! Compares two benchmark snapshots of the same frameworks.
//!

use colored::Colorize;

use crate::analysis;
use crate::model::metric::Direction;
use crate::model::metric::Metric;
use crate::model::relative::RelativeResultSet;
use crate::model::result_set::ResultSet;
use crate::output::table::Table;

/// The suffix marking the candidate row of a comparison pair.
pub const CANDIDATE_SUFFIX: &str = " (*)";

///
/// A comparison of two benchmark snapshots of the same frameworks,
/// e.g. a `master` checkout against an `optimize` checkout.
///
/// Producing the two snapshots is the caller's responsibility; the
/// comparison only pairs up two already-parsed result sets.
///
#[derive(Debug)]
pub struct Comparison {
    /// One two-entry pair set per framework, in request order.
    pub pairs: Vec<RelativeResultSet>,
}

impl Comparison {
    ///
    /// Pairs each framework's reference and candidate records and
    /// recalculates relative values within each pair, so the candidate
    /// row is expressed relative to its own reference.
    ///
    /// The candidate row is suffixed with ` (*)`. A framework missing
    /// from either set is an error.
    ///
    pub fn new(
        reference: &ResultSet,
        candidate: &ResultSet,
        frameworks: &[String],
    ) -> anyhow::Result<Self> {
        let mut pairs = Vec::with_capacity(frameworks.len());
        for name in frameworks.iter() {
            let reference_record = reference.get(name).ok_or_else(|| {
                anyhow::anyhow!("Framework `{name}` is missing from the reference log")
            })?;
            let candidate_record = candidate.get(name).ok_or_else(|| {
                anyhow::anyhow!("Framework `{name}` is missing from the candidate log")
            })?;

            let mut set = ResultSet::new();
            set.insert(name.clone(), reference_record.clone());
            set.insert(
                format!("{name}{CANDIDATE_SUFFIX}"),
                candidate_record.clone(),
            );
            let mut pair = RelativeResultSet::from(set);
            analysis::recalc_relative_all(&mut pair);
            pairs.push(pair);
        }
        Ok(Self { pairs })
    }

    ///
    /// Lists every framework of the reference set, in reference order,
    /// that also appears in the candidate set.
    ///
    pub fn common_frameworks(reference: &ResultSet, candidate: &ResultSet) -> Vec<String> {
        reference
            .names()
            .filter(|name| candidate.contains(name))
            .map(str::to_owned)
            .collect()
    }

    ///
    /// Renders the concatenated pair tables, with the header on the
    /// first table only.
    ///
    pub fn to_table(&self) -> String {
        let mut output = String::new();
        for (index, pair) in self.pairs.iter().enumerate() {
            output.push_str(Table::new(pair).render(index == 0).as_str());
        }
        output
    }

    ///
    /// Prints a per-framework summary of candidate-vs-reference factors
    /// to the terminal: improvements green, regressions bright red.
    ///
    pub fn print_summary(&self) {
        for pair in self.pairs.iter() {
            let (name, reference) = &pair.entries[0];
            let (_candidate_name, candidate) = &pair.entries[1];

            print!("{name}:");
            for metric in Metric::ALL {
                let reference_value = metric.of(&reference.record);
                let candidate_value = metric.of(&candidate.record);
                let factor = if reference_value == 0.0 {
                    0.0
                } else {
                    candidate_value / reference_value
                };
                print!(" {metric} {}", Self::format_factor(metric, factor));
            }
            println!();
        }
    }

    ///
    /// Formats and colorizes a candidate-vs-reference factor.
    ///
    fn format_factor(metric: Metric, factor: f64) -> colored::ColoredString {
        let text = format!("{factor:.3}");
        let improved = match metric.direction() {
            Direction::HigherIsBetter => factor > 1.0,
            Direction::LowerIsBetter => factor < 1.0,
        };
        let regressed = match metric.direction() {
            Direction::HigherIsBetter => factor < 1.0,
            Direction::LowerIsBetter => factor > 1.0,
        };
        if improved {
            text.green()
        } else if regressed {
            text.bright_red()
        } else {
            text.white()
        }
    }
}

//!
//! The benchmark report library.
//!

pub mod analysis;
pub mod input;
pub mod model;
pub mod output;
pub mod output_format;

pub use crate::analysis::baseline;
pub use crate::analysis::comparison::Comparison;
pub use crate::analysis::comparison::CANDIDATE_SUFFIX;
pub use crate::analysis::recalc_relative;
pub use crate::analysis::recalc_relative_all;
pub use crate::input::error::Error as LogError;
pub use crate::input::LogReport;
pub use crate::model::metric::Direction;
pub use crate::model::metric::Metric;
pub use crate::model::record::Record;
pub use crate::model::relative::RelativeRecord;
pub use crate::model::relative::RelativeResultSet;
pub use crate::model::result_set::ResultSet;
pub use crate::output::graph::Graph;
pub use crate::output::json::Metadata as ReportMetadata;
pub use crate::output::table::Table;
pub use crate::output::Output;
pub use crate::output::Report;
pub use crate::output_format::OutputFormat;

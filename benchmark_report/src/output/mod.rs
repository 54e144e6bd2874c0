//!
//! Benchmark report output.
//!

pub mod csv;
pub mod graph;
pub mod json;
pub mod table;
pub mod xlsx;

use std::path::PathBuf;

use chrono::Utc;

use crate::model::relative::RelativeResultSet;
use crate::output_format::OutputFormat;

use self::csv::Csv;
use self::graph::Graph;
use self::json::Json;
use self::json::Metadata;
use self::table::Table;
use self::xlsx::Xlsx;

///
/// The source data and options a report is rendered from.
///
pub struct Report<'a> {
    /// The result set with relative values computed.
    pub results: &'a RelativeResultSet,
    /// Path of the log the results were parsed from.
    pub source: PathBuf,
    /// Whether table output starts with a header row.
    pub header: bool,
}

///
/// A rendered benchmark report.
///
pub enum Output {
    /// Report output is a single text file.
    SingleFile(String),
    /// Report output is an Excel workbook.
    SingleFileXlsx(rust_xlsxwriter::Workbook),
}

impl Output {
    ///
    /// Writes the report to a file.
    ///
    pub fn write_to_file(self, path: PathBuf) -> anyhow::Result<()> {
        match self {
            Output::SingleFile(content) => {
                std::fs::write(path.as_path(), content)
                    .map_err(|error| anyhow::anyhow!("Report file {path:?} writing: {error}"))?;
            }
            Output::SingleFileXlsx(mut workbook) => {
                workbook
                    .save(path.as_path())
                    .map_err(|error| anyhow::anyhow!("Report file {path:?} writing: {error}"))?;
            }
        }
        Ok(())
    }

    ///
    /// Prints the report to the standard output.
    ///
    pub fn print(self) -> anyhow::Result<()> {
        match self {
            Output::SingleFile(content) => {
                print!("{content}");
                Ok(())
            }
            Output::SingleFileXlsx(_) => {
                anyhow::bail!("The XLSX format requires an output path. Use `--output` to specify one.")
            }
        }
    }
}

impl TryFrom<(Report<'_>, OutputFormat)> for Output {
    type Error = anyhow::Error;

    fn try_from((report, output_format): (Report<'_>, OutputFormat)) -> Result<Self, Self::Error> {
        Ok(match output_format {
            OutputFormat::Table => {
                Output::SingleFile(Table::new(report.results).render(report.header))
            }
            OutputFormat::Markdown => {
                Output::SingleFile(Table::new(report.results).render_markdown())
            }
            OutputFormat::Json => {
                let metadata = Metadata {
                    generated: Utc::now(),
                    source: report.source,
                };
                Json::try_from((report.results, metadata))?.into()
            }
            OutputFormat::Csv => Csv::from(report.results).into(),
            OutputFormat::Xlsx => Xlsx::try_from(report.results)?.into(),
            OutputFormat::Graph => {
                let graphs = Graph::standard_set(report.results);
                Output::SingleFile(serde_json::to_string_pretty(&graphs)?)
            }
        })
    }
}

impl From<Json> for Output {
    fn from(value: Json) -> Self {
        Output::SingleFile(value.content)
    }
}

impl From<Csv> for Output {
    fn from(value: Csv) -> Self {
        Output::SingleFile(value.content)
    }
}

impl From<Xlsx> for Output {
    fn from(value: Xlsx) -> Self {
        Output::SingleFileXlsx(value.finalize())
    }
}

//!
//! The benchmark report arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The benchmark report arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// Path to the benchmark log file.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Report output format: `table`, `markdown`, `json`, `csv`, `xlsx`, or `graph`.
    #[arg(long, default_value_t = benchmark_report::OutputFormat::Table)]
    pub format: benchmark_report::OutputFormat,

    /// Path to the output file. The report is printed to the standard output if omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Omit the table header row.
    #[arg(long)]
    pub no_header: bool,
}

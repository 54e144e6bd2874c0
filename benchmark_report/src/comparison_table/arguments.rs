//!
//! The comparison table arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The comparison table arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// Path to the reference benchmark log, e.g. from a `master` checkout.
    #[arg(long)]
    pub reference: PathBuf,

    /// Path to the candidate benchmark log, e.g. from an `optimize` checkout.
    #[arg(long)]
    pub candidate: PathBuf,

    /// Frameworks to compare. All frameworks present in both logs if omitted.
    #[arg(long = "frameworks", num_args = 1..)]
    pub frameworks: Vec<String>,

    /// Path to the output file. The tables are printed to the standard output if omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress the per-framework change summary.
    #[arg(short, long)]
    pub quiet: bool,
}

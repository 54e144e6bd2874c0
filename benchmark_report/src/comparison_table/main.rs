//!
//! The comparison table binary.
//!

pub(crate) mod arguments;

use clap::Parser;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() -> anyhow::Result<()> {
    let arguments = Arguments::try_parse()?;

    let reference = benchmark_report::LogReport::try_from(arguments.reference.as_path())?;
    let candidate = benchmark_report::LogReport::try_from(arguments.candidate.as_path())?;

    let frameworks = if arguments.frameworks.is_empty() {
        benchmark_report::Comparison::common_frameworks(&reference.results, &candidate.results)
    } else {
        arguments.frameworks
    };
    if frameworks.is_empty() {
        anyhow::bail!("The reference and candidate logs have no frameworks in common.");
    }

    let comparison = benchmark_report::Comparison::new(
        &reference.results,
        &candidate.results,
        frameworks.as_slice(),
    )?;

    let table = comparison.to_table();
    match arguments.output {
        Some(path) => benchmark_report::Output::SingleFile(table).write_to_file(path)?,
        None => print!("{table}"),
    }
    if !arguments.quiet {
        comparison.print_summary();
    }

    Ok(())
}

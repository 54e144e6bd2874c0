//!
//! The benchmark report binary.
//!

pub(crate) mod arguments;
pub(crate) mod tests;

use clap::Parser;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() -> anyhow::Result<()> {
    let arguments = Arguments::try_parse()?;

    let log = benchmark_report::LogReport::try_from(arguments.input.as_path())?;
    let mut results = benchmark_report::RelativeResultSet::from(log.results);
    benchmark_report::recalc_relative_all(&mut results);

    let report = benchmark_report::Report {
        results: &results,
        source: arguments.input,
        header: !arguments.no_header,
    };
    let output: benchmark_report::Output = (report, arguments.format).try_into()?;
    match arguments.output {
        Some(path) => output.write_to_file(path)?,
        None => output.print()?,
    }

    Ok(())
}

//!
//! Tests for the benchmark report pipeline.
//!

#![cfg(test)]

use std::path::PathBuf;

/// The example log used across the pipeline tests.
const HELLO_WORLD_LOG: &str = "\
flight rps=5000 memory=1.2 file=3 type=micro
siler-4 rps=4500 memory=1.5 file=5 type=router
";

fn parsed_results() -> benchmark_report::RelativeResultSet {
    let log =
        benchmark_report::LogReport::parse(HELLO_WORLD_LOG).expect("Failed to parse the log");
    let mut results = benchmark_report::RelativeResultSet::from(log.results);
    benchmark_report::recalc_relative_all(&mut results);
    results
}

#[test]
fn log_to_table() {
    let results = parsed_results();

    let flight = results.get("flight").expect("Always exists");
    assert_eq!(flight.rps_relative, Some(1.0));
    let siler = results.get("siler-4").expect("Always exists");
    assert_eq!(siler.rps_relative, Some(0.9));

    let table = benchmark_report::Table::new(&results).render(true);
    assert_eq!(table.lines().count(), 3);

    let siler_row = table.lines().nth(2).expect("Always exists");
    let columns: Vec<&str> = siler_row.trim_matches('|').split('|').collect();
    assert_eq!(columns[0].trim(), "siler-4");
    assert_eq!(columns[1].trim(), "4,500.00");
    assert_eq!(columns[2].trim(), "0.9");
    assert_eq!(columns[6].trim(), "router");
}

#[test]
fn zero_throughput_reads_zero_instead_of_failing() {
    let log = "flight rps=5000 memory=1.2 file=3 type=micro\nstalled rps=0 memory=1.0 file=2 type=micro\n";
    let log = benchmark_report::LogReport::parse(log).expect("Failed to parse the log");
    let mut results = benchmark_report::RelativeResultSet::from(log.results);
    benchmark_report::recalc_relative(&mut results, benchmark_report::Metric::Rps);

    let stalled = results.get("stalled").expect("Always exists");
    assert_eq!(stalled.rps_relative, Some(0.0));
}

#[test]
fn table_output_format() {
    let results = parsed_results();
    let report = benchmark_report::Report {
        results: &results,
        source: PathBuf::from("output/results.hello_world.log"),
        header: true,
    };

    let output: benchmark_report::Output = (report, benchmark_report::OutputFormat::Table)
        .try_into()
        .expect("Failed to render the report");
    let content = match output {
        benchmark_report::Output::SingleFile(content) => content,
        _ => unimplemented!(),
    };
    assert!(content.starts_with("|framework"));
    assert_eq!(content.lines().count(), 3);
}

#[test]
fn markdown_output_has_a_separator_row() {
    let results = parsed_results();
    let report = benchmark_report::Report {
        results: &results,
        source: PathBuf::from("output/results.hello_world.log"),
        header: true,
    };

    let output: benchmark_report::Output = (report, benchmark_report::OutputFormat::Markdown)
        .try_into()
        .expect("Failed to render the report");
    let content = match output {
        benchmark_report::Output::SingleFile(content) => content,
        _ => unimplemented!(),
    };
    assert_eq!(content.lines().count(), 4);
    assert!(content.lines().nth(1).expect("Always exists").starts_with("|---"));
}

#[test]
fn json_output_round_trips() {
    let results = parsed_results();
    let report = benchmark_report::Report {
        results: &results,
        source: PathBuf::from("output/results.hello_world.log"),
        header: true,
    };

    let output: benchmark_report::Output = (report, benchmark_report::OutputFormat::Json)
        .try_into()
        .expect("Failed to render the report");
    let content = match output {
        benchmark_report::Output::SingleFile(content) => content,
        _ => unimplemented!(),
    };

    let value: serde_json::Value =
        serde_json::from_str(content.as_str()).expect("Failed to parse the report back");
    assert_eq!(value["results"][0]["framework"], "flight");
    assert_eq!(value["results"][1]["rps_relative"], 0.9);
    assert_eq!(
        value["metadata"]["source"],
        "output/results.hello_world.log"
    );
}

#[test]
fn graph_output_exposes_the_standard_datasets() {
    let results = parsed_results();
    let report = benchmark_report::Report {
        results: &results,
        source: PathBuf::from("output/results.hello_world.log"),
        header: true,
    };

    let output: benchmark_report::Output = (report, benchmark_report::OutputFormat::Graph)
        .try_into()
        .expect("Failed to render the report");
    let content = match output {
        benchmark_report::Output::SingleFile(content) => content,
        _ => unimplemented!(),
    };

    let value: serde_json::Value =
        serde_json::from_str(content.as_str()).expect("Failed to parse the datasets back");
    let graphs = value.as_array().expect("Always an array");
    assert_eq!(graphs.len(), 4);
    assert_eq!(graphs[0]["title"], "Throughput");
    assert_eq!(graphs[0]["rows"][0][0], "flight");
    assert_eq!(graphs[0]["rows"][0][1], 5000.0);
}

#[test]
fn rendered_values_keep_two_decimal_precision() {
    let results = parsed_results();
    let table = benchmark_report::Table::new(&results).render(false);

    for ((_name, entry), line) in results.entries.iter().zip(table.lines()) {
        let columns: Vec<&str> = line.trim_matches('|').split('|').collect();
        let rendered_rps: f64 = columns[1]
            .trim()
            .replace(',', "")
            .parse()
            .expect("Failed to parse a rendered value back");
        assert!((rendered_rps - entry.record.rps).abs() < 0.01);
        let rendered_memory: f64 = columns[3]
            .trim()
            .replace(',', "")
            .parse()
            .expect("Failed to parse a rendered value back");
        assert!((rendered_memory - entry.record.memory).abs() < 0.01);
    }
}

#[test]
fn comparison_pipeline() {
    let reference = benchmark_report::LogReport::parse(
        "flight rps=4000 memory=1.2 file=3 type=micro\nsiler-4 rps=3000 memory=1.5 file=5 type=router\n",
    )
    .expect("Failed to parse the reference log");
    let candidate = benchmark_report::LogReport::parse(
        "flight rps=5000 memory=1.1 file=3 type=micro\nsiler-4 rps=3300 memory=1.4 file=5 type=router\n",
    )
    .expect("Failed to parse the candidate log");

    let frameworks =
        benchmark_report::Comparison::common_frameworks(&reference.results, &candidate.results);
    let comparison = benchmark_report::Comparison::new(
        &reference.results,
        &candidate.results,
        frameworks.as_slice(),
    )
    .expect("Failed to build the comparison");

    let table = comparison.to_table();
    assert_eq!(table.lines().count(), 5);
    assert!(table.contains("|flight (*)"));
    assert!(table.contains("|siler-4 (*)"));

    let flight_pair = &comparison.pairs[0];
    assert_eq!(
        flight_pair.entries[0]
            .1
            .relative(benchmark_report::Metric::Rps),
        Some(0.8)
    );
    assert_eq!(
        flight_pair.entries[1]
            .1
            .relative(benchmark_report::Metric::Rps),
        Some(1.0)
    );
}

//! Tests for CLI argument parsing and the batch mode

use assert_cmd::Command;
use clap::Parser;
use predicates::prelude::*;
use tablens::cli::Cli;
use tablens::engine::{load_dataset, Predicate, DEFAULT_HISTOGRAM_BINS};

#[path = "common/mod.rs"]
mod common;

#[test]
fn test_cli_default_values() {
    let cli = Cli::parse_from(["tablens", "-i", "data.csv"]);

    assert!(cli.filters.is_empty());
    assert!(!cli.no_interactive, "Default no_interactive should be false");
    assert_eq!(cli.head, 5, "Default preview should be 5 rows");
    assert_eq!(cli.bins, DEFAULT_HISTOGRAM_BINS);
    assert_eq!(
        cli.infer_schema_length, 10000,
        "Default schema inference should be 10000"
    );
    assert!(cli.output.is_none());
    assert!(cli.report.is_none());
}

#[test]
fn test_cli_parses_repeated_filters() {
    let cli = Cli::parse_from([
        "tablens",
        "-i",
        "data.csv",
        "-f",
        "age:range:18:65",
        "--filter",
        "city:in:oslo,paris",
        "-f",
        "score:eq:3.5",
    ]);

    assert_eq!(
        cli.filters,
        vec![
            Predicate::range("age", 18.0, 65.0),
            Predicate::value_in("city", ["oslo", "paris"]),
            Predicate::constant("score", 3.5),
        ]
    );
}

#[test]
fn test_cli_rejects_malformed_filter() {
    let result = Cli::try_parse_from(["tablens", "-f", "age:between:1:2"]);
    assert!(result.is_err(), "Unknown filter operator should be rejected");
}

#[test]
fn test_cli_rejects_zero_bins() {
    let result = Cli::try_parse_from(["tablens", "--bins", "0"]);
    assert!(result.is_err(), "Zero bins should be rejected");
}

fn sample_csv() -> (tempfile::TempDir, std::path::PathBuf) {
    common::create_temp_csv_from_lines(&[
        "id,score,city,code",
        "1,1.0,a,1",
        "2,2.0,b,2",
        "3,3.0,a,cat",
        "4,4.0,c,3.5",
        "5,5.0,b,dog",
    ])
}

#[test]
fn test_batch_run_saves_filtered_output() {
    let (dir, csv_path) = sample_csv();
    let output = dir.path().join("filtered.csv");

    Command::cargo_bin("tablens")
        .unwrap()
        .args(["--no-interactive", "-i"])
        .arg(&csv_path)
        .args(["-f", "score:range:2:4", "-f", "city:in:a,b", "-o"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Correlation Matrix"));

    let saved = load_dataset(&output, 100).unwrap();
    assert_eq!(common::f64_values(&saved.frame, "id"), vec![2.0, 3.0]);
}

#[test]
fn test_batch_run_lists_unique_values() {
    let (_dir, csv_path) = sample_csv();

    Command::cargo_bin("tablens")
        .unwrap()
        .args(["--no-interactive", "--unique", "code", "-i"])
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("cat").and(predicate::str::contains("dog")));
}

#[test]
fn test_batch_run_writes_report() {
    let (dir, csv_path) = sample_csv();
    let report = dir.path().join("report.json");

    Command::cargo_bin("tablens")
        .unwrap()
        .args(["--no-interactive", "-f", "id:eq:3", "-i"])
        .arg(&csv_path)
        .arg("--report")
        .arg(&report)
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(json["filtered_rows"], 1);
    assert_eq!(json["filters"][0], "id:eq:3");
}

#[test]
fn test_batch_run_fails_on_type_mismatch() {
    let (_dir, csv_path) = sample_csv();

    Command::cargo_bin("tablens")
        .unwrap()
        .args(["--no-interactive", "-f", "city:range:1:2", "-i"])
        .arg(&csv_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires a numeric column"));
}

#[test]
fn test_batch_run_fails_on_inverted_range() {
    let (_dir, csv_path) = sample_csv();

    Command::cargo_bin("tablens")
        .unwrap()
        .args(["--no-interactive", "-f", "score:range:10:5", "-i"])
        .arg(&csv_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid range"));
}

#[test]
fn test_batch_run_requires_input() {
    Command::cargo_bin("tablens")
        .unwrap()
        .arg("--no-interactive")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file is required"));
}

#[test]
fn test_batch_run_reports_load_error() {
    Command::cargo_bin("tablens")
        .unwrap()
        .args(["--no-interactive", "-i", "/nonexistent/data.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load"));
}

#[test]
fn test_interactive_reports_filters_dropped_by_failed_load() {
    let dir = tempfile::TempDir::new().unwrap();
    let missing = dir.path().join("missing.csv");

    // Without a terminal the menu exits right after the startup messages.
    Command::cargo_bin("tablens")
        .unwrap()
        .args(["-f", "score:eq:1", "-i"])
        .arg(&missing)
        .assert()
        .stdout(predicate::str::contains("1 filter(s) from the command line were not applied"));
}

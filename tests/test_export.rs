//! Tests for saving filtered data and exporting reports

use polars::prelude::*;
use tablens::engine::{apply_filters, load_dataset, Predicate, PredicateSet};
use tablens::report::{export_report, save_dataset, ExplorationReport, FilterSummary};
use tempfile::TempDir;

#[path = "common/mod.rs"]
mod common;

#[test]
fn test_save_filtered_csv_round_trip() {
    let df = common::create_mixed_dataframe();
    let filtered = apply_filters(&df, &[Predicate::value_in("city", ["a"])]).unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("filtered.csv");

    save_dataset(&filtered, &path).unwrap();
    let reloaded = load_dataset(&path, 100).unwrap();

    common::assert_shape(&reloaded.frame, 2, 4);
    assert_eq!(common::str_values(&reloaded.frame, "city"), vec!["a", "a"]);
}

#[test]
fn test_save_parquet_preserves_frame() {
    let df = common::create_mixed_dataframe();
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("out.parquet");

    save_dataset(&df, &path).unwrap();
    let reloaded = load_dataset(&path, 100).unwrap();

    assert!(reloaded.frame.equals(&df));
}

#[test]
fn test_save_unsupported_format() {
    let df = common::create_mixed_dataframe();
    let temp_dir = TempDir::new().unwrap();

    let err = save_dataset(&df, &temp_dir.path().join("out.txt")).unwrap_err();

    assert!(err.to_string().contains("Unsupported output format"));
}

#[test]
fn test_report_json_contents() {
    let df = df! {
        "a" => [1.0f64, 2.0, 3.0, 4.0],
        "flat" => [1.0f64, 1.0, 1.0, 1.0],
        "city" => ["x", "y", "x", "y"],
    }
    .unwrap();
    let predicates = PredicateSet::from(vec![Predicate::range("a", 1.0, 3.0)]);
    let filtered = apply_filters(&df, &predicates).unwrap();
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("report.json");

    let report = ExplorationReport::build(None, &df, &filtered, &predicates);
    export_report(&report, &path).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();

    assert_eq!(json["original_rows"], 4);
    assert_eq!(json["filtered_rows"], 3);
    assert_eq!(json["filters"][0], "a:range:1:3");
    assert_eq!(json["columns"][2]["kind"], "categorical");
    assert_eq!(json["correlation"]["columns"][1], "flat");
    assert!(json["correlation"]["values"][0][1].is_null(), "NaN should serialize as null");
    assert_eq!(json["correlation"]["values"][0][0], 1.0);
    assert!(json["metadata"].get("input_file").is_none());
}

#[test]
fn test_report_without_numeric_pair_omits_correlation() {
    let df = common::create_mixed_dataframe().select(["score", "city"]).unwrap();
    let predicates = PredicateSet::new();

    let report = ExplorationReport::build(None, &df, &df, &predicates);

    assert!(report.correlation.is_none());
    assert_eq!(report.filtered_rows, 5);
}

#[test]
fn test_filter_summary_percentages() {
    let predicates = PredicateSet::from(vec![Predicate::constant("x", 1.0)]);

    let summary = FilterSummary::new(200, 50, &predicates);

    assert_eq!(summary.kept_pct(), 25.0);
    assert_eq!(summary.filters, vec!["x:eq:1"]);
    assert_eq!(FilterSummary::new(0, 0, &PredicateSet::new()).kept_pct(), 100.0);
}

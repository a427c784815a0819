//! Tests for histogram, box-plot and scatter summaries

use polars::prelude::*;
use tablens::engine::{
    box_summary, histogram, scatter_points, ExploreError, DEFAULT_HISTOGRAM_BINS,
};

#[path = "common/mod.rs"]
mod common;

#[test]
fn test_histogram_counts() {
    let df = df! {
        "x" => [1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0],
    }
    .unwrap();

    let hist = histogram(&df, "x", 3).unwrap();

    assert_eq!(hist.edges, vec![1.0, 4.0, 7.0, 10.0]);
    assert_eq!(hist.counts, vec![3, 3, 4], "max value belongs to the last bin");
    assert_eq!(hist.total(), 10);
}

#[test]
fn test_histogram_skips_missing() {
    let df = df! {
        "x" => [Some(1.0f64), None, Some(2.0), Some(f64::NAN), Some(3.0)],
    }
    .unwrap();

    let hist = histogram(&df, "x", DEFAULT_HISTOGRAM_BINS).unwrap();

    assert_eq!(hist.counts.len(), DEFAULT_HISTOGRAM_BINS);
    assert_eq!(hist.total(), 3);
}

#[test]
fn test_histogram_skips_infinite_values() {
    let df = df! {
        "x" => [1.0f64, 2.0, f64::INFINITY, f64::NEG_INFINITY],
    }
    .unwrap();

    let hist = histogram(&df, "x", 4).unwrap();

    assert_eq!(hist.edges, vec![1.0, 1.25, 1.5, 1.75, 2.0]);
    assert_eq!(hist.counts, vec![1, 0, 0, 1]);
}

#[test]
fn test_histogram_span_wider_than_f64_max() {
    let df = df! {
        "x" => [-1e308f64, 1e308],
    }
    .unwrap();

    let hist = histogram(&df, "x", 2).unwrap();

    assert_eq!(hist.edges, vec![-1e308, 0.0, 1e308]);
    assert_eq!(hist.counts, vec![1, 1]);
}

#[test]
fn test_histogram_constant_column() {
    let df = df! {
        "x" => [5i32, 5, 5],
    }
    .unwrap();

    let hist = histogram(&df, "x", 2).unwrap();

    assert_eq!(hist.edges, vec![4.5, 5.0, 5.5]);
    assert_eq!(hist.counts, vec![0, 3]);
}

#[test]
fn test_histogram_zero_bins_becomes_one() {
    let df = common::create_mixed_dataframe();

    let hist = histogram(&df, "score", 0).unwrap();

    assert_eq!(hist.counts, vec![5]);
}

#[test]
fn test_histogram_empty_column() {
    let df = df! {
        "x" => [None::<f64>, None],
    }
    .unwrap();

    let hist = histogram(&df, "x", 4).unwrap();

    assert_eq!(hist.edges.first(), Some(&0.0));
    assert_eq!(hist.edges.last(), Some(&1.0));
    assert_eq!(hist.total(), 0);
}

#[test]
fn test_histogram_rejects_categorical() {
    let df = common::create_mixed_dataframe();

    let err = histogram(&df, "city", 10).unwrap_err();

    assert!(matches!(err, ExploreError::TypeMismatch { .. }));
}

#[test]
fn test_box_summary_with_outlier() {
    let df = df! {
        "x" => [4.0f64, 1.0, 100.0, 3.0, 2.0],
    }
    .unwrap();

    let summary = box_summary(&df, "x").unwrap().unwrap();

    assert_eq!(summary.count, 5);
    assert_eq!(summary.min, 1.0);
    assert_eq!(summary.q1, 2.0);
    assert_eq!(summary.median, 3.0);
    assert_eq!(summary.q3, 4.0);
    assert_eq!(summary.max, 100.0);
    assert_eq!(summary.lower_whisker, 1.0);
    assert_eq!(summary.upper_whisker, 4.0);
    assert_eq!(summary.outliers, vec![100.0]);
}

#[test]
fn test_box_summary_interpolates_quartiles() {
    let df = df! {
        "x" => [1i64, 2, 3, 4],
    }
    .unwrap();

    let summary = box_summary(&df, "x").unwrap().unwrap();

    assert_eq!(summary.q1, 1.75);
    assert_eq!(summary.median, 2.5);
    assert_eq!(summary.q3, 3.25);
    assert!(summary.outliers.is_empty());
}

#[test]
fn test_box_summary_empty_column() {
    let df = df! {
        "x" => [None::<f64>, None],
    }
    .unwrap();

    assert!(box_summary(&df, "x").unwrap().is_none());
}

#[test]
fn test_scatter_requires_two_columns() {
    let df = common::create_correlation_test_dataframe();

    for columns in [vec!["a".to_string()], vec!["a".into(), "b".into(), "c".into()]] {
        let err = scatter_points(&df, &columns).unwrap_err();
        assert!(
            matches!(err, ExploreError::WrongColumnCount { expected: 2, .. }),
            "got {err:?}"
        );
    }
}

#[test]
fn test_scatter_pairs_complete_rows() {
    let df = df! {
        "x" => [Some(1.0f64), None, Some(3.0), Some(4.0)],
        "y" => [Some(10i64), Some(20), None, Some(40)],
    }
    .unwrap();

    let points = scatter_points(&df, &["x".to_string(), "y".to_string()]).unwrap();

    assert_eq!(points.points, vec![(1.0, 10.0), (4.0, 40.0)]);
    assert_eq!(points.x_column, "x");
    assert_eq!(points.y_column, "y");
}

#[test]
fn test_scatter_rejects_categorical() {
    let df = common::create_correlation_test_dataframe();

    let err = scatter_points(&df, &["a".to_string(), "label".to_string()]).unwrap_err();

    assert!(matches!(err, ExploreError::TypeMismatch { .. }));
}

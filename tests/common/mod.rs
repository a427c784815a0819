//! Shared test utilities and fixture generators

#![allow(dead_code)]

use polars::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// A small dataset with every column shape the engine cares about:
/// - `id`: integer, numeric
/// - `score`: float, numeric
/// - `city`: string, categorical
/// - `code`: numeric-looking and text strings mixed, categorical
pub fn create_mixed_dataframe() -> DataFrame {
    df! {
        "id" => [1i64, 2, 3, 4, 5],
        "score" => [1.0f64, 2.0, 3.0, 4.0, 5.0],
        "city" => ["a", "b", "a", "c", "b"],
        "code" => ["1", "2", "cat", "3.5", "dog"],
    }
    .unwrap()
}

/// Create a DataFrame with known correlation patterns
pub fn create_correlation_test_dataframe() -> DataFrame {
    df! {
        "a" => [1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0],
        "b" => [2.0f64, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0, 18.0, 20.0], // b = 2*a
        "c" => [10.0f64, 9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0], // Negatively correlated with a
        "d" => [5.0f64, 1.0, 8.0, 2.0, 9.0, 3.0, 7.0, 4.0, 6.0, 0.0], // Uncorrelated random
        "label" => ["x", "y", "x", "y", "x", "y", "x", "y", "x", "y"],
    }
    .unwrap()
}

/// Create a larger random DataFrame for property-style checks
pub fn create_large_test_dataframe(rows: usize, cols: usize) -> DataFrame {
    use rand::{Rng, SeedableRng};
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);

    let mut columns: Vec<Column> = Vec::with_capacity(cols + 1);

    let groups = ["north", "south", "east", "west"];
    let group: Vec<&str> = (0..rows).map(|_| groups[rng.gen_range(0..4)]).collect();
    columns.push(Column::new("group".into(), group));

    for i in 0..cols {
        let values: Vec<f64> = (0..rows).map(|_| rng.gen_range(0.0..100.0)).collect();
        columns.push(Column::new(format!("feature_{}", i).into(), values));
    }

    DataFrame::new(columns).unwrap()
}

/// Values of a float column, panicking on nulls
pub fn f64_values(df: &DataFrame, column: &str) -> Vec<f64> {
    df.column(column)
        .unwrap()
        .cast(&DataType::Float64)
        .unwrap()
        .f64()
        .unwrap()
        .into_no_null_iter()
        .collect()
}

/// Values of a string column, panicking on nulls
pub fn str_values(df: &DataFrame, column: &str) -> Vec<String> {
    df.column(column)
        .unwrap()
        .str()
        .unwrap()
        .into_no_null_iter()
        .map(|s| s.to_string())
        .collect()
}

/// Write `lines` to a CSV file inside a fresh temporary directory
pub fn create_temp_csv_from_lines(lines: &[&str]) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("test_data.csv");
    std::fs::write(&csv_path, lines.join("\n") + "\n").unwrap();
    (temp_dir, csv_path)
}

/// Create a temporary directory with a test CSV file
pub fn create_temp_csv(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("test_data.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    CsvWriter::new(&mut file).finish(df).unwrap();

    (temp_dir, csv_path)
}

/// Create a temporary directory with a test Parquet file
pub fn create_temp_parquet(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let parquet_path = temp_dir.path().join("test_data.parquet");

    let file = std::fs::File::create(&parquet_path).unwrap();
    ParquetWriter::new(file).finish(df).unwrap();

    (temp_dir, parquet_path)
}

/// Assert that a DataFrame has expected shape
pub fn assert_shape(df: &DataFrame, expected_rows: usize, expected_cols: usize) {
    let (rows, cols) = df.shape();
    assert_eq!(rows, expected_rows, "Row count mismatch: expected {}, got {}", expected_rows, rows);
    assert_eq!(cols, expected_cols, "Column count mismatch: expected {}, got {}", expected_cols, cols);
}

//! Saving filtered data and exporting exploration reports

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use log::info;
use polars::prelude::*;
use serde::Serialize;

use crate::engine::{correlation_matrix, ColumnKind, CorrelationMatrix, PredicateSet};

/// Metadata about the exploration run
#[derive(Debug, Serialize)]
pub struct ReportMetadata {
    /// Timestamp of the export (RFC 3339)
    pub timestamp: String,
    /// tablens version
    pub tablens_version: String,
    /// Input file path, when the dataset came from disk
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_file: Option<String>,
}

/// A column and its kind
#[derive(Debug, Serialize)]
pub struct ColumnEntry {
    pub name: String,
    pub kind: ColumnKind,
}

/// Snapshot of an exploration: what was loaded, which filters were active and
/// what the filtered data looks like.
#[derive(Debug, Serialize)]
pub struct ExplorationReport {
    pub metadata: ReportMetadata,
    pub columns: Vec<ColumnEntry>,
    /// Active filters in their text form
    pub filters: Vec<String>,
    pub original_rows: usize,
    pub filtered_rows: usize,
    /// Correlation over the filtered rows; absent with fewer than two numeric
    /// columns. Undefined coefficients serialize as `null`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation: Option<CorrelationMatrix>,
}

impl ExplorationReport {
    /// Build a report from the original dataset, its filtered view and the
    /// predicates that produced it.
    pub fn build(
        input_file: Option<&Path>,
        original: &DataFrame,
        filtered: &DataFrame,
        predicates: &PredicateSet,
    ) -> Self {
        Self {
            metadata: ReportMetadata {
                timestamp: Utc::now().to_rfc3339(),
                tablens_version: env!("CARGO_PKG_VERSION").to_string(),
                input_file: input_file.map(|p| p.display().to_string()),
            },
            columns: crate::engine::classify_columns(filtered)
                .into_iter()
                .map(|(name, kind)| ColumnEntry { name, kind })
                .collect(),
            filters: predicates.iter().map(|p| p.to_string()).collect(),
            original_rows: original.height(),
            filtered_rows: filtered.height(),
            correlation: correlation_matrix(filtered).ok(),
        }
    }
}

/// Write the report as pretty-printed JSON.
pub fn export_report(report: &ExplorationReport, output_path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)
        .context("Failed to serialize exploration report to JSON")?;

    std::fs::write(output_path, json)
        .with_context(|| format!("Failed to write report to {}", output_path.display()))?;

    info!("wrote report to {}", output_path.display());
    Ok(())
}

/// Save a dataset to CSV or Parquet, chosen by the file extension.
pub fn save_dataset(df: &DataFrame, path: &Path) -> Result<()> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    // The writers take `&mut`; clones share column buffers.
    let mut df = df.clone();

    match extension.as_str() {
        "csv" => {
            let mut file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            CsvWriter::new(&mut file)
                .finish(&mut df)
                .with_context(|| format!("Failed to write CSV file: {}", path.display()))?;
        }
        "parquet" => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            ParquetWriter::new(file)
                .finish(&mut df)
                .with_context(|| format!("Failed to write Parquet file: {}", path.display()))?;
        }
        _ => anyhow::bail!(
            "Unsupported output format: '{}'. Supported formats: csv, parquet",
            extension
        ),
    }

    info!("saved {} rows to {}", df.height(), path.display());
    Ok(())
}

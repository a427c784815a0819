//! Dataset loader for CSV and Parquet files

use std::path::{Path, PathBuf};

use log::info;
use polars::prelude::*;

use super::error::{ExploreError, ExploreResult};

/// A freshly loaded dataset with its basic statistics.
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub path: PathBuf,
    pub frame: DataFrame,
    pub rows: usize,
    pub cols: usize,
    pub memory_mb: f64,
}

fn load_error(path: &Path, err: impl ToString) -> ExploreError {
    ExploreError::Load {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

/// Build a lazy scan for `path`, choosing the reader from the file extension.
///
/// `infer_schema_length` applies to CSV only; `0` scans the whole file.
fn scan_dataset(path: &Path, infer_schema_length: usize) -> ExploreResult<LazyFrame> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let schema_length = if infer_schema_length == 0 {
        None
    } else {
        Some(infer_schema_length)
    };

    match extension.as_str() {
        "csv" => LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(schema_length)
            .finish()
            .map_err(|e| load_error(path, e)),
        "parquet" => {
            LazyFrame::scan_parquet(path, Default::default()).map_err(|e| load_error(path, e))
        }
        _ => Err(load_error(
            path,
            format!(
                "Unsupported file format: '{}'. Supported formats: csv, parquet",
                extension
            ),
        )),
    }
}

/// Load a dataset fully into memory.
pub fn load_dataset(path: &Path, infer_schema_length: usize) -> ExploreResult<LoadedDataset> {
    if !path.exists() {
        return Err(load_error(path, "file does not exist"));
    }

    let frame = scan_dataset(path, infer_schema_length)?
        .collect()
        .map_err(|e| load_error(path, e))?;

    let (rows, cols) = frame.shape();
    let memory_mb = frame.estimated_size() as f64 / (1024.0 * 1024.0);

    info!(
        "loaded {} ({} rows x {} columns, {:.2} MB)",
        path.display(),
        rows,
        cols,
        memory_mb
    );

    Ok(LoadedDataset {
        path: path.to_path_buf(),
        frame,
        rows,
        cols,
        memory_mb,
    })
}

/// Column names of a dataset file, reading only its schema.
pub fn get_column_names(path: &Path) -> ExploreResult<Vec<String>> {
    let mut lf = scan_dataset(path, 100)?;
    let schema = lf.collect_schema().map_err(|e| load_error(path, e))?;
    Ok(schema.iter_names().map(|name| name.to_string()).collect())
}

//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

use crate::engine::{Predicate, DEFAULT_HISTOGRAM_BINS};

/// tablens - Explore a tabular dataset: filter rows, summarize distributions
/// and correlate numeric columns
#[derive(Parser, Debug)]
#[command(name = "tablens")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input file path (CSV or Parquet).
    /// If not provided, the interactive session asks for one.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Filter to apply, repeatable. All filters must hold (AND).
    /// Forms: <column>:eq:<value>, <column>:range:<start>:<end>,
    /// <column>:in:<v1>,<v2>,...
    #[arg(short, long = "filter", value_parser = parse_predicate)]
    pub filters: Vec<Predicate>,

    /// Column whose non-numeric values are listed (batch mode)
    #[arg(long)]
    pub unique: Option<String>,

    /// Save the filtered dataset to this path (CSV or Parquet, by extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write a JSON exploration report to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Run once with the given filters and exit instead of starting the
    /// interactive session
    #[arg(long, default_value = "false")]
    pub no_interactive: bool,

    /// Number of rows shown in data previews
    #[arg(long, default_value = "5")]
    pub head: usize,

    /// Number of histogram bins
    #[arg(long, default_value_t = DEFAULT_HISTOGRAM_BINS, value_parser = validate_bins)]
    pub bins: usize,

    /// Number of rows to use for schema inference (CSV only).
    /// Use 0 for full table scan (very slow for large files).
    #[arg(long, default_value = "10000")]
    pub infer_schema_length: usize,
}

/// Parser for --filter values
fn parse_predicate(s: &str) -> Result<Predicate, String> {
    s.parse::<Predicate>().map_err(|e| e.to_string())
}

/// Validator for the bins parameter
fn validate_bins(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid bin count", s))?;

    if value == 0 {
        Err("bins must be at least 1".to_string())
    } else {
        Ok(value)
    }
}

//! tablens: Tabular Data Exploration Library
//!
//! Column classification, predicate filtering, distinct-value listings,
//! distribution summaries and pairwise correlation over polars DataFrames.

pub mod cli;
pub mod engine;
pub mod report;
pub mod utils;

//! Interactive prompts using dialoguer

use std::path::PathBuf;

use anyhow::Result;
use dialoguer::{Confirm, Input, MultiSelect, Select};
use polars::prelude::DataFrame;

use crate::engine::{distinct_values, ColumnKind, Predicate};

/// Prompt user to confirm proceeding with an action
pub fn confirm_step(message: &str) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(message)
        .default(true)
        .interact()?;
    Ok(confirmed)
}

/// Ask for a file path
pub fn prompt_path(message: &str) -> Result<PathBuf> {
    let path: String = Input::new().with_prompt(message).interact_text()?;
    Ok(PathBuf::from(path.trim()))
}

/// Pick one column; `None` when the user backs out with Esc
pub fn select_column(message: &str, columns: &[(String, ColumnKind)]) -> Result<Option<usize>> {
    let items: Vec<String> = columns
        .iter()
        .map(|(name, kind)| format!("{} ({})", name, kind))
        .collect();

    let choice = Select::new()
        .with_prompt(message)
        .items(&items)
        .default(0)
        .interact_opt()?;
    Ok(choice)
}

/// Pick any number of columns
pub fn select_columns(message: &str, columns: &[(String, ColumnKind)]) -> Result<Vec<String>> {
    let items: Vec<String> = columns
        .iter()
        .map(|(name, kind)| format!("{} ({})", name, kind))
        .collect();

    let chosen = MultiSelect::new()
        .with_prompt(message)
        .items(&items)
        .interact()?;
    Ok(chosen.into_iter().map(|i| columns[i].0.clone()).collect())
}

/// Build a predicate for `column` using the controls its kind allows:
/// constant value or range inputs for numeric columns, a multi-select of
/// distinct values for categorical ones.
///
/// Returns `None` when the user cancels or selects nothing.
pub fn prompt_predicate(
    df: &DataFrame,
    column: &str,
    kind: ColumnKind,
) -> Result<Option<Predicate>> {
    match kind {
        ColumnKind::Numeric => {
            let choice = Select::new()
                .with_prompt(format!("Filter by {}", column))
                .items(&["Constant Value", "Range"])
                .default(0)
                .interact_opt()?;

            match choice {
                Some(0) => {
                    let value: f64 = Input::new()
                        .with_prompt(format!("Enter constant value for {}", column))
                        .default(0.0)
                        .interact_text()?;
                    Ok(Some(Predicate::constant(column, value)))
                }
                Some(_) => {
                    let start: f64 = Input::new()
                        .with_prompt(format!("Enter start value for {}", column))
                        .default(0.0)
                        .interact_text()?;
                    let end: f64 = Input::new()
                        .with_prompt(format!("Enter end value for {}", column))
                        .default(100.0)
                        .interact_text()?;
                    Ok(Some(Predicate::range(column, start, end)))
                }
                None => Ok(None),
            }
        }
        ColumnKind::Categorical => {
            let options = distinct_values(df, column)?;
            if options.is_empty() {
                return Ok(None);
            }

            let chosen = MultiSelect::new()
                .with_prompt(format!("Select values for {}", column))
                .items(&options)
                .interact()?;

            if chosen.is_empty() {
                Ok(None)
            } else {
                Ok(Some(Predicate::value_in(
                    column,
                    chosen.into_iter().map(|i| options[i].clone()),
                )))
            }
        }
    }
}

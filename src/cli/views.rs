//! Output surfaces shared by the interactive and batch modes

use anyhow::Result;
use console::style;
use polars::prelude::DataFrame;

use crate::engine::{
    box_summary, classify_columns, correlation_matrix, histogram, scatter_points,
    unique_non_numeric, ColumnKind, Session,
};
use crate::report::{
    box_summary_table, column_kinds_table, correlation_table, dataframe_table, print_histogram,
    print_table, scatter_table, values_table, FilterSummary,
};
use crate::utils::{print_count, print_info, print_section_header, CHART};

/// Plot summaries offered by the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotKind {
    Histogram,
    BoxPlot,
    Scatter,
}

impl PlotKind {
    pub const ALL: [PlotKind; 3] = [PlotKind::Histogram, PlotKind::BoxPlot, PlotKind::Scatter];

    pub fn label(&self) -> &'static str {
        match self {
            PlotKind::Histogram => "Histogram",
            PlotKind::BoxPlot => "Box Plot",
            PlotKind::Scatter => "Scatter Plot",
        }
    }
}

/// Column kinds plus the first `head` rows
pub fn show_overview(df: &DataFrame, head: usize) -> Result<()> {
    print_section_header("Data Overview");
    print_table(&column_kinds_table(&classify_columns(df)));
    println!();
    print_table(&dataframe_table(df, head)?);
    Ok(())
}

/// Filter summary followed by the first `head` matching rows
pub fn show_filtered(session: &Session, head: usize) -> Result<DataFrame> {
    let original = session.dataset()?;
    let filtered = session.filtered()?;

    FilterSummary::new(original.height(), filtered.height(), session.predicates()).display();

    print_section_header("Filtered Data");
    if filtered.height() == 0 {
        print_info("No rows match the active filters");
    } else {
        print_table(&dataframe_table(&filtered, head)?);
        if filtered.height() > head {
            println!(
                "    {}",
                style(format!("... {} more row(s)", filtered.height() - head)).dim()
            );
        }
    }
    Ok(filtered)
}

/// Correlation grid over the numeric columns of `df`
pub fn show_correlation(df: &DataFrame) -> Result<()> {
    print_section_header("Correlation Matrix");
    let matrix = correlation_matrix(df)?;
    print_table(&correlation_table(&matrix));

    if let Some(top) = matrix.strongest_pairs().first() {
        println!(
            "\n    {}Strongest pair: {} ~ {} ({:.3})",
            CHART,
            top.feature1,
            top.feature2,
            top.correlation
        );
    }
    Ok(())
}

/// Distinct non-numeric values of one column
pub fn show_unique(df: &DataFrame, column: &str) -> Result<()> {
    print_section_header(&format!("Unique Values for '{}'", column));
    let values = unique_non_numeric(df, column)?;
    if values.is_empty() {
        print_info("Every value in this column looks numeric");
    } else {
        print_count("non-numeric value(s)", values.len(), None);
        print_table(&values_table(column, &values));
    }
    Ok(())
}

/// Render a plot summary for the selected columns
pub fn show_plot(df: &DataFrame, kind: PlotKind, columns: &[String], bins: usize) -> Result<()> {
    print_section_header(kind.label());
    match kind {
        PlotKind::Histogram => {
            for column in columns {
                print_histogram(&histogram(df, column, bins)?);
                println!();
            }
        }
        PlotKind::BoxPlot => {
            for column in columns {
                match box_summary(df, column)? {
                    Some(summary) => print_table(&box_summary_table(&summary)),
                    None => print_info(&format!("'{}' has no values to summarize", column)),
                }
            }
        }
        PlotKind::Scatter => {
            let points = scatter_points(df, columns)?;
            print_count(
                "point(s)",
                points.points.len(),
                Some(format!("({} vs {})", points.x_column, points.y_column).as_str()),
            );
            print_table(&scatter_table(&points, 10));
        }
    }
    Ok(())
}

/// Numeric columns of `df`, for plot selection
pub fn numeric_kinds(df: &DataFrame) -> Vec<(String, ColumnKind)> {
    classify_columns(df)
        .into_iter()
        .filter(|(_, kind)| *kind == ColumnKind::Numeric)
        .collect()
}

//! Terminal renderings of the engine's output surfaces

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;
use polars::prelude::*;

use crate::engine::{BoxSummary, ColumnKind, CorrelationMatrix, Histogram, ScatterPoints};

const BAR_WIDTH: usize = 40;

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table
}

fn bold(text: impl ToString) -> Cell {
    Cell::new(text.to_string()).add_attribute(Attribute::Bold)
}

/// Print a table indented to line up with section headers.
pub fn print_table(table: &Table) {
    for line in table.to_string().lines() {
        println!("    {}", line);
    }
}

/// Text for one cell; strings print without the quotes polars adds.
fn cell_text(value: &AnyValue) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}

/// First `max_rows` rows of `df` as a table.
pub fn dataframe_table(df: &DataFrame, max_rows: usize) -> PolarsResult<Table> {
    let mut table = new_table();
    table.set_header(df.get_column_names().iter().map(|name| bold(name.as_str())));

    for row in 0..df.height().min(max_rows) {
        let cells = df
            .get_columns()
            .iter()
            .map(|col| col.get(row).map(|v| Cell::new(cell_text(&v))))
            .collect::<PolarsResult<Vec<Cell>>>()?;
        table.add_row(cells);
    }

    Ok(table)
}

/// Column names with their kinds and the filters each kind supports.
pub fn column_kinds_table(kinds: &[(String, ColumnKind)]) -> Table {
    let mut table = new_table();
    table.set_header(vec![bold("Column"), bold("Kind"), bold("Filters")]);
    for (name, kind) in kinds {
        let (color, filters) = match kind {
            ColumnKind::Numeric => (Color::Cyan, "constant value, range"),
            ColumnKind::Categorical => (Color::Magenta, "select values"),
        };
        table.add_row(vec![
            Cell::new(name),
            Cell::new(kind).fg(color),
            Cell::new(filters),
        ]);
    }
    table
}

/// Two-column table of a column name and its values.
pub fn values_table(column: &str, values: &[String]) -> Table {
    let mut table = new_table();
    table.set_header(vec![bold("Column"), bold("Value")]);
    for value in values {
        table.add_row(vec![Cell::new(column), Cell::new(value)]);
    }
    table
}

fn correlation_color(r: f64) -> Color {
    if r.is_nan() {
        Color::DarkGrey
    } else if r >= 0.7 {
        Color::Green
    } else if r <= -0.7 {
        Color::Red
    } else if r.abs() >= 0.3 {
        Color::Yellow
    } else {
        Color::White
    }
}

/// Labeled square grid of coefficients, colored by strength.
pub fn correlation_table(matrix: &CorrelationMatrix) -> Table {
    let mut table = new_table();
    let mut header = vec![Cell::new("")];
    header.extend(matrix.columns().iter().map(bold));
    table.set_header(header);

    for (name, row) in matrix.columns().iter().zip(matrix.values()) {
        let mut cells = vec![bold(name)];
        cells.extend(row.iter().map(|r| {
            let text = if r.is_nan() {
                "NaN".to_string()
            } else {
                format!("{:.3}", r)
            };
            Cell::new(text).fg(correlation_color(*r))
        }));
        table.add_row(cells);
    }
    table
}

/// Box-plot summary as a metric/value table.
pub fn box_summary_table(summary: &BoxSummary) -> Table {
    let mut table = new_table();
    table.set_header(vec![bold("Metric"), bold(&summary.column)]);
    let rows = [
        ("Count", summary.count as f64),
        ("Min", summary.min),
        ("Lower whisker", summary.lower_whisker),
        ("Q1", summary.q1),
        ("Median", summary.median),
        ("Q3", summary.q3),
        ("Upper whisker", summary.upper_whisker),
        ("Max", summary.max),
    ];
    for (label, value) in rows {
        table.add_row(vec![Cell::new(label), Cell::new(format!("{}", value))]);
    }
    table.add_row(vec![
        Cell::new("Outliers"),
        Cell::new(summary.outliers.len()).fg(if summary.outliers.is_empty() {
            Color::White
        } else {
            Color::Yellow
        }),
    ]);
    table
}

/// Horizontal bar chart of a histogram, one line per bin.
pub fn histogram_lines(histogram: &Histogram) -> Vec<String> {
    let peak = histogram.counts.iter().copied().max().unwrap_or(0).max(1);
    let last = histogram.counts.len().saturating_sub(1);
    histogram
        .counts
        .iter()
        .zip(histogram.edges.windows(2))
        .enumerate()
        .map(|(i, (count, edge))| {
            let close = if i == last { "]" } else { ")" };
            format!(
                "[{:>10.3}, {:>10.3}{} {} {}",
                edge[0],
                edge[1],
                close,
                "█".repeat(count * BAR_WIDTH / peak),
                count
            )
        })
        .collect()
}

pub fn print_histogram(histogram: &Histogram) {
    println!(
        "    {} {}",
        style("Histogram of").white().bold(),
        style(&histogram.column).cyan().bold()
    );
    for line in histogram_lines(histogram) {
        println!("      {}", line);
    }
    println!(
        "      {}",
        style(format!("{} values", histogram.total())).dim()
    );
}

/// Scatter points preview: count plus the first few pairs.
pub fn scatter_table(points: &ScatterPoints, preview: usize) -> Table {
    let mut table = new_table();
    table.set_header(vec![bold(&points.x_column), bold(&points.y_column)]);
    for (x, y) in points.points.iter().take(preview) {
        table.add_row(vec![Cell::new(x), Cell::new(y)]);
    }
    table
}

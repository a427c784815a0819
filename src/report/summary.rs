//! Filter summary display

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::engine::PredicateSet;

/// Row counts before and after applying the active filters
#[derive(Debug, Default)]
pub struct FilterSummary {
    pub original_rows: usize,
    pub filtered_rows: usize,
    pub filters: Vec<String>,
}

impl FilterSummary {
    pub fn new(original_rows: usize, filtered_rows: usize, predicates: &PredicateSet) -> Self {
        Self {
            original_rows,
            filtered_rows,
            filters: predicates.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Percentage of rows kept, 100% for an empty dataset.
    pub fn kept_pct(&self) -> f64 {
        if self.original_rows > 0 {
            self.filtered_rows as f64 / self.original_rows as f64 * 100.0
        } else {
            100.0
        }
    }

    pub fn table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![Cell::new("📁 Rows loaded"), Cell::new(self.original_rows)]);
        table.add_row(vec![
            Cell::new("🔎 Active filters"),
            Cell::new(self.filters.len()),
        ]);
        table.add_row(vec![
            Cell::new("✅ Rows matching"),
            Cell::new(self.filtered_rows)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);

        let pct = self.kept_pct();
        let color = if pct < 10.0 {
            Color::Red
        } else if pct < 50.0 {
            Color::Yellow
        } else {
            Color::Cyan
        };
        table.add_row(vec![
            Cell::new("📉 Kept"),
            Cell::new(format!("{:.1}%", pct))
                .fg(color)
                .add_attribute(Attribute::Bold),
        ]);

        table
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("FILTER SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        for line in self.table().to_string().lines() {
            println!("    {}", line);
        }

        if !self.filters.is_empty() {
            println!();
            for (i, filter) in self.filters.iter().enumerate() {
                println!("      {} {}", style(format!("{}.", i + 1)).dim(), filter);
            }
        }
    }
}

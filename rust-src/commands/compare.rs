//! Compare command - customers active in both periods and their change.

use std::path::{Path, PathBuf};

use anyhow::Result;
use log::info;
use serde::Serialize;

use crate::aggregation::{compare, count_by_customer};
use crate::config::DbConfig;
use crate::data::{write_table_csv, Cell, Table};
use crate::models::{Comparison, Period};
use crate::storage::{connect, rentals_for_period, total_rentals};


/// Options for the compare command.
#[derive(Debug, Clone)]
pub struct CompareOptions {
    pub from: Period,
    pub to: Period,
    pub output_dir: PathBuf,
    pub top: usize,
    pub json: bool,
}


/// Headline numbers for one comparison run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryMetrics {
    pub total_rentals: i64,
    pub rentals_a: usize,
    pub rentals_b: usize,
    pub active_customers_a: usize,
    pub active_customers_b: usize,
    pub active_both_periods: usize,
}


impl SummaryMetrics {
    pub fn to_table(&self) -> Table {
        let metrics: [(&str, i64); 6] = [
            ("total_rentals", self.total_rentals),
            ("rentals_a", self.rentals_a as i64),
            ("rentals_b", self.rentals_b as i64),
            ("active_customers_a", self.active_customers_a as i64),
            ("active_customers_b", self.active_customers_b as i64),
            ("active_both_periods", self.active_both_periods as i64),
        ];

        let mut table = Table::new(["metric", "value"]);
        for (metric, value) in metrics {
            table.push_row(vec![Cell::Text(metric.to_string()), Cell::Int(value)]);
        }
        table
    }
}


/// Run the compare command.
pub fn run(config: &DbConfig, options: &CompareOptions) -> Result<()> {
    let conn = connect(config)?;
    let total = total_rentals(&conn)?;
    info!("Connection OK: {total} rentals in database");

    let rentals_a = rentals_for_period(&conn, options.from)?;
    let rentals_b = rentals_for_period(&conn, options.to)?;

    let counts_a = count_by_customer(&rentals_a, options.from);
    let counts_b = count_by_customer(&rentals_b, options.to);

    let mut comparison = compare(&counts_a, &counts_b)?;
    comparison.sort_by_difference_desc();

    let summary = SummaryMetrics {
        total_rentals: total,
        rentals_a: rentals_a.len(),
        rentals_b: rentals_b.len(),
        active_customers_a: counts_a.len(),
        active_customers_b: counts_b.len(),
        active_both_periods: comparison.len(),
    };

    if options.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("Rentals {}: {:>8}", options.from, summary.rentals_a);
        println!("Rentals {}: {:>8}", options.to, summary.rentals_b);
        println!("Active customers {}: {:>8}", options.from, summary.active_customers_a);
        println!("Active customers {}: {:>8}", options.to, summary.active_customers_b);
        println!();
        println!(
            "Customers active in both {} and {} (top {} changes):",
            options.from, options.to, options.top
        );
        print_comparison(&comparison, options.top);
    }

    let dir = &options.output_dir;
    let (label_a, label_b) = (options.from.file_label(), options.to.file_label());

    let outputs: Vec<(PathBuf, Table)> = vec![
        (
            dir.join(format!("customer_rentals_{label_a}_vs_{label_b}.csv")),
            Table::from(&comparison),
        ),
        (dir.join(format!("customer_rentals_{label_a}.csv")), Table::from(&counts_a)),
        (dir.join(format!("customer_rentals_{label_b}.csv")), Table::from(&counts_b)),
        (dir.join(format!("rentals_raw_{label_a}.csv")), Table::from(rentals_a.as_slice())),
        (dir.join(format!("rentals_raw_{label_b}.csv")), Table::from(rentals_b.as_slice())),
        (dir.join("summary_metrics.csv"), summary.to_table()),
    ];

    for (path, table) in &outputs {
        save(table, path, options.json)?;
    }

    Ok(())
}


/// Print the first `top` rows of a comparison as an aligned table.
pub fn print_comparison(comparison: &Comparison, top: usize) {
    if comparison.is_empty() {
        println!("  (no customers active in both periods)");
        return;
    }

    let label_a = &comparison.column_a.label;
    let label_b = &comparison.column_b.label;
    let width_a = label_a.len().max(6);
    let width_b = label_b.len().max(6);

    println!(
        "  {:>11}  {:>width_a$}  {:>width_b$}  {:>10}",
        "customer_id", label_a, label_b, "difference"
    );
    for row in comparison.top(top) {
        println!(
            "  {:>11}  {:>width_a$}  {:>width_b$}  {:>10}",
            row.customer_id, row.count_a, row.count_b, row.difference
        );
    }
}


pub(crate) fn save(table: &Table, path: &Path, quiet: bool) -> Result<()> {
    write_table_csv(table, path)?;
    info!("Wrote {} rows to {}", table.len(), path.display());
    if !quiet {
        println!("Saved: {}", path.display());
    }
    Ok(())
}

//! Counts command - rentals per customer for one month.

use std::path::Path;

use anyhow::Result;

use crate::aggregation::count_by_customer;
use crate::config::DbConfig;
use crate::data::Table;
use crate::models::Period;
use crate::storage::{connect, rentals_for_period};

use super::compare::save;


/// Run the counts command.
pub fn run(config: &DbConfig, period: Period, output: Option<&Path>) -> Result<()> {
    let conn = connect(config)?;
    let rentals = rentals_for_period(&conn, period)?;
    let counts = count_by_customer(&rentals, period);

    println!("{period} active customers: {}", counts.len());

    let mut busiest = counts.rows.clone();
    busiest.sort_by(|a, b| b.count.cmp(&a.count).then(a.customer_id.cmp(&b.customer_id)));
    for row in busiest.iter().take(5) {
        println!("  customer {:>6}: {:>4} {}", row.customer_id, row.count, counts.column);
    }

    if let Some(path) = output {
        save(&Table::from(&counts), path, false)?;
    }

    Ok(())
}

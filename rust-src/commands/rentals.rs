//! Rentals command - fetch the raw rentals for one month.

use std::path::Path;

use anyhow::Result;

use crate::config::DbConfig;
use crate::data::Table;
use crate::models::Period;
use crate::storage::{connect, rentals_for_period};

use super::compare::save;


/// Run the rentals command.
pub fn run(config: &DbConfig, period: Period, output: Option<&Path>) -> Result<()> {
    let conn = connect(config)?;
    let rentals = rentals_for_period(&conn, period)?;

    println!("{period} rentals rows: {}", rentals.len());

    if let (Some(first), Some(last)) = (rentals.first(), rentals.last()) {
        println!(
            "First: {}  Last: {}",
            first.rental_date_string(),
            last.rental_date_string()
        );
    }

    if let Some(path) = output {
        save(&Table::from(rentals.as_slice()), path, false)?;
    }

    Ok(())
}

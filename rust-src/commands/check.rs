//! Check command - verify the database is reachable.

use anyhow::Result;

use crate::config::DbConfig;
use crate::storage::{connect, total_rentals};


/// Run the check command.
pub fn run(config: &DbConfig) -> Result<()> {
    let conn = connect(config)?;
    let total = total_rentals(&conn)?;

    println!("Connection OK: {}", config.redacted_url());
    println!("Total rentals: {total}");

    Ok(())
}

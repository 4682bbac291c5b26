//! Diff command - compare two saved count files.

use std::path::Path;

use anyhow::{Context, Result};

use crate::aggregation::compare_tables;
use crate::data::{read_table_csv, Table};

use super::compare::{print_comparison, save};


/// Run the diff command.
pub fn run(file_a: &Path, file_b: &Path, top: usize, output: Option<&Path>) -> Result<()> {
    let table_a = read_table_csv(file_a)?;
    let table_b = read_table_csv(file_b)?;

    let mut comparison = compare_tables(&table_a, &table_b).with_context(|| {
        format!("Cannot compare {} with {}", file_a.display(), file_b.display())
    })?;
    comparison.sort_by_difference_desc();

    println!(
        "Customers in both {} and {}: {}",
        comparison.column_a,
        comparison.column_b,
        comparison.len()
    );
    print_comparison(&comparison, top);

    if let Some(path) = output {
        save(&Table::from(&comparison), path, false)?;
    }

    Ok(())
}

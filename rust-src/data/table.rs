//! In-memory tables with ordered, named columns.

use std::collections::HashSet;
use std::fmt;

use crate::error::{RentalError, RentalResult};
use crate::models::{
    is_count_column,
    Comparison,
    CountColumn,
    CustomerCount,
    CustomerCounts,
    RentalEvent,
};


/// Column holding the customer key in every per-customer table.
pub const CUSTOMER_ID_COLUMN: &str = "customer_id";

/// Column holding `b - a` in a comparison table.
pub const DIFFERENCE_COLUMN: &str = "difference";


/// A single table value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Int(i64),
    Text(String),
}


impl Cell {
    /// Integer cells parse as such, everything else stays text.
    pub fn infer(raw: &str) -> Self {
        match raw.trim().parse::<i64>() {
            Ok(value) => Cell::Int(value),
            Err(_) => Cell::Text(raw.to_string()),
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Cell::Int(value) => Some(*value),
            Cell::Text(_) => None,
        }
    }
}


impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Int(value) => write!(f, "{value}"),
            Cell::Text(value) => f.write_str(value),
        }
    }
}


/// Rows of cells under an ordered header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}


impl Table {
    pub fn new<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> Self {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}


impl From<&[RentalEvent]> for Table {
    fn from(rentals: &[RentalEvent]) -> Self {
        let mut table = Table::new(["rental_id", "rental_date", CUSTOMER_ID_COLUMN]);
        for rental in rentals {
            table.push_row(vec![
                Cell::Int(rental.rental_id),
                Cell::Text(rental.rental_date_string()),
                Cell::Int(rental.customer_id),
            ]);
        }
        table
    }
}


impl From<&CustomerCounts> for Table {
    fn from(counts: &CustomerCounts) -> Self {
        let mut table = Table::new([CUSTOMER_ID_COLUMN, counts.column.label.as_str()]);
        for row in &counts.rows {
            table.push_row(vec![Cell::Int(row.customer_id), Cell::Int(row.count)]);
        }
        table
    }
}


impl From<&Comparison> for Table {
    fn from(comparison: &Comparison) -> Self {
        let mut table = Table::new([
            CUSTOMER_ID_COLUMN,
            comparison.column_a.label.as_str(),
            comparison.column_b.label.as_str(),
            DIFFERENCE_COLUMN,
        ]);
        for row in &comparison.rows {
            table.push_row(vec![
                Cell::Int(row.customer_id),
                Cell::Int(row.count_a),
                Cell::Int(row.count_b),
                Cell::Int(row.difference),
            ]);
        }
        table
    }
}


/// Read a per-customer count table whose period is known only from its header.
///
/// The table needs a `customer_id` column and exactly one `rentals_*` column
/// naming a valid period. Ids and counts must be integers, ids unique and
/// counts non-negative.
impl TryFrom<&Table> for CustomerCounts {
    type Error = RentalError;

    fn try_from(table: &Table) -> RentalResult<Self> {
        let id_index = table.column_index(CUSTOMER_ID_COLUMN).ok_or_else(|| {
            RentalError::schema(format!("table has no {CUSTOMER_ID_COLUMN} column"))
        })?;

        let count_columns: Vec<(usize, &String)> = table
            .columns
            .iter()
            .enumerate()
            .filter(|(_, name)| is_count_column(name))
            .collect();

        let (count_index, label) = match count_columns.as_slice() {
            [single] => *single,
            [] => {
                return Err(RentalError::schema(
                    "table has no rentals_* count column (example: rentals_05_2005)",
                ))
            }
            many => {
                let names: Vec<&str> = many.iter().map(|(_, name)| name.as_str()).collect();
                return Err(RentalError::schema(format!(
                    "table must have exactly one rentals_* count column, found {}",
                    names.join(", ")
                )));
            }
        };

        let column: CountColumn = CountColumn::parse(label).ok_or_else(|| {
            RentalError::schema(format!("count column {label} does not name a valid period"))
        })?;

        let mut seen = HashSet::new();
        let mut rows = Vec::with_capacity(table.rows.len());

        for (line, row) in table.rows.iter().enumerate() {
            let int_at = |index: usize, name: &str| -> RentalResult<i64> {
                row.get(index).and_then(Cell::as_int).ok_or_else(|| {
                    RentalError::schema(format!("row {}: {name} is not an integer", line + 1))
                })
            };

            let customer_id = int_at(id_index, CUSTOMER_ID_COLUMN)?;
            let count = int_at(count_index, label)?;

            if count < 0 {
                return Err(RentalError::schema(format!(
                    "row {}: negative count {count}",
                    line + 1
                )));
            }
            if !seen.insert(customer_id) {
                return Err(RentalError::schema(format!(
                    "row {}: duplicate customer_id {customer_id}",
                    line + 1
                )));
            }

            rows.push(CustomerCount { customer_id, count });
        }

        Ok(CustomerCounts { column, rows })
    }
}

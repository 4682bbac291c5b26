//! Rental rows and the per-customer tables built from them.

use std::cmp::Reverse;

use chrono::NaiveDateTime;

use super::period::CountColumn;


/// Timestamp format used by the `rental.rental_date` column.
pub const RENTAL_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";


/// A single rental transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentalEvent {
    pub rental_id: i64,
    pub rental_date: NaiveDateTime,
    pub customer_id: i64,
}


impl RentalEvent {
    pub fn rental_date_string(&self) -> String {
        self.rental_date.format(RENTAL_DATE_FORMAT).to_string()
    }
}


/// Number of rentals for one customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomerCount {
    pub customer_id: i64,
    pub count: i64,
}


/// One row per customer, counted under a single period column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerCounts {
    pub column: CountColumn,
    pub rows: Vec<CustomerCount>,
}


impl CustomerCounts {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}


#[cfg(test)]
impl CustomerCounts {
    pub fn get(&self, customer_id: i64) -> Option<i64> {
        self.rows
            .iter()
            .find(|row| row.customer_id == customer_id)
            .map(|row| row.count)
    }
}


/// A customer active in both compared periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonRow {
    pub customer_id: i64,
    pub count_a: i64,
    pub count_b: i64,
    /// `count_b - count_a`
    pub difference: i64,
}


/// Joined counts for two periods, keeping both original column names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub column_a: CountColumn,
    pub column_b: CountColumn,
    pub rows: Vec<ComparisonRow>,
}


impl Comparison {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Biggest increase first, ties by customer id.
    pub fn sort_by_difference_desc(&mut self) {
        self.rows
            .sort_by_key(|row| (Reverse(row.difference), row.customer_id));
    }

    pub fn top(&self, n: usize) -> &[ComparisonRow] {
        &self.rows[..n.min(self.rows.len())]
    }
}

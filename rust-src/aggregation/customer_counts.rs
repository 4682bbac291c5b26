//! Per-customer rental counts.

use std::collections::HashMap;

use chrono::Datelike;
use log::{debug, warn};

use crate::models::{CustomerCount, CustomerCounts, Period, RentalEvent};


/// Count rentals per customer under the column named by `period`.
///
/// The input is expected to hold only rentals from `period`; every row is
/// counted regardless, and rows from other months are reported in the log.
/// Customers appear in order of their first rental.
pub fn count_by_customer(rentals: &[RentalEvent], period: Period) -> CustomerCounts {
    let column = period.count_column();

    let mut index: HashMap<i64, usize> = HashMap::new();
    let mut rows: Vec<CustomerCount> = Vec::new();
    let mut outside_period = 0usize;

    for rental in rentals {
        if !in_period(rental, period) {
            outside_period += 1;
        }

        let slot = *index.entry(rental.customer_id).or_insert_with(|| {
            rows.push(CustomerCount {
                customer_id: rental.customer_id,
                count: 0,
            });
            rows.len() - 1
        });
        rows[slot].count += 1;
    }

    if outside_period > 0 {
        warn!(
            "{outside_period} of {} rentals counted under {column} fall outside {period}",
            rentals.len()
        );
    }
    debug!("Counted {} rentals for {} customers under {column}", rentals.len(), rows.len());

    CustomerCounts { column, rows }
}


fn in_period(rental: &RentalEvent, period: Period) -> bool {
    rental.rental_date.year() == period.year() && rental.rental_date.month() == period.month()
}

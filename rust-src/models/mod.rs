//! Domain models for rentals, periods and comparisons.

mod period;
mod rental;

#[allow(unused_imports)]
pub use period::{is_count_column, CountColumn, Period, COUNT_COLUMN_PREFIX};
#[allow(unused_imports)]
pub use rental::{
    Comparison,
    ComparisonRow,
    CustomerCount,
    CustomerCounts,
    RentalEvent,
    RENTAL_DATE_FORMAT,
};

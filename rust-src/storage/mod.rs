//! Storage layer: reads rental rows from the database.

mod database;

#[allow(unused_imports)]
pub use database::{connect, rentals_for_period, total_rentals};

#[cfg(test)]
pub(crate) use database::tests::seed_rentals;

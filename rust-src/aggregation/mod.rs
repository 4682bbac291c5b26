//! Aggregation layer: per-customer counts and period comparisons.

mod comparison;
mod customer_counts;

#[allow(unused_imports)]
pub use comparison::{compare, compare_tables};
#[allow(unused_imports)]
pub use customer_counts::count_by_customer;

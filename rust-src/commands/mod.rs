//! CLI command implementations.

pub mod check;
pub mod compare;
pub mod counts;
pub mod diff;
pub mod rentals;

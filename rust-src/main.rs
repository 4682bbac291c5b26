//! rental-delta CLI
//!
//! Per-customer rental counts for two months, joined on the customers
//! active in both.

mod aggregation;
mod cli;
mod commands;
mod config;
mod data;
mod error;
mod models;
mod storage;

use error::RentalError;


fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {e:#}");
        if e.downcast_ref::<RentalError>().is_some_and(RentalError::is_connectivity) {
            eprintln!("Check --database (DB_NAME) points at a database with a rental table.");
        }
        std::process::exit(1);
    }
}

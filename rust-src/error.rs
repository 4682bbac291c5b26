//! Error types shared by the fetch, aggregate and compare layers.

use thiserror::Error;


/// Invalid connection or period parameters, caught at construction time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required connection field: {0}")]
    MissingField(&'static str),
    #[error("invalid port: {0}")]
    InvalidPort(u16),
    #[error("invalid month {0}: expected 1-12")]
    InvalidMonth(u32),
    #[error("invalid period '{0}': expected MM/YYYY")]
    InvalidPeriod(String),
}


/// Errors raised while producing a comparison.
#[derive(Error, Debug)]
pub enum RentalError {
    /// The data source could not be opened.
    #[error("failed to connect to database {database}: {source}")]
    Connect {
        database: String,
        #[source]
        source: rusqlite::Error,
    },

    /// A query against an open data source failed.
    #[error("query failed: {0}")]
    Connectivity(#[from] rusqlite::Error),

    /// An input table does not have the shape of a per-customer count table.
    #[error("schema error: {0}")]
    Schema(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}


impl RentalError {
    pub fn schema(message: impl Into<String>) -> Self {
        RentalError::Schema(message.into())
    }

    /// True for failures reaching or querying the data source.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, RentalError::Connect { .. } | RentalError::Connectivity(_))
    }
}


pub type RentalResult<T> = Result<T, RentalError>;

//! Configuration and settings for rental-delta.

mod settings;

#[allow(unused_imports)]
pub use settings::{
    get_data_dir,
    resolve_database_path,
    DbConfig,
    DEFAULT_DATABASE,
    DEFAULT_HOST,
    DEFAULT_PORT,
    DEFAULT_TOP_ROWS,
};

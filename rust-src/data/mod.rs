//! Tabular data and its CSV persistence.

mod csv_io;
mod table;

#[allow(unused_imports)]
pub use csv_io::{read_table, read_table_csv, write_table, write_table_csv};
#[allow(unused_imports)]
pub use table::{Cell, Table, CUSTOMER_ID_COLUMN, DIFFERENCE_COLUMN};

//! Delimited text persistence for tables.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};

use super::table::{Cell, Table};


/// Write a header row followed by one row per record.
pub fn write_table<W: Write>(table: &Table, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(&table.columns)?;
    for row in &table.rows {
        wtr.write_record(row.iter().map(Cell::to_string))?;
    }
    wtr.flush()?;

    Ok(())
}


/// Read a table with a header row, inferring integer cells.
pub fn read_table<R: Read>(reader: R) -> Result<Table> {
    let mut rdr = csv::Reader::from_reader(reader);

    let columns: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    let mut table = Table::new(columns);

    for (line, record) in rdr.records().enumerate() {
        let record = record.with_context(|| format!("Malformed row {}", line + 2))?;
        table.push_row(record.iter().map(Cell::infer).collect());
    }

    Ok(table)
}


/// Save a table to a CSV file, creating parent directories as needed.
pub fn write_table_csv(table: &Table, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let file = File::create(path)
        .with_context(|| format!("Failed to create file: {}", path.display()))?;
    write_table(table, file).with_context(|| format!("Failed to write {}", path.display()))
}


/// Load a table from a CSV file.
pub fn read_table_csv(path: &Path) -> Result<Table> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open file: {}", path.display()))?;
    read_table(file).with_context(|| format!("Failed to read {}", path.display()))
}


#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_header_and_rows() {
        let mut table = Table::new(["customer_id", "rentals_05_2005"]);
        table.push_row(vec![Cell::Int(130), Cell::Int(2)]);
        table.push_row(vec![Cell::Int(459), Cell::Int(1)]);

        let mut out = Vec::new();
        write_table(&table, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "customer_id,rentals_05_2005\n130,2\n459,1\n"
        );
    }

    #[test]
    fn test_read_infers_cells() {
        let input = "rental_id,rental_date,customer_id\n1,2005-05-24 22:53:30,130\n";
        let table = read_table(input.as_bytes()).unwrap();

        assert_eq!(table.columns, vec!["rental_id", "rental_date", "customer_id"]);
        assert_eq!(
            table.rows[0],
            vec![
                Cell::Int(1),
                Cell::Text("2005-05-24 22:53:30".to_string()),
                Cell::Int(130),
            ]
        );
    }

    #[test]
    fn test_header_only_file_is_empty_table() {
        let table = read_table("customer_id,rentals_05_2005\n".as_bytes()).unwrap();
        assert_eq!(table.columns.len(), 2);
        assert!(table.is_empty());
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let input = "customer_id,rentals_05_2005\n1,2,3\n";
        assert!(read_table(input.as_bytes()).is_err());
    }

    #[test]
    fn test_file_roundtrip_creates_directories() {
        let tmp_dir = TempDir::new().unwrap();
        let path = tmp_dir.path().join("out").join("counts.csv");

        let mut table = Table::new(["customer_id", "rentals_06_2005"]);
        table.push_row(vec![Cell::Int(1), Cell::Int(5)]);

        write_table_csv(&table, &path).unwrap();
        assert_eq!(read_table_csv(&path).unwrap(), table);
    }
}

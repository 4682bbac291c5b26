//! SQLite access to the `rental` table.

use log::{debug, info};
use rusqlite::{params, Connection, OpenFlags};

use crate::config::DbConfig;
use crate::error::{RentalError, RentalResult};
use crate::models::{Period, RentalEvent};


/// Open a read-only connection to the database named by `config`.
///
/// A missing database file is a connectivity failure, never an empty result.
pub fn connect(config: &DbConfig) -> RentalResult<Connection> {
    let path = config.database_path();
    info!("Connecting to {} ({})", config.redacted_url(), path.display());

    Connection::open_with_flags(
        &path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(|source| RentalError::Connect {
        database: path.display().to_string(),
        source,
    })
}


/// Total number of rows in the `rental` table.
pub fn total_rentals(conn: &Connection) -> RentalResult<i64> {
    let total = conn.query_row("SELECT COUNT(*) FROM rental", [], |row| row.get(0))?;
    Ok(total)
}


/// Get all rentals made during `period`, oldest first.
pub fn rentals_for_period(conn: &Connection, period: Period) -> RentalResult<Vec<RentalEvent>> {
    debug!("Fetching rentals for {period}");

    let mut stmt = conn.prepare(
        "SELECT rental_id, rental_date, customer_id
         FROM rental
         WHERE CAST(strftime('%Y', rental_date) AS INTEGER) = ?1
           AND CAST(strftime('%m', rental_date) AS INTEGER) = ?2
         ORDER BY rental_date, rental_id",
    )?;

    let rentals = stmt
        .query_map(params![period.year(), period.month()], |row| {
            Ok(RentalEvent {
                rental_id: row.get(0)?,
                rental_date: row.get(1)?,
                customer_id: row.get(2)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    info!("Fetched {} rentals for {period}", rentals.len());
    Ok(rentals)
}


#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Create a Sakila-shaped `rental` table with the given
    /// `(rental_id, rental_date, customer_id)` rows.
    pub(crate) fn seed_rentals(conn: &Connection, rows: &[(i64, &str, i64)]) {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS rental (
                rental_id INTEGER PRIMARY KEY,
                rental_date TIMESTAMP NOT NULL,
                inventory_id INTEGER NOT NULL DEFAULT 1,
                customer_id INTEGER NOT NULL,
                return_date TIMESTAMP,
                staff_id INTEGER NOT NULL DEFAULT 1
            )",
            [],
        )
        .unwrap();

        for (rental_id, rental_date, customer_id) in rows {
            conn.execute(
                "INSERT INTO rental (rental_id, rental_date, customer_id) VALUES (?1, ?2, ?3)",
                params![rental_id, rental_date, customer_id],
            )
            .unwrap();
        }
    }

    fn sample_rows() -> Vec<(i64, &'static str, i64)> {
        vec![
            (3, "2005-05-24 23:03:39", 408),
            (1, "2005-05-24 22:53:30", 130),
            (2, "2005-05-24 22:54:33", 459),
            (4, "2005-06-14 22:53:33", 130),
            (5, "2005-06-15 00:00:00", 459),
            (6, "2006-05-14 15:16:03", 130),
            (7, "2005-05-31 23:59:59", 130),
        ]
    }

    fn memory_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        seed_rentals(&conn, &sample_rows());
        conn
    }

    #[test]
    fn test_rentals_for_period_filters_by_month_and_year() {
        let conn = memory_db();
        let may = rentals_for_period(&conn, Period::new(5, 2005).unwrap()).unwrap();

        let ids: Vec<i64> = may.iter().map(|r| r.rental_id).collect();
        assert_eq!(ids, vec![1, 2, 3, 7]);
    }

    #[test]
    fn test_rentals_ordered_by_date() {
        let conn = memory_db();
        let may = rentals_for_period(&conn, Period::new(5, 2005).unwrap()).unwrap();

        assert!(may.windows(2).all(|w| w[0].rental_date <= w[1].rental_date));
        assert_eq!(may[0].rental_date_string(), "2005-05-24 22:53:30");
        assert_eq!(may[0].customer_id, 130);
    }

    #[test]
    fn test_rentals_for_empty_period() {
        let conn = memory_db();
        let rentals = rentals_for_period(&conn, Period::new(1, 1999).unwrap()).unwrap();
        assert!(rentals.is_empty());
    }

    #[test]
    fn test_total_rentals() {
        let conn = memory_db();
        assert_eq!(total_rentals(&conn).unwrap(), 7);
    }

    #[test]
    fn test_missing_table_is_connectivity_error() {
        let conn = Connection::open_in_memory().unwrap();
        let err = rentals_for_period(&conn, Period::new(5, 2005).unwrap()).unwrap_err();
        assert!(err.is_connectivity());
    }

    #[test]
    fn test_connect_reads_file_database() {
        let tmp_dir = TempDir::new().unwrap();
        let db_path = tmp_dir.path().join("sakila.db");
        seed_rentals(&Connection::open(&db_path).unwrap(), &sample_rows());

        let config = DbConfig::new(
            "root",
            "secret",
            "127.0.0.1",
            3306,
            db_path.to_string_lossy(),
        )
        .unwrap();
        let conn = connect(&config).unwrap();

        let june = rentals_for_period(&conn, Period::new(6, 2005).unwrap()).unwrap();
        assert_eq!(june.len(), 2);
    }

    #[test]
    fn test_connect_missing_database_fails() {
        let tmp_dir = TempDir::new().unwrap();
        let db_path = tmp_dir.path().join("missing.db");
        let config =
            DbConfig::new("root", "", "127.0.0.1", 3306, db_path.to_string_lossy()).unwrap();

        match connect(&config) {
            Err(err) => assert!(matches!(err, RentalError::Connect { .. })),
            Ok(_) => panic!("expected connect to fail"),
        }
        assert!(!db_path.exists());
    }
}

//! Inner join of two per-customer count tables.

use std::collections::HashMap;

use log::debug;

use crate::data::Table;
use crate::error::{RentalError, RentalResult};
use crate::models::{Comparison, ComparisonRow, CustomerCounts};


/// Compare two count tables, keeping only customers present in both.
///
/// `difference` is `b - a`. Rows follow the order of `counts_a`.
pub fn compare(counts_a: &CustomerCounts, counts_b: &CustomerCounts) -> RentalResult<Comparison> {
    if counts_a.column == counts_b.column {
        return Err(RentalError::schema(format!(
            "both tables count the same column {}",
            counts_a.column
        )));
    }

    let lookup_b: HashMap<i64, i64> = counts_b
        .rows
        .iter()
        .map(|row| (row.customer_id, row.count))
        .collect();

    let rows: Vec<ComparisonRow> = counts_a
        .rows
        .iter()
        .filter_map(|row| {
            lookup_b.get(&row.customer_id).map(|&count_b| ComparisonRow {
                customer_id: row.customer_id,
                count_a: row.count,
                count_b,
                difference: count_b - row.count,
            })
        })
        .collect();

    debug!(
        "{} of {} customers under {} also active under {}",
        rows.len(),
        counts_a.len(),
        counts_a.column,
        counts_b.column
    );

    Ok(Comparison {
        column_a: counts_a.column.clone(),
        column_b: counts_b.column.clone(),
        rows,
    })
}


/// Compare two tables read from outside, such as saved CSV files.
///
/// Both tables are validated before any join is attempted.
pub fn compare_tables(table_a: &Table, table_b: &Table) -> RentalResult<Comparison> {
    let counts_a = CustomerCounts::try_from(table_a)?;
    let counts_b = CustomerCounts::try_from(table_b)?;
    compare(&counts_a, &counts_b)
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use crate::data::Cell;
    use crate::models::{CustomerCount, Period};

    fn counts(month: u32, rows: &[(i64, i64)]) -> CustomerCounts {
        CustomerCounts {
            column: Period::new(month, 2005).unwrap().count_column(),
            rows: rows
                .iter()
                .map(|&(customer_id, count)| CustomerCount { customer_id, count })
                .collect(),
        }
    }

    #[test]
    fn test_compare_keeps_intersection() {
        let a = counts(5, &[(1, 3)]);
        let b = counts(6, &[(1, 5), (2, 1)]);

        let cmp = compare(&a, &b).unwrap();
        assert_eq!(cmp.column_a.label, "rentals_05_2005");
        assert_eq!(cmp.column_b.label, "rentals_06_2005");
        assert_eq!(
            cmp.rows,
            vec![ComparisonRow { customer_id: 1, count_a: 3, count_b: 5, difference: 2 }]
        );
    }

    #[test]
    fn test_intersection_never_superset() {
        let a = counts(5, &[(1, 2), (2, 4), (3, 1), (7, 7)]);
        let b = counts(6, &[(2, 1), (3, 1), (5, 2), (7, 9), (8, 1)]);

        let cmp = compare(&a, &b).unwrap();
        let got: HashSet<i64> = cmp.rows.iter().map(|r| r.customer_id).collect();
        let expected: HashSet<i64> = [2, 3, 7].into_iter().collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_difference_signed() {
        let a = counts(5, &[(1, 4), (2, 2), (3, 1)]);
        let b = counts(6, &[(1, 1), (2, 2), (3, 6)]);

        let cmp = compare(&a, &b).unwrap();
        let diffs: Vec<i64> = cmp.rows.iter().map(|r| r.difference).collect();
        assert_eq!(diffs, vec![-3, 0, 5]);
        assert!(cmp.rows.iter().all(|r| r.difference == r.count_b - r.count_a));
    }

    #[test]
    fn test_disjoint_tables_compare_empty() {
        let a = counts(5, &[(1, 1), (2, 1)]);
        let b = counts(6, &[(3, 1), (4, 1)]);
        assert!(compare(&a, &b).unwrap().is_empty());
    }

    #[test]
    fn test_empty_inputs() {
        let a = counts(5, &[]);
        let b = counts(6, &[(1, 1)]);
        assert!(compare(&a, &b).unwrap().is_empty());
    }

    #[test]
    fn test_same_column_rejected() {
        let a = counts(5, &[(1, 1)]);
        let b = counts(5, &[(1, 2)]);
        assert!(matches!(compare(&a, &b), Err(RentalError::Schema(_))));
    }

    fn table(columns: &[&str], rows: &[&[i64]]) -> Table {
        let mut table = Table::new(columns.iter().copied());
        for row in rows {
            table.push_row(row.iter().map(|&v| Cell::Int(v)).collect());
        }
        table
    }

    #[test]
    fn test_compare_tables() {
        let a = table(&["customer_id", "rentals_05_2005"], &[&[1, 3]]);
        let b = table(&["customer_id", "rentals_06_2005"], &[&[1, 5], &[2, 1]]);

        let cmp = compare_tables(&a, &b).unwrap();
        assert_eq!(
            Table::from(&cmp),
            table(
                &["customer_id", "rentals_05_2005", "rentals_06_2005", "difference"],
                &[&[1, 3, 5, 2]]
            )
        );
    }

    #[test]
    fn test_compare_tables_validates_both_inputs() {
        let good = table(&["customer_id", "rentals_05_2005"], &[&[1, 3]]);
        let raw = table(&["rental_id", "customer_id"], &[&[1, 1]]);
        let doubled = table(
            &["customer_id", "rentals_05_2005", "rentals_06_2005"],
            &[&[1, 3, 5]],
        );

        assert!(matches!(compare_tables(&good, &raw), Err(RentalError::Schema(_))));
        assert!(matches!(compare_tables(&raw, &good), Err(RentalError::Schema(_))));
        assert!(matches!(compare_tables(&doubled, &good), Err(RentalError::Schema(_))));
    }

    #[test]
    fn test_compare_tables_rejects_padded_year_header() {
        let padded = table(&["customer_id", "rentals_05_02005"], &[&[1, 3]]);
        let june = table(&["customer_id", "rentals_06_2005"], &[&[1, 5]]);
        let may = table(&["customer_id", "rentals_05_2005"], &[&[1, 2]]);

        assert!(matches!(compare_tables(&padded, &june), Err(RentalError::Schema(_))));
        assert!(matches!(compare_tables(&may, &padded), Err(RentalError::Schema(_))));
    }
}

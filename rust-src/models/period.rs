//! Calendar periods and the count column names derived from them.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::ConfigError;


/// Prefix shared by every per-period count column.
pub const COUNT_COLUMN_PREFIX: &str = "rentals_";


/// A single calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Period {
    year: i32,
    month: u32,
}


impl Period {
    pub fn new(month: u32, year: i32) -> Result<Self, ConfigError> {
        if !(1..=12).contains(&month) {
            return Err(ConfigError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// The count column naming this period, e.g. `rentals_05_2005`.
    pub fn count_column(&self) -> CountColumn {
        CountColumn {
            period: *self,
            label: format!("{COUNT_COLUMN_PREFIX}{:02}_{}", self.month, self.year),
        }
    }

    /// Label used in output file names, e.g. `05_2005`.
    pub fn file_label(&self) -> String {
        format!("{:02}_{}", self.month, self.year)
    }
}


impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{}", self.month, self.year)
    }
}


/// Parses `MM/YYYY` or `M/YYYY`.
impl FromStr for Period {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidPeriod(s.to_string());

        let (month, year) = s.trim().split_once('/').ok_or_else(invalid)?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        let year: i32 = year.parse().map_err(|_| invalid())?;

        Period::new(month, year)
    }
}


/// A count column: the period it counts and its generated name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CountColumn {
    pub period: Period,
    pub label: String,
}


impl CountColumn {
    /// Recover a count column from its name.
    ///
    /// Only used where the column name is the sole record of the period,
    /// such as a header read back from a CSV file.
    pub fn parse(label: &str) -> Option<Self> {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let pattern = PATTERN.get_or_init(|| {
            Regex::new(r"^rentals_(\d{2})_(-?\d+)$").expect("count column pattern is valid")
        });

        let caps = pattern.captures(label)?;
        let month = caps[1].parse().ok()?;
        let year = caps[2].parse().ok()?;
        let column = Period::new(month, year).ok()?.count_column();

        (column.label == label).then_some(column)
    }
}


impl fmt::Display for CountColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}


/// Whether a column name looks like a count column.
pub fn is_count_column(name: &str) -> bool {
    name.starts_with(COUNT_COLUMN_PREFIX)
}

//! Lunar month tables.
//!
//! A table lists, per lunar year, the solar date of New Year and the length
//! of each month in order. Years with an intercalary month list thirteen
//! lengths and name the month the leap month follows:
//!
//! ```toml
//! [[year]]
//! year = 2023
//! new_year = "2023-01-22"
//! months = [29, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29]
//! leap_month = 2
//! ```
//!
//! Leap-month birth dates are not addressable; a month number always means
//! the regular month.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use saju_core::{CalendarError, CivilDate, LunarDate};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug)]
pub enum TableError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    InvalidData(String),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::Io(e) => write!(f, "failed to read lunar table: {e}"),
            TableError::Toml(e) => write!(f, "malformed lunar table: {e}"),
            TableError::InvalidData(msg) => write!(f, "invalid lunar table: {msg}"),
        }
    }
}

impl std::error::Error for TableError {}

impl From<std::io::Error> for TableError {
    fn from(e: std::io::Error) -> Self {
        TableError::Io(e)
    }
}

impl From<toml::de::Error> for TableError {
    fn from(e: toml::de::Error) -> Self {
        TableError::Toml(e)
    }
}

pub type Result<T> = std::result::Result<T, TableError>;

/// One lunar year as written in a table file.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LunarYear {
    pub year: i32,
    pub new_year: CivilDate,
    pub months: Vec<u8>,
    #[serde(default)]
    pub leap_month: Option<u8>,
}

impl LunarYear {
    fn validate(&self) -> Result<()> {
        let invalid =
            |msg: String| Err(TableError::InvalidData(format!("year {}: {msg}", self.year)));

        if let Some(&bad) = self.months.iter().find(|&&len| len != 29 && len != 30) {
            return invalid(format!("month length {bad} is not 29 or 30"));
        }
        match (self.leap_month, self.months.len()) {
            (None, 12) => Ok(()),
            (Some(m), 13) if (1..=12).contains(&m) => Ok(()),
            (Some(m), 13) => invalid(format!("leap_month {m} is not in 1..=12")),
            (None, n) => invalid(format!("expected 12 months, found {n}")),
            (Some(_), n) => invalid(format!("leap year needs 13 months, found {n}")),
        }
    }

    /// Index into `months` of the regular month `month` (1-based).
    fn slot(&self, month: u8) -> usize {
        match self.leap_month {
            Some(leap) if month > leap => month as usize,
            _ => month as usize - 1,
        }
    }

    fn to_solar(&self, month: u8, day: u8) -> Option<CivilDate> {
        let slot = self.slot(month);
        let len = *self.months.get(slot)?;
        if day == 0 || day > len {
            return None;
        }
        let before: i64 = self.months[..slot].iter().map(|&m| m as i64).sum();
        Some(self.new_year.add_days(before + day as i64 - 1))
    }
}

#[derive(Deserialize)]
struct TableFile {
    #[serde(default, rename = "year")]
    years: Vec<LunarYear>,
}

/// Lunar years indexed by year number. An empty table converts nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LunarTable {
    years: BTreeMap<i32, LunarYear>,
}

impl LunarTable {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: TableFile = toml::from_str(content)?;
        Self::from_years(file.years)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let table = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), years = table.len(), "loaded lunar table");
        Ok(table)
    }

    pub fn from_years(years: Vec<LunarYear>) -> Result<Self> {
        let mut map = BTreeMap::new();
        for y in years {
            y.validate()?;
            let year = y.year;
            if map.insert(year, y).is_some() {
                return Err(TableError::InvalidData(format!("year {year} listed twice")));
            }
        }
        Ok(Self { years: map })
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// First and last covered years.
    pub fn range(&self) -> Option<(i32, i32)> {
        let first = *self.years.keys().next()?;
        let last = *self.years.keys().next_back()?;
        Some((first, last))
    }

    pub fn to_solar(&self, lunar: LunarDate) -> std::result::Result<CivilDate, CalendarError> {
        let entry = self
            .years
            .get(&lunar.year)
            .ok_or(CalendarError::OutOfRange(lunar.year))?;
        entry
            .to_solar(lunar.month, lunar.day)
            .ok_or(CalendarError::InvalidLunarDate {
                year: lunar.year,
                month: lunar.month,
                day: lunar.day,
            })
    }
}

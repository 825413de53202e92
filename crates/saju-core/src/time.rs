//! Lightweight civil date and clock-time types (no chrono dependency).
//!
//! Uses Howard Hinnant's days_from_civil / civil_from_days algorithms for
//! proleptic Gregorian day arithmetic.

use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParseError;

/// Julian Day Number of 1970-01-01.
const UNIX_EPOCH_JDN: i64 = 2_440_588;

/// Years a date may carry. Day arithmetic saturates at the edges.
pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9999;

/// A validated proleptic Gregorian calendar date.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CivilDate {
    year: i32,
    month: u8,
    day: u8,
}

impl CivilDate {
    /// Returns `None` when the year is outside `MIN_YEAR..=MAX_YEAR` or
    /// month or day is out of range for the year.
    pub fn new(year: i32, month: u8, day: u8) -> Option<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year)
            || !(1..=12).contains(&month)
            || day == 0
            || day > days_in_month(year, month)
        {
            return None;
        }
        Some(Self { year, month, day })
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u8 {
        self.month
    }

    pub fn day(self) -> u8 {
        self.day
    }

    /// Days since 1970-01-01 (negative before the epoch).
    pub fn days_since_epoch(self) -> i64 {
        days_from_civil(self.year as i64, self.month as i64, self.day as i64)
    }

    /// Clamped to `MIN_YEAR-01-01..=MAX_YEAR-12-31`.
    pub fn from_days_since_epoch(days: i64) -> Self {
        let first = days_from_civil(MIN_YEAR as i64, 1, 1);
        let last = days_from_civil(MAX_YEAR as i64, 12, 31);
        let (y, m, d) = civil_from_days(days.clamp(first, last));
        Self {
            year: y as i32,
            month: m as u8,
            day: d as u8,
        }
    }

    pub fn julian_day_number(self) -> i64 {
        self.days_since_epoch() + UNIX_EPOCH_JDN
    }

    pub fn add_days(self, days: i64) -> Self {
        Self::from_days_since_epoch(self.days_since_epoch().saturating_add(days))
    }

    /// Current date on a clock `utc_offset_minutes` ahead of UTC
    /// (540 for KST).
    pub fn today_at_offset(utc_offset_minutes: i32) -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        Self::at_unix_seconds(secs as i64, utc_offset_minutes)
    }

    fn at_unix_seconds(secs: i64, utc_offset_minutes: i32) -> Self {
        let local = secs + utc_offset_minutes as i64 * 60;
        Self::from_days_since_epoch(local.div_euclid(86400))
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CivilDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseError::Date(s.to_string());
        let mut parts = s.trim().splitn(3, '-');
        let year = parts.next().and_then(|p| p.parse::<i32>().ok()).ok_or_else(err)?;
        let month = parts.next().and_then(|p| p.parse::<u8>().ok()).ok_or_else(err)?;
        let day = parts.next().and_then(|p| p.parse::<u8>().ok()).ok_or_else(err)?;
        Self::new(year, month, day).ok_or_else(err)
    }
}

impl Serialize for CivilDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CivilDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A lunar calendar date as written (`YYYY-MM-DD`). Only shape is checked
/// here: month 1–12, day 1–30. Whether the day exists in that lunar month
/// is for the calendar adapter to decide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LunarDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl LunarDate {
    pub fn new(year: i32, month: u8, day: u8) -> Option<Self> {
        let valid = (MIN_YEAR..=MAX_YEAR).contains(&year)
            && (1..=12).contains(&month)
            && (1..=30).contains(&day);
        valid.then_some(Self { year, month, day })
    }

    /// The same numbers read as a solar date, with the day clamped to the
    /// length of the solar month (lunar 2-30 becomes solar 2-28 or 2-29).
    pub fn as_solar_lossy(self) -> CivilDate {
        let day = self.day.min(days_in_month(self.year, self.month));
        CivilDate {
            year: self.year,
            month: self.month,
            day,
        }
    }
}

impl fmt::Display for LunarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for LunarDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseError::Date(s.to_string());
        let mut parts = s.trim().splitn(3, '-');
        let year = parts.next().and_then(|p| p.parse::<i32>().ok()).ok_or_else(err)?;
        let month = parts.next().and_then(|p| p.parse::<u8>().ok()).ok_or_else(err)?;
        let day = parts.next().and_then(|p| p.parse::<u8>().ok()).ok_or_else(err)?;
        Self::new(year, month, day).ok_or_else(err)
    }
}

impl Serialize for LunarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for LunarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Wall-clock birth time, parsed from `HH:MM`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BirthTime {
    hour: u8,
    minute: u8,
}

impl BirthTime {
    pub const NOON: BirthTime = BirthTime {
        hour: 12,
        minute: 0,
    };
    pub const MIDNIGHT: BirthTime = BirthTime { hour: 0, minute: 0 };

    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    pub fn hour(self) -> u8 {
        self.hour
    }

    pub fn minute(self) -> u8 {
        self.minute
    }
}

impl fmt::Display for BirthTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for BirthTime {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseError::Time(s.to_string());
        let (h, m) = s.trim().split_once(':').ok_or_else(err)?;
        if h.is_empty() || h.len() > 2 || m.len() != 2 {
            return Err(err());
        }
        let hour = h.parse::<u8>().map_err(|_| err())?;
        let minute = m.parse::<u8>().map_err(|_| err())?;
        Self::new(hour, minute).ok_or_else(err)
    }
}

impl Serialize for BirthTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BirthTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Howard Hinnant's days_from_civil: (year, month, day) → Unix epoch days.
fn days_from_civil(y: i64, m: i64, d: i64) -> i64 {
    let y = if m <= 2 { y - 1 } else { y };
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let mp = (m + 9) % 12;
    let doy = (153 * mp + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146097 + doe - 719468
}

/// Howard Hinnant's civil_from_days: Unix epoch days → (year, month, day).
fn civil_from_days(days: i64) -> (i64, u64, u64) {
    let z = days + 719468;
    let era = if z >= 0 { z } else { z - 146096 } / 146097;
    let doe = (z - era * 146097) as u64;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let y = yoe as i64 + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = if m <= 2 { y + 1 } else { y };
    (y, m, d)
}

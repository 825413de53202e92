//! The calendar collaborator this engine consumes.
//!
//! Mapping civil dates to pillars and converting lunar dates is not done
//! here; any implementation of [`CalendarAdapter`] supplies it. The
//! `saju-calendar` crate provides the default one.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ganzhi::{FourPillars, Stem};
use crate::time::{CivilDate, LunarDate};

/// Failure converting a lunar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// The lunar year is not covered by the adapter's tables.
    OutOfRange(i32),
    /// The lunar month or day does not exist in that year.
    InvalidLunarDate { year: i32, month: u8, day: u8 },
}

impl fmt::Display for CalendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarError::OutOfRange(year) => {
                write!(f, "lunar year {year} is outside the supported range")
            }
            CalendarError::InvalidLunarDate { year, month, day } => {
                write!(f, "invalid lunar date {year:04}-{month:02}-{day:02}")
            }
        }
    }
}

impl std::error::Error for CalendarError {}

/// A stem together with a human-readable calendar label,
/// e.g. `2024년 (갑진년)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledStem {
    pub stem: Stem,
    pub label: String,
}

pub trait CalendarAdapter {
    /// Four pillars for a solar date and wall-clock time. Never omits the
    /// hour pillar.
    fn pillars_for(&self, date: CivilDate, hour: u8, minute: u8) -> FourPillars;

    /// Convert a lunar date to the solar calendar.
    fn lunar_to_solar(&self, lunar: LunarDate) -> Result<CivilDate, CalendarError>;

    fn stem_of_date(&self, date: CivilDate) -> LabeledStem;

    fn stem_of_month(&self, date: CivilDate) -> LabeledStem;

    fn stem_of_year(&self, date: CivilDate) -> LabeledStem;
}

impl<T: CalendarAdapter + ?Sized> CalendarAdapter for &T {
    fn pillars_for(&self, date: CivilDate, hour: u8, minute: u8) -> FourPillars {
        (**self).pillars_for(date, hour, minute)
    }

    fn lunar_to_solar(&self, lunar: LunarDate) -> Result<CivilDate, CalendarError> {
        (**self).lunar_to_solar(lunar)
    }

    fn stem_of_date(&self, date: CivilDate) -> LabeledStem {
        (**self).stem_of_date(date)
    }

    fn stem_of_month(&self, date: CivilDate) -> LabeledStem {
        (**self).stem_of_month(date)
    }

    fn stem_of_year(&self, date: CivilDate) -> LabeledStem {
        (**self).stem_of_year(date)
    }
}

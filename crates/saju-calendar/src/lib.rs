//! Default [`saju_core::CalendarAdapter`]: sexagenary pillar arithmetic with
//! solar-term month boundaries, plus lunar conversion from a TOML month
//! table supplied by the caller.

pub mod lunar;
pub mod sexagenary;

pub use lunar::{LunarTable, LunarYear, TableError};
pub use sexagenary::{
    SexagenaryCalendar, ZiHourMode, day_pillar, hour_pillar, month_pillar, sexagenary_year,
    year_pillar,
};

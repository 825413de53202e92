//! Sexagenary (60-term) arithmetic for pillars.
//!
//! Day pillars count from the Julian Day Number; year and month pillars
//! switch at the twelve sectional solar terms (절기), taken here at their
//! usual civil dates rather than computed astronomically. Dates within a
//! day of a term boundary can therefore land in the neighbouring month.

use saju_core::{
    Branch, CalendarAdapter, CalendarError, CivilDate, FourPillars, LabeledStem, LunarDate, Pillar,
    Stem,
};
use serde::{Deserialize, Serialize};

use crate::lunar::LunarTable;

/// JDN offset placing 갑자 at cycle position 0. 2000-01-01 (JDN 2451545)
/// is 무오, position 54.
const DAY_CYCLE_OFFSET: i64 = 49;

/// Year 4 CE was a 갑자 year.
const YEAR_CYCLE_OFFSET: i64 = 4;

/// Approximate civil start date (month, day) of each solar month, with the
/// branch it opens. Ordered through the civil year.
const TERM_STARTS: [(u8, u8, Branch); 12] = [
    (1, 6, Branch::Chuk), // 소한
    (2, 4, Branch::In),   // 입춘
    (3, 6, Branch::Myo),  // 경칩
    (4, 5, Branch::Jin),  // 청명
    (5, 6, Branch::Sa),   // 입하
    (6, 6, Branch::O),    // 망종
    (7, 7, Branch::Mi),   // 소서
    (8, 8, Branch::Sin),  // 입추
    (9, 8, Branch::Yu),   // 백로
    (10, 8, Branch::Sul), // 한로
    (11, 7, Branch::Hae), // 입동
    (12, 7, Branch::Ja),  // 대설
];

/// Which day the 23:00–24:00 double-hour (late 자시) belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZiHourMode {
    /// The day pillar stays on the civil date; the hour stem follows the
    /// next day (야자시).
    #[default]
    Modern,
    /// The whole chart moves to the next day at 23:00.
    Traditional,
}

/// Pillar of the civil date's day.
pub fn day_pillar(date: CivilDate) -> Pillar {
    let n = (date.julian_day_number() + DAY_CYCLE_OFFSET).rem_euclid(60);
    Pillar::from_cycle(n as usize)
}

/// The sexagenary year a date falls in; it turns at 입춘, not January 1.
pub fn sexagenary_year(date: CivilDate) -> i32 {
    let (m, d, _) = TERM_STARTS[1];
    if (date.month(), date.day()) < (m, d) {
        date.year() - 1
    } else {
        date.year()
    }
}

pub fn year_pillar(date: CivilDate) -> Pillar {
    let n = (sexagenary_year(date) as i64 - YEAR_CYCLE_OFFSET).rem_euclid(60);
    Pillar::from_cycle(n as usize)
}

/// Branch of the solar month containing `date`. Before 소한 it is still the
/// previous December's 자 month.
fn month_branch(date: CivilDate) -> Branch {
    TERM_STARTS
        .iter()
        .rev()
        .find(|(m, d, _)| (date.month(), date.day()) >= (*m, *d))
        .map_or(Branch::Ja, |(_, _, b)| *b)
}

/// Month stem from the year stem (오호둔): 갑기 years open with 병인,
/// 을경 with 무인, 병신 with 경인, 정임 with 임인, 무계 with 갑인.
pub fn month_pillar(date: CivilDate) -> Pillar {
    let year_stem = year_pillar(date).stem;
    let branch = month_branch(date);
    let first = (year_stem.index() % 5) * 2 + 2;
    let offset = (branch.index() + 12 - Branch::In.index()) % 12;
    Pillar::new(Stem::from_index(first + offset), branch)
}

/// Double-hour branch: 23:00–00:59 자, 01:00–02:59 축, …
fn hour_branch(hour: u8) -> Branch {
    Branch::from_index(((hour as usize) + 1) / 2)
}

/// Hour stem from the day stem (오서둔): 갑기 days open with 갑자, 을경
/// with 병자, 병신 with 무자, 정임 with 경자, 무계 with 임자.
pub fn hour_pillar(day_stem: Stem, hour: u8) -> Pillar {
    let branch = hour_branch(hour);
    let first = (day_stem.index() % 5) * 2;
    Pillar::new(Stem::from_index(first + branch.index()), branch)
}

/// The default calendar adapter.
#[derive(Clone, Debug, Default)]
pub struct SexagenaryCalendar {
    zi_hour: ZiHourMode,
    lunar: LunarTable,
}

impl SexagenaryCalendar {
    pub fn new(zi_hour: ZiHourMode, lunar: LunarTable) -> Self {
        Self { zi_hour, lunar }
    }
}

impl CalendarAdapter for SexagenaryCalendar {
    fn pillars_for(&self, date: CivilDate, hour: u8, _minute: u8) -> FourPillars {
        let late_zi = hour >= 23;
        let next_day = date.add_days(1);

        let chart_date = if late_zi && self.zi_hour == ZiHourMode::Traditional {
            next_day
        } else {
            date
        };
        let day = day_pillar(chart_date);
        let hour_stem_day = if late_zi { day_pillar(next_day).stem } else { day.stem };

        FourPillars::new(
            year_pillar(chart_date),
            month_pillar(chart_date),
            day,
            hour_pillar(hour_stem_day, hour),
        )
    }

    fn lunar_to_solar(&self, lunar: LunarDate) -> Result<CivilDate, CalendarError> {
        self.lunar.to_solar(lunar)
    }

    fn stem_of_date(&self, date: CivilDate) -> LabeledStem {
        let pillar = day_pillar(date);
        LabeledStem {
            stem: pillar.stem,
            label: format!(
                "{}년 {}월 {}일 ({pillar}일)",
                date.year(),
                date.month(),
                date.day()
            ),
        }
    }

    fn stem_of_month(&self, date: CivilDate) -> LabeledStem {
        let pillar = month_pillar(date);
        LabeledStem {
            stem: pillar.stem,
            label: format!("{}년 {}월 ({pillar}월)", date.year(), date.month()),
        }
    }

    fn stem_of_year(&self, date: CivilDate) -> LabeledStem {
        let pillar = year_pillar(date);
        LabeledStem {
            stem: pillar.stem,
            label: format!("{}년 ({pillar}년)", date.year()),
        }
    }
}

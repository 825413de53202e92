//! Profile assembly: calendar adapter → pillars → classifications → an
//! immutable [`SajuProfile`].

use serde::{Deserialize, Serialize};

use crate::calendar::CalendarAdapter;
use crate::element::Element;
use crate::error::ParseError;
use crate::ganzhi::{FourPillars, Stem};
use crate::spirit::{SpiritList, collect_spirits};
use crate::stage::{TwelveStage, locate};
use crate::tally::{ElementCounts, tally};
use crate::ten_god::{TenGod, classify};
use crate::time::{BirthTime, CivilDate, LunarDate};

/// Birth date as entered, tagged with its calendar system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "calendar", content = "date", rename_all = "lowercase")]
pub enum BirthDate {
    Solar(CivilDate),
    Lunar(LunarDate),
}

impl BirthDate {
    /// Parse `YYYY-MM-DD` under the given calendar flag.
    pub fn parse(s: &str, is_lunar: bool) -> Result<Self, ParseError> {
        if is_lunar {
            s.parse().map(Self::Lunar)
        } else {
            s.parse().map(Self::Solar)
        }
    }

    pub fn is_lunar(self) -> bool {
        matches!(self, Self::Lunar(_))
    }
}

impl std::fmt::Display for BirthDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Solar(d) => write!(f, "{d} (solar)"),
            Self::Lunar(d) => write!(f, "{d} (lunar)"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BirthInput {
    pub date: BirthDate,
    pub time: Option<BirthTime>,
}

impl BirthInput {
    pub fn new(date: BirthDate, time: Option<BirthTime>) -> Self {
        Self { date, time }
    }

    pub fn solar(date: CivilDate, time: Option<BirthTime>) -> Self {
        Self::new(BirthDate::Solar(date), time)
    }

    pub fn lunar(date: LunarDate, time: Option<BirthTime>) -> Self {
        Self::new(BirthDate::Lunar(date), time)
    }

    /// Parse the raw form fields. An empty time string means unknown.
    pub fn parse(date: &str, time: Option<&str>, is_lunar: bool) -> Result<Self, ParseError> {
        let date = BirthDate::parse(date, is_lunar)?;
        let time = match time.map(str::trim) {
            Some(t) if !t.is_empty() => Some(t.parse()?),
            _ => None,
        };
        Ok(Self::new(date, time))
    }
}

/// Wall-clock time substituted when the birth time is unknown.
///
/// The computation has always used noon; the user-facing copy describes the
/// first double-hour (midnight). Noon stays the default until that is
/// settled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownHour {
    #[default]
    Noon,
    Midnight,
}

impl UnknownHour {
    pub fn time(self) -> BirthTime {
        match self {
            Self::Noon => BirthTime::NOON,
            Self::Midnight => BirthTime::MIDNIGHT,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssembleOptions {
    #[serde(default)]
    pub unknown_hour: UnknownHour,
}

/// Ten-Gods of the seven positions other than the Day Master itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenGodChart {
    pub year_stem: TenGod,
    pub year_branch: TenGod,
    pub month_stem: TenGod,
    pub month_branch: TenGod,
    pub day_branch: TenGod,
    pub hour_stem: TenGod,
    pub hour_branch: TenGod,
}

impl TenGodChart {
    pub fn of(pillars: &FourPillars) -> Self {
        let dm = pillars.day_master();
        Self {
            year_stem: classify(dm, pillars.year.stem),
            year_branch: classify(dm, pillars.year.branch),
            month_stem: classify(dm, pillars.month.stem),
            month_branch: classify(dm, pillars.month.branch),
            day_branch: classify(dm, pillars.day.branch),
            hour_stem: classify(dm, pillars.hour.stem),
            hour_branch: classify(dm, pillars.hour.branch),
        }
    }
}

/// Twelve-Stage of each pillar's branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageChart {
    pub year: TwelveStage,
    pub month: TwelveStage,
    pub day: TwelveStage,
    pub hour: TwelveStage,
}

impl StageChart {
    pub fn of(pillars: &FourPillars) -> Self {
        let dm = pillars.day_master();
        Self {
            year: locate(dm, pillars.year.branch),
            month: locate(dm, pillars.month.branch),
            day: locate(dm, pillars.day.branch),
            hour: locate(dm, pillars.hour.branch),
        }
    }
}

/// One birth chart. Built once by [`assemble`]; read-only afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SajuProfile {
    birth_date: BirthDate,
    birth_time: Option<BirthTime>,
    solar_date: CivilDate,
    calendar_degraded: bool,
    pillars: FourPillars,
    dominant_element: Element,
    lacking_element: Element,
    element_counts: ElementCounts,
    ten_gods: TenGodChart,
    stages: StageChart,
    spirits: SpiritList,
}

impl SajuProfile {
    /// The date as entered.
    pub fn birth_date(&self) -> BirthDate {
        self.birth_date
    }

    pub fn is_lunar(&self) -> bool {
        self.birth_date.is_lunar()
    }

    /// `None` when the birth time was unknown and a default was used.
    pub fn birth_time(&self) -> Option<BirthTime> {
        self.birth_time
    }

    /// The solar date the pillars were computed for.
    pub fn solar_date(&self) -> CivilDate {
        self.solar_date
    }

    /// True when lunar conversion failed and the date was read as solar.
    pub fn calendar_degraded(&self) -> bool {
        self.calendar_degraded
    }

    pub fn pillars(&self) -> &FourPillars {
        &self.pillars
    }

    pub fn day_master(&self) -> Stem {
        self.pillars.day_master()
    }

    pub fn dominant_element(&self) -> Element {
        self.dominant_element
    }

    pub fn lacking_element(&self) -> Element {
        self.lacking_element
    }

    pub fn element_counts(&self) -> &ElementCounts {
        &self.element_counts
    }

    pub fn ten_gods(&self) -> &TenGodChart {
        &self.ten_gods
    }

    pub fn stages(&self) -> &StageChart {
        &self.stages
    }

    pub fn spirits(&self) -> &SpiritList {
        &self.spirits
    }
}

/// Build a profile. Never fails: a lunar date the adapter cannot convert
/// is read as a solar date and the profile is marked degraded.
pub fn assemble(
    calendar: &impl CalendarAdapter,
    input: &BirthInput,
    options: &AssembleOptions,
) -> SajuProfile {
    let (solar_date, calendar_degraded) = match input.date {
        BirthDate::Solar(date) => (date, false),
        BirthDate::Lunar(lunar) => match calendar.lunar_to_solar(lunar) {
            Ok(date) => (date, false),
            Err(e) => {
                let fallback = lunar.as_solar_lossy();
                tracing::warn!(
                    "lunar conversion failed for {lunar}: {e}; reading as solar {fallback}"
                );
                (fallback, true)
            }
        },
    };

    let time = input.time.unwrap_or_else(|| {
        let fallback = options.unknown_hour.time();
        tracing::debug!("birth time unknown; using {fallback}");
        fallback
    });

    let pillars = calendar.pillars_for(solar_date, time.hour(), time.minute());
    let element_tally = tally(&pillars);
    let spirits = collect_spirits(
        pillars.day_master(),
        pillars.day.branch,
        &[
            pillars.year.branch,
            pillars.month.branch,
            pillars.day.branch,
            pillars.hour.branch,
        ],
    );

    tracing::debug!(
        "assembled {pillars} (dominant={}, lacking={}, spirits={})",
        element_tally.dominant,
        element_tally.lacking,
        spirits.len()
    );

    SajuProfile {
        birth_date: input.date,
        birth_time: input.time,
        solar_date,
        calendar_degraded,
        pillars,
        dominant_element: element_tally.dominant,
        lacking_element: element_tally.lacking,
        element_counts: element_tally.counts,
        ten_gods: TenGodChart::of(&pillars),
        stages: StageChart::of(&pillars),
        spirits,
    }
}

//! Saju (사주) birth-chart relationship engine.
//!
//! Classifies the stems and branches of a four-pillar chart against the Day
//! Master: Ten-God relations from the five-element generation and control
//! cycles, Twelve-Stage positions from a fixed table, Spirit markers from
//! triplet-group coincidences, and a weighted element tally. Advisors turn
//! a finished profile into fortunes, health notes and property scores.
//!
//! Zero I/O. Converting dates to pillars is delegated to a
//! [`CalendarAdapter`].

pub mod advisor;
pub mod calendar;
pub mod constants;
pub mod element;
pub mod engine;
pub mod error;
pub mod ganzhi;
pub mod profile;
pub mod spirit;
pub mod stage;
pub mod tally;
pub mod ten_god;
pub mod time;

pub use advisor::{
    CompatibilityDetails, CompatibilityReport, Direction, Fortune, FortunePeriod, HealthAdvisory,
    PropertyFeatures, compatibility_score, daily_fortune, floor_element, fortune, health_advisory,
    monthly_fortune, yearly_fortune,
};
pub use calendar::{CalendarAdapter, CalendarError, LabeledStem};
pub use element::{Element, Polarity};
pub use engine::SajuEngine;
pub use error::ParseError;
pub use ganzhi::{Branch, FourPillars, Pillar, PillarPosition, Stem, TripletGroup};
pub use profile::{
    AssembleOptions, BirthDate, BirthInput, SajuProfile, StageChart, TenGodChart, UnknownHour,
    assemble,
};
pub use spirit::{Spirit, SpiritList, collect_spirits, detect, detect_charisma};
pub use stage::{TwelveStage, locate};
pub use tally::{ElementCounts, ElementTally, tally};
pub use ten_god::{Classified, RelationFamily, TenGod, classify};
pub use time::{BirthTime, CivilDate, LunarDate};

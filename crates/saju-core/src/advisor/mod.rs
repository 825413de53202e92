//! Pure functions from a finished profile to user-facing advice.

pub mod fortune;
pub mod health;
pub mod property;

pub use fortune::{Fortune, FortunePeriod, daily_fortune, fortune, monthly_fortune, yearly_fortune};
pub use health::{HealthAdvisory, health_advisory};
pub use property::{
    CompatibilityDetails, CompatibilityReport, Direction, PropertyFeatures, compatibility_score,
    floor_element,
};

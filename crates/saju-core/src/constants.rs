/// Tally weight of an ordinary stem or branch slot.
pub const SLOT_WEIGHT: f64 = 1.0;

/// Tally weight of the month pillar's stem and branch (월령).
pub const MONTH_WEIGHT: f64 = 1.5;

/// Starting compatibility score before any bonus.
pub const BASE_SCORE: i32 = 70;

/// Direction element fills the lacking element.
pub const LACKING_DIRECTION_BONUS: i32 = 20;

/// Direction element is generated by the dominant element (outflow).
pub const OUTFLOW_DIRECTION_BONUS: i32 = 10;

/// Direction element generates the dominant element (support).
pub const SUPPORT_DIRECTION_BONUS: i32 = 15;

/// Floor element fills the lacking element.
pub const FLOOR_BONUS: i32 = 5;

/// Direction element is the element the Day Master controls.
pub const WEALTH_DIRECTION_BONUS: i32 = 5;

pub const SCORE_MIN: i32 = 0;
pub const SCORE_MAX: i32 = 100;

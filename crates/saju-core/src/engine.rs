use crate::advisor::{
    CompatibilityReport, Fortune, FortunePeriod, HealthAdvisory, PropertyFeatures,
    compatibility_score, fortune, health_advisory,
};
use crate::calendar::CalendarAdapter;
use crate::profile::{AssembleOptions, BirthInput, SajuProfile, assemble};
use crate::time::CivilDate;

/// A calendar adapter bound to assembly options. Holds no per-call state,
/// so one engine serves any number of concurrent requests.
#[derive(Clone, Debug)]
pub struct SajuEngine<C> {
    calendar: C,
    options: AssembleOptions,
}

impl<C: CalendarAdapter> SajuEngine<C> {
    pub fn new(calendar: C, options: AssembleOptions) -> Self {
        Self { calendar, options }
    }

    pub fn profile(&self, input: &BirthInput) -> SajuProfile {
        assemble(&self.calendar, input, &self.options)
    }

    pub fn fortune(
        &self,
        profile: &SajuProfile,
        period: FortunePeriod,
        on: CivilDate,
    ) -> Fortune {
        fortune(profile, &self.calendar, period, on)
    }

    pub fn health(&self, profile: &SajuProfile) -> HealthAdvisory {
        health_advisory(profile)
    }

    pub fn score(&self, profile: &SajuProfile, features: &PropertyFeatures) -> CompatibilityReport {
        compatibility_score(profile, features)
    }
}

//! Ten-God (십신) classification relative to the Day Master.

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};
use crate::ganzhi::{Branch, Stem};

/// How the target's element relates to the Day Master's element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelationFamily {
    Same,
    DayGenerates,
    GeneratesDay,
    DayControls,
    ControlsDay,
}

impl RelationFamily {
    pub fn between(day: Element, target: Element) -> Option<Self> {
        if day == target {
            Some(Self::Same)
        } else if day.generates() == target {
            Some(Self::DayGenerates)
        } else if target.generates() == day {
            Some(Self::GeneratesDay)
        } else if day.controls() == target {
            Some(Self::DayControls)
        } else if target.controls() == day {
            Some(Self::ControlsDay)
        } else {
            None
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TenGod {
    Friend,
    RobWealth,
    EatingGod,
    HurtingOfficer,
    IndirectWealth,
    DirectWealth,
    SevenKillings,
    DirectOfficer,
    IndirectResource,
    DirectResource,
}

impl TenGod {
    pub const ALL: [TenGod; 10] = [
        TenGod::Friend,
        TenGod::RobWealth,
        TenGod::EatingGod,
        TenGod::HurtingOfficer,
        TenGod::IndirectWealth,
        TenGod::DirectWealth,
        TenGod::SevenKillings,
        TenGod::DirectOfficer,
        TenGod::IndirectResource,
        TenGod::DirectResource,
    ];

    /// Select the sub-variant of a relation family by polarity match.
    pub fn from_relation(family: RelationFamily, same_polarity: bool) -> Self {
        match (family, same_polarity) {
            (RelationFamily::Same, true) => Self::Friend,
            (RelationFamily::Same, false) => Self::RobWealth,
            (RelationFamily::DayGenerates, true) => Self::EatingGod,
            (RelationFamily::DayGenerates, false) => Self::HurtingOfficer,
            (RelationFamily::GeneratesDay, true) => Self::IndirectResource,
            (RelationFamily::GeneratesDay, false) => Self::DirectResource,
            (RelationFamily::DayControls, true) => Self::IndirectWealth,
            (RelationFamily::DayControls, false) => Self::DirectWealth,
            (RelationFamily::ControlsDay, true) => Self::SevenKillings,
            (RelationFamily::ControlsDay, false) => Self::DirectOfficer,
        }
    }

    pub fn family(self) -> RelationFamily {
        match self {
            Self::Friend | Self::RobWealth => RelationFamily::Same,
            Self::EatingGod | Self::HurtingOfficer => RelationFamily::DayGenerates,
            Self::IndirectResource | Self::DirectResource => RelationFamily::GeneratesDay,
            Self::IndirectWealth | Self::DirectWealth => RelationFamily::DayControls,
            Self::SevenKillings | Self::DirectOfficer => RelationFamily::ControlsDay,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Friend => "friend",
            Self::RobWealth => "rob-wealth",
            Self::EatingGod => "eating-god",
            Self::HurtingOfficer => "hurting-officer",
            Self::IndirectWealth => "indirect-wealth",
            Self::DirectWealth => "direct-wealth",
            Self::SevenKillings => "seven-killings",
            Self::DirectOfficer => "direct-officer",
            Self::IndirectResource => "indirect-resource",
            Self::DirectResource => "direct-resource",
        }
    }

    /// Full Korean label; 편관 carries its alternate name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Friend => "비견",
            Self::RobWealth => "겁재",
            Self::EatingGod => "식신",
            Self::HurtingOfficer => "상관",
            Self::IndirectWealth => "편재",
            Self::DirectWealth => "정재",
            Self::SevenKillings => "편관(칠살)",
            Self::DirectOfficer => "정관",
            Self::IndirectResource => "편인",
            Self::DirectResource => "정인",
        }
    }

    /// The label without its parenthetical suffix; the key of the fortune
    /// description table.
    pub fn core_term(self) -> &'static str {
        let label = self.label();
        label.split_once('(').map_or(label, |(core, _)| core)
    }
}

impl std::fmt::Display for TenGod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Anything with an element and a polarity: a stem or a branch.
pub trait Classified: Copy {
    fn element(self) -> Element;
    fn polarity(self) -> Polarity;
}

impl Classified for Stem {
    fn element(self) -> Element {
        Stem::element(self)
    }

    fn polarity(self) -> Polarity {
        Stem::polarity(self)
    }
}

impl Classified for Branch {
    fn element(self) -> Element {
        Branch::element(self)
    }

    fn polarity(self) -> Polarity {
        Branch::polarity(self)
    }
}

/// Ten-God of `target` seen from `day_master`.
pub fn classify(day_master: Stem, target: impl Classified) -> TenGod {
    let same_polarity = day_master.polarity() == target.polarity();
    match RelationFamily::between(day_master.element(), target.element()) {
        Some(family) => TenGod::from_relation(family, same_polarity),
        None => {
            debug_assert!(
                false,
                "no element relation between {:?} and {:?}",
                day_master.element(),
                target.element()
            );
            TenGod::Friend
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_friend_and_rob_wealth() {
        assert_eq!(classify(Stem::Gap, Stem::Gap), TenGod::Friend);
        assert_eq!(classify(Stem::Gap, Stem::Eul), TenGod::RobWealth);
        assert_eq!(classify(Stem::Gap, Branch::In), TenGod::Friend);
        assert_eq!(classify(Stem::Gap, Branch::Myo), TenGod::RobWealth);
    }

    #[test]
    fn test_day_master_mu() {
        // 무(Earth, Yang)
        assert_eq!(classify(Stem::Mu, Stem::Gyeong), TenGod::EatingGod);
        assert_eq!(classify(Stem::Mu, Stem::Sin), TenGod::HurtingOfficer);
        assert_eq!(classify(Stem::Mu, Stem::Im), TenGod::IndirectWealth);
        assert_eq!(classify(Stem::Mu, Stem::Gye), TenGod::DirectWealth);
        assert_eq!(classify(Stem::Mu, Stem::Gap), TenGod::SevenKillings);
        assert_eq!(classify(Stem::Mu, Stem::Eul), TenGod::DirectOfficer);
        assert_eq!(classify(Stem::Mu, Stem::Byeong), TenGod::IndirectResource);
        assert_eq!(classify(Stem::Mu, Stem::Jeong), TenGod::DirectResource);
    }

    #[test]
    fn test_branch_uses_index_parity() {
        // 오 is index 6 (Yang) Fire; 무 is Yang Earth → Fire generates Earth, same polarity
        assert_eq!(classify(Stem::Mu, Branch::O), TenGod::IndirectResource);
        // 사 is index 5 (Yin) Fire
        assert_eq!(classify(Stem::Mu, Branch::Sa), TenGod::DirectResource);
    }

    #[test]
    fn test_core_term_strips_suffix() {
        assert_eq!(TenGod::SevenKillings.core_term(), "편관");
        assert_eq!(TenGod::DirectWealth.core_term(), "정재");
    }

    #[test]
    fn test_family_roundtrip() {
        for god in TenGod::ALL {
            let same = matches!(
                god,
                TenGod::Friend
                    | TenGod::EatingGod
                    | TenGod::IndirectResource
                    | TenGod::IndirectWealth
                    | TenGod::SevenKillings
            );
            assert_eq!(TenGod::from_relation(god.family(), same), god);
        }
    }
}

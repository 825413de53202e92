//! Real-estate compatibility: how well a property's facing and floor suit a
//! chart's element balance.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{
    BASE_SCORE, FLOOR_BONUS, LACKING_DIRECTION_BONUS, OUTFLOW_DIRECTION_BONUS, SCORE_MAX,
    SCORE_MIN, SUPPORT_DIRECTION_BONUS, WEALTH_DIRECTION_BONUS,
};
use crate::element::Element;
use crate::error::ParseError;
use crate::profile::SajuProfile;
use crate::spirit::Spirit;
use crate::ten_god::TenGod;

/// Compass facing of a property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Later-heaven trigram elements: 감 N water, 간 NE earth, 진 E wood,
    /// 손 SE wood, 리 S fire, 곤 SW earth, 태 W metal, 건 NW metal.
    pub fn element(self) -> Element {
        match self {
            Self::North => Element::Water,
            Self::NorthEast | Self::SouthWest => Element::Earth,
            Self::East | Self::SouthEast => Element::Wood,
            Self::South => Element::Fire,
            Self::West | Self::NorthWest => Element::Metal,
        }
    }

    /// The cardinal direction of an element. Earth belongs to the centre
    /// and has none.
    pub fn primary_for(element: Element) -> Option<Direction> {
        match element {
            Element::Wood => Some(Self::East),
            Element::Fire => Some(Self::South),
            Element::Metal => Some(Self::West),
            Element::Water => Some(Self::North),
            Element::Earth => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::NorthEast => "north-east",
            Self::East => "east",
            Self::SouthEast => "south-east",
            Self::South => "south",
            Self::SouthWest => "south-west",
            Self::West => "west",
            Self::NorthWest => "north-west",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::North => "북향",
            Self::NorthEast => "북동향",
            Self::East => "동향",
            Self::SouthEast => "남동향",
            Self::South => "남향",
            Self::SouthWest => "남서향",
            Self::West => "서향",
            Self::NorthWest => "북서향",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ParseError;

    /// Accepts English names and abbreviations (`south-east`, `SE`) and
    /// Korean facings with or without the 향 suffix (`남동향`, `남동`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace(['_', ' '], "-");
        let key = key.strip_suffix('향').unwrap_or(&key);
        let dir = match key {
            "n" | "north" | "북" => Self::North,
            "ne" | "north-east" | "northeast" | "북동" => Self::NorthEast,
            "e" | "east" | "동" => Self::East,
            "se" | "south-east" | "southeast" | "남동" => Self::SouthEast,
            "s" | "south" | "남" => Self::South,
            "sw" | "south-west" | "southwest" | "남서" => Self::SouthWest,
            "w" | "west" | "서" => Self::West,
            "nw" | "north-west" | "northwest" | "북서" => Self::NorthWest,
            _ => return Err(ParseError::Direction(s.to_string())),
        };
        Ok(dir)
    }
}

/// Element of a floor number by its last decimal digit:
/// 1/6 water, 2/7 fire, 3/8 wood, 4/9 metal, 0/5 earth.
pub fn floor_element(floor: i32) -> Element {
    match floor.unsigned_abs() % 10 {
        1 | 6 => Element::Water,
        2 | 7 => Element::Fire,
        3 | 8 => Element::Wood,
        4 | 9 => Element::Metal,
        _ => Element::Earth,
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyFeatures {
    pub direction: Option<Direction>,
    pub floor: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityDetails {
    pub investment: String,
    pub styling: String,
    pub location: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityReport {
    pub score: u8,
    pub comment: String,
    pub lucky_direction: Option<Direction>,
    pub details: CompatibilityDetails,
}

fn investment_style(god: TenGod) -> &'static str {
    match god {
        TenGod::Friend => "Joint ownership or co-investment with trusted partners suits you.",
        TenGod::RobWealth => {
            "Avoid shared titles; hold property in your own name and keep leverage low."
        }
        TenGod::EatingGod => "Income-producing rentals with steady tenants fit your temperament.",
        TenGod::HurtingOfficer => {
            "Value-add projects such as remodeling and flipping reward your ideas."
        }
        TenGod::IndirectWealth => {
            "Opportunistic purchases in developing districts; move fast on good deals."
        }
        TenGod::DirectWealth => "Long-term holding of a primary residence in an established area.",
        TenGod::SevenKillings => "Bold redevelopment plays can work if you set strict exit rules.",
        TenGod::DirectOfficer => {
            "Conservative, well-documented purchases such as pre-sale apartments."
        }
        TenGod::IndirectResource => {
            "Niche assets others overlook: land, studios, or unusual layouts."
        }
        TenGod::DirectResource => "Properties near schools and institutions hold value for you.",
    }
}

fn styling(element: Element) -> &'static str {
    match element {
        Element::Wood => "Add plants, wooden furniture, and green or teal accents.",
        Element::Fire => "Bring in warm lighting, red or orange accents, and south-facing light.",
        Element::Earth => "Use ceramics, stone textures, and yellow or beige tones.",
        Element::Metal => "Choose metal fixtures, white surfaces, and an uncluttered layout.",
        Element::Water => "Add a water feature, mirrors, and black or deep blue accents.",
    }
}

fn location(spirit: Spirit) -> &'static str {
    match spirit {
        Spirit::Travel => "Near transit hubs, highways, or airports where movement is easy.",
        Spirit::PeachBlossom => "Lively commercial districts with cafes and nightlife.",
        Spirit::ArtsHalo => "Quiet neighborhoods near temples, libraries, or cultural venues.",
        Spirit::Charisma => "Trendy areas with shopping streets and a strong local character.",
        Spirit::Guardian => "Established residential areas with good public services and safety.",
    }
}

/// Score a property against a chart. The score is clamped to 0..=100.
pub fn compatibility_score(
    profile: &SajuProfile,
    features: &PropertyFeatures,
) -> CompatibilityReport {
    let lacking = profile.lacking_element();
    let dominant = profile.dominant_element();
    let wealth = profile.day_master().element().controls();

    let mut score = BASE_SCORE;
    let mut comments: Vec<String> = Vec::new();

    if let Some(direction) = features.direction {
        let el = direction.element();
        if el == lacking {
            score += LACKING_DIRECTION_BONUS;
            comments.push(format!(
                "A {} facing supplies the {} your chart lacks.",
                direction.label(),
                el.label()
            ));
        } else if el.is_generated_by(dominant) {
            score += OUTFLOW_DIRECTION_BONUS;
            comments.push(format!(
                "Your strong {} flows into this {} facing; good for investment activity.",
                dominant.label(),
                direction.label()
            ));
        } else if dominant.is_generated_by(el) {
            score += SUPPORT_DIRECTION_BONUS;
            comments.push(format!(
                "The {} facing feeds your dominant {} and supports you.",
                direction.label(),
                dominant.label()
            ));
        } else {
            comments.push(format!("The {} facing is neutral for your chart.", direction.label()));
        }

        if el == wealth {
            score += WEALTH_DIRECTION_BONUS;
            comments.push("This facing sits on your wealth element.".to_string());
        }
    }

    if let Some(floor) = features.floor {
        let el = floor_element(floor);
        if el == lacking {
            score += FLOOR_BONUS;
            comments.push(format!("Floor {floor} carries the {} you need.", el.label()));
        }
    }

    if comments.is_empty() {
        comments.push("No facing or floor given; showing the baseline score.".to_string());
    }

    let score = score.clamp(SCORE_MIN, SCORE_MAX) as u8;
    let first_spirit = profile.spirits().first().unwrap_or(Spirit::Guardian);

    CompatibilityReport {
        score,
        comment: comments.join(" "),
        lucky_direction: Direction::primary_for(lacking),
        details: CompatibilityDetails {
            investment: investment_style(profile.ten_gods().day_branch).to_string(),
            styling: styling(lacking).to_string(),
            location: location(first_spirit).to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_element_by_last_digit() {
        assert_eq!(floor_element(1), Element::Water);
        assert_eq!(floor_element(16), Element::Water);
        assert_eq!(floor_element(7), Element::Fire);
        assert_eq!(floor_element(23), Element::Wood);
        assert_eq!(floor_element(9), Element::Metal);
        assert_eq!(floor_element(10), Element::Earth);
        assert_eq!(floor_element(5), Element::Earth);
        assert_eq!(floor_element(-2), Element::Fire);
    }

    #[test]
    fn test_parse_direction() {
        assert_eq!("남향".parse::<Direction>().unwrap(), Direction::South);
        assert_eq!("북동".parse::<Direction>().unwrap(), Direction::NorthEast);
        assert_eq!("SE".parse::<Direction>().unwrap(), Direction::SouthEast);
        assert_eq!("north west".parse::<Direction>().unwrap(), Direction::NorthWest);
        assert!("up".parse::<Direction>().is_err());
    }

    #[test]
    fn test_primary_direction_maps_back_to_element() {
        for e in Element::ALL {
            if let Some(d) = Direction::primary_for(e) {
                assert_eq!(d.element(), e);
            }
        }
    }

    #[test]
    fn test_every_direction_has_an_element() {
        let mut seen = Vec::new();
        for d in Direction::ALL {
            seen.push(d.element());
        }
        for e in Element::ALL {
            assert!(seen.contains(&e), "{e} has no facing");
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::profile::SajuProfile;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthAdvisory {
    pub element: Element,
    pub organ: String,
    pub advice: String,
    pub food: String,
}

/// (organ, advice, food) per element, in `Element::ALL` order.
const HEALTH_TABLE: [(&str, &str, &str); 5] = [
    (
        "Liver and gallbladder",
        "Keep a regular sleep schedule and stretch daily; tension and late nights tax the liver first.",
        "Leafy greens, sprouts, and sour flavors such as citrus and vinegar",
    ),
    (
        "Heart and small intestine",
        "Pace strenuous exercise and manage stress; watch blood pressure and circulation.",
        "Bitter greens, tomatoes, red beans, and moderate amounts of dark chocolate",
    ),
    (
        "Spleen and stomach",
        "Eat at regular hours and avoid overeating; digestion suffers most from irregular meals.",
        "Sweet root vegetables, pumpkin, millet, and warm cooked grains",
    ),
    (
        "Lungs and large intestine",
        "Protect the airways in dry or dusty weather and practice deep breathing.",
        "Pungent foods such as radish, ginger, pear, and white-fleshed vegetables",
    ),
    (
        "Kidneys and bladder",
        "Stay warm, drink enough water, and avoid chronic overwork that drains stamina.",
        "Black beans, seaweed, black sesame, and salty foods in moderation",
    ),
];

/// Advice keyed by the element the chart lacks.
pub fn health_advisory(profile: &SajuProfile) -> HealthAdvisory {
    advisory_for(profile.lacking_element())
}

pub fn advisory_for(element: Element) -> HealthAdvisory {
    let (organ, advice, food) = HEALTH_TABLE[element.index()];
    HealthAdvisory {
        element,
        organ: organ.to_string(),
        advice: advice.to_string(),
        food: food.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_water_maps_to_kidneys() {
        let a = advisory_for(Element::Water);
        assert!(a.organ.contains("Kidneys"));
        assert_eq!(a.element, Element::Water);
    }

    #[test]
    fn test_every_element_has_advice() {
        for e in Element::ALL {
            let a = advisory_for(e);
            assert!(!a.organ.is_empty() && !a.advice.is_empty() && !a.food.is_empty());
        }
    }
}

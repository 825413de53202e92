use serde::{Deserialize, Serialize};

use crate::constants::{MONTH_WEIGHT, SLOT_WEIGHT};
use crate::element::Element;
use crate::ganzhi::{FourPillars, PillarPosition};

/// Weighted occurrence count per element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementCounts {
    pub wood: f64,
    pub fire: f64,
    pub earth: f64,
    pub metal: f64,
    pub water: f64,
}

impl ElementCounts {
    pub fn get(&self, element: Element) -> f64 {
        match element {
            Element::Wood => self.wood,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Metal => self.metal,
            Element::Water => self.water,
        }
    }

    fn add(&mut self, element: Element, weight: f64) {
        let slot = match element {
            Element::Wood => &mut self.wood,
            Element::Fire => &mut self.fire,
            Element::Earth => &mut self.earth,
            Element::Metal => &mut self.metal,
            Element::Water => &mut self.water,
        };
        *slot += weight;
    }

    pub fn total(&self) -> f64 {
        Element::ALL.iter().map(|e| self.get(*e)).sum()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElementTally {
    pub counts: ElementCounts,
    pub dominant: Element,
    pub lacking: Element,
}

/// Count every stem and branch element; the month pillar's two slots
/// weigh 1.5.
pub fn tally(pillars: &FourPillars) -> ElementTally {
    let mut counts = ElementCounts::default();
    for (position, pillar) in pillars.iter() {
        let weight = if position == PillarPosition::Month {
            MONTH_WEIGHT
        } else {
            SLOT_WEIGHT
        };
        counts.add(pillar.stem.element(), weight);
        counts.add(pillar.branch.element(), weight);
    }

    ElementTally {
        counts,
        dominant: dominant(&counts),
        lacking: lacking(&counts),
    }
}

/// First element in enumeration order to reach the maximum.
fn dominant(counts: &ElementCounts) -> Element {
    let mut best = Element::ALL[0];
    for element in Element::ALL {
        if counts.get(element) > counts.get(best) {
            best = element;
        }
    }
    best
}

/// An absent element if there is one (the last absent element in
/// enumeration order), otherwise the first minimum.
fn lacking(counts: &ElementCounts) -> Element {
    let mut absent = None;
    let mut least = Element::ALL[0];
    for element in Element::ALL {
        let count = counts.get(element);
        if count == 0.0 {
            absent = Some(element);
        }
        if count < counts.get(least) {
            least = element;
        }
    }
    absent.unwrap_or(least)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ganzhi::Pillar;
    use approx::assert_relative_eq;

    fn pillars(s: &str) -> FourPillars {
        let p: Vec<Pillar> = s.split_whitespace().map(|p| p.parse().unwrap()).collect();
        FourPillars::new(p[0], p[1], p[2], p[3])
    }

    #[test]
    fn test_month_slots_weigh_more() {
        // 己卯 丙子 戊午 戊午
        let t = tally(&pillars("기묘 병자 무오 무오"));
        assert_relative_eq!(t.counts.earth, 3.0);
        assert_relative_eq!(t.counts.wood, 1.0);
        assert_relative_eq!(t.counts.fire, 1.5 + 2.0);
        assert_relative_eq!(t.counts.water, 1.5);
        assert_relative_eq!(t.counts.metal, 0.0);
        assert_relative_eq!(t.counts.total(), 9.0);
        assert_eq!(t.dominant, Element::Fire);
        assert_eq!(t.lacking, Element::Metal);
    }

    #[test]
    fn test_dominant_tie_goes_to_first_in_order() {
        // wood 1 + 1.5, fire 1 + 1.5, metal 2, water 2
        let t = tally(&pillars("병인 갑오 경신 임자"));
        assert_relative_eq!(t.counts.wood, t.counts.fire);
        assert_eq!(t.dominant, Element::Wood);
    }

    #[test]
    fn test_last_zero_wins_for_lacking() {
        // earth and metal both absent
        let t = tally(&pillars("갑인 갑자 병오 병인"));
        assert_relative_eq!(t.counts.earth, 0.0);
        assert_relative_eq!(t.counts.metal, 0.0);
        assert_eq!(t.lacking, Element::Metal);
    }

    #[test]
    fn test_lacking_falls_back_to_first_minimum() {
        // 갑자 병인 무진 경신: wood 1+1.5, fire 1.5, earth 1+1, metal 1+1, water 1
        let t = tally(&pillars("갑자 병인 무진 경신"));
        assert_relative_eq!(t.counts.wood, 2.5);
        assert_relative_eq!(t.counts.fire, 1.5);
        assert_relative_eq!(t.counts.water, 1.0);
        assert_eq!(t.lacking, Element::Water);
        assert_eq!(t.dominant, Element::Wood);
    }
}

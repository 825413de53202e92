//! Heavenly stems, earthly branches, and the pillars they form.
//!
//! Stems: 갑(0) 을(1) 병(2) 정(3) 무(4) 기(5) 경(6) 신(7) 임(8) 계(9)
//! Branches: 자(0) 축(1) 인(2) 묘(3) 진(4) 사(5) 오(6) 미(7) 신(8) 유(9) 술(10) 해(11)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};
use crate::error::ParseError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stem {
    Gap,
    Eul,
    Byeong,
    Jeong,
    Mu,
    Gi,
    Gyeong,
    Sin,
    Im,
    Gye,
}

const STEM_HANGUL: [&str; 10] = ["갑", "을", "병", "정", "무", "기", "경", "신", "임", "계"];
const STEM_HANJA: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

impl Stem {
    pub const ALL: [Stem; 10] = [
        Stem::Gap,
        Stem::Eul,
        Stem::Byeong,
        Stem::Jeong,
        Stem::Mu,
        Stem::Gi,
        Stem::Gyeong,
        Stem::Sin,
        Stem::Im,
        Stem::Gye,
    ];

    /// Stem at `index`, wrapping modulo 10.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 10]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Stems come in element pairs: 갑을 Wood, 병정 Fire, 무기 Earth, 경신 Metal, 임계 Water.
    pub fn element(self) -> Element {
        Element::ALL[self.index() / 2]
    }

    pub fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    pub fn hangul(self) -> &'static str {
        STEM_HANGUL[self.index()]
    }

    pub fn hanja(self) -> &'static str {
        STEM_HANJA[self.index()]
    }
}

impl fmt::Display for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hangul())
    }
}

impl FromStr for Stem {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        STEM_HANGUL
            .iter()
            .zip(STEM_HANJA.iter())
            .position(|(h, c)| *h == s || *c == s)
            .map(Self::from_index)
            .ok_or_else(|| ParseError::Stem(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Branch {
    Ja,
    Chuk,
    In,
    Myo,
    Jin,
    Sa,
    O,
    Mi,
    Sin,
    Yu,
    Sul,
    Hae,
}

const BRANCH_HANGUL: [&str; 12] = [
    "자", "축", "인", "묘", "진", "사", "오", "미", "신", "유", "술", "해",
];
const BRANCH_HANJA: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

const BRANCH_ELEMENTS: [Element; 12] = [
    Element::Water, // 자
    Element::Earth, // 축
    Element::Wood,  // 인
    Element::Wood,  // 묘
    Element::Earth, // 진
    Element::Fire,  // 사
    Element::Fire,  // 오
    Element::Earth, // 미
    Element::Metal, // 신
    Element::Metal, // 유
    Element::Earth, // 술
    Element::Water, // 해
];

const BRANCH_GROUPS: [TripletGroup; 12] = [
    TripletGroup::Water, // 자
    TripletGroup::Metal, // 축
    TripletGroup::Fire,  // 인
    TripletGroup::Wood,  // 묘
    TripletGroup::Water, // 진
    TripletGroup::Metal, // 사
    TripletGroup::Fire,  // 오
    TripletGroup::Wood,  // 미
    TripletGroup::Water, // 신
    TripletGroup::Metal, // 유
    TripletGroup::Fire,  // 술
    TripletGroup::Wood,  // 해
];

impl Branch {
    pub const ALL: [Branch; 12] = [
        Branch::Ja,
        Branch::Chuk,
        Branch::In,
        Branch::Myo,
        Branch::Jin,
        Branch::Sa,
        Branch::O,
        Branch::Mi,
        Branch::Sin,
        Branch::Yu,
        Branch::Sul,
        Branch::Hae,
    ];

    /// Branch at `index`, wrapping modulo 12.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 12]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn element(self) -> Element {
        BRANCH_ELEMENTS[self.index()]
    }

    /// Index parity, not the hidden-stem polarity. Traditional theory
    /// splits 자/오/사/해 into substance vs. function; this engine does not.
    pub fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    pub fn triplet_group(self) -> TripletGroup {
        BRANCH_GROUPS[self.index()]
    }

    pub fn hangul(self) -> &'static str {
        BRANCH_HANGUL[self.index()]
    }

    pub fn hanja(self) -> &'static str {
        BRANCH_HANJA[self.index()]
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hangul())
    }
}

impl FromStr for Branch {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        BRANCH_HANGUL
            .iter()
            .zip(BRANCH_HANJA.iter())
            .position(|(h, c)| *h == s || *c == s)
            .map(Self::from_index)
            .ok_or_else(|| ParseError::Branch(s.to_string()))
    }
}

/// The four three-branch frames (삼합). Used only for spirit detection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripletGroup {
    /// 신자진
    Water,
    /// 인오술
    Fire,
    /// 사유축
    Metal,
    /// 해묘미
    Wood,
}

impl TripletGroup {
    pub const ALL: [TripletGroup; 4] = [
        TripletGroup::Water,
        TripletGroup::Fire,
        TripletGroup::Metal,
        TripletGroup::Wood,
    ];

    pub fn members(self) -> [Branch; 3] {
        match self {
            Self::Water => [Branch::Sin, Branch::Ja, Branch::Jin],
            Self::Fire => [Branch::In, Branch::O, Branch::Sul],
            Self::Metal => [Branch::Sa, Branch::Yu, Branch::Chuk],
            Self::Wood => [Branch::Hae, Branch::Myo, Branch::Mi],
        }
    }
}

/// A (stem, branch) pair for one calendar position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    pub fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Pillar at position `n` of the sixty-term cycle (0 = 갑자).
    pub fn from_cycle(n: usize) -> Self {
        Self::new(Stem::from_index(n), Branch::from_index(n))
    }

    pub fn hanja(self) -> String {
        format!("{}{}", self.stem.hanja(), self.branch.hanja())
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

impl FromStr for Pillar {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(a), Some(b), None) => {
                let stem = a.to_string().parse()?;
                let branch = b.to_string().parse()?;
                Ok(Self::new(stem, branch))
            }
            _ => Err(ParseError::Pillar(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

impl PillarPosition {
    pub const ALL: [PillarPosition; 4] = [
        PillarPosition::Year,
        PillarPosition::Month,
        PillarPosition::Day,
        PillarPosition::Hour,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Year => "년주",
            Self::Month => "월주",
            Self::Day => "일주",
            Self::Hour => "시주",
        }
    }
}

/// Year, month, day and hour pillars. The hour pillar is always present.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl FourPillars {
    pub fn new(year: Pillar, month: Pillar, day: Pillar, hour: Pillar) -> Self {
        Self {
            year,
            month,
            day,
            hour,
        }
    }

    /// The day stem: reference point for every relational derivation.
    pub fn day_master(&self) -> Stem {
        self.day.stem
    }

    pub fn get(&self, position: PillarPosition) -> Pillar {
        match position {
            PillarPosition::Year => self.year,
            PillarPosition::Month => self.month,
            PillarPosition::Day => self.day,
            PillarPosition::Hour => self.hour,
        }
    }

    /// Pillars in year, month, day, hour order.
    pub fn iter(&self) -> impl Iterator<Item = (PillarPosition, Pillar)> + '_ {
        PillarPosition::ALL.into_iter().map(|p| (p, self.get(p)))
    }
}

impl fmt::Display for FourPillars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stem_elements_pair_up() {
        assert_eq!(Stem::Gap.element(), Element::Wood);
        assert_eq!(Stem::Eul.element(), Element::Wood);
        assert_eq!(Stem::Mu.element(), Element::Earth);
        assert_eq!(Stem::Gi.element(), Element::Earth);
        assert_eq!(Stem::Gye.element(), Element::Water);
    }

    #[test]
    fn test_stem_polarity_alternates() {
        assert_eq!(Stem::Gap.polarity(), Polarity::Yang);
        assert_eq!(Stem::Eul.polarity(), Polarity::Yin);
        assert_eq!(Stem::Im.polarity(), Polarity::Yang);
    }

    #[test]
    fn test_branch_polarity_uses_index_parity() {
        // 사 is Yin by index even though it is Yang in function
        assert_eq!(Branch::Sa.polarity(), Polarity::Yin);
        assert_eq!(Branch::O.polarity(), Polarity::Yang);
        assert_eq!(Branch::Hae.polarity(), Polarity::Yin);
    }

    #[test]
    fn test_triplet_groups_partition_branches() {
        let mut count = [0usize; 12];
        for group in TripletGroup::ALL {
            for b in group.members() {
                assert_eq!(b.triplet_group(), group);
                count[b.index()] += 1;
            }
        }
        assert!(count.iter().all(|c| *c == 1));
    }

    #[test]
    fn test_from_cycle_wraps() {
        assert_eq!(Pillar::from_cycle(0), Pillar::new(Stem::Gap, Branch::Ja));
        assert_eq!(Pillar::from_cycle(54), Pillar::new(Stem::Mu, Branch::O));
        assert_eq!(Pillar::from_cycle(59), Pillar::new(Stem::Gye, Branch::Hae));
        assert_eq!(Pillar::from_cycle(60), Pillar::from_cycle(0));
    }

    #[test]
    fn test_parse_hangul_and_hanja() {
        assert_eq!("갑".parse::<Stem>().unwrap(), Stem::Gap);
        assert_eq!("癸".parse::<Stem>().unwrap(), Stem::Gye);
        assert_eq!("亥".parse::<Branch>().unwrap(), Branch::Hae);
        assert_eq!(
            "戊午".parse::<Pillar>().unwrap(),
            Pillar::new(Stem::Mu, Branch::O)
        );
        assert_eq!(
            "병자".parse::<Pillar>().unwrap(),
            Pillar::new(Stem::Byeong, Branch::Ja)
        );
        assert!("X".parse::<Stem>().is_err());
        assert!("갑자축".parse::<Pillar>().is_err());
    }

    #[test]
    fn test_display() {
        let p = Pillar::new(Stem::Gap, Branch::Jin);
        assert_eq!(p.to_string(), "갑진");
        assert_eq!(p.hanja(), "甲辰");
    }
}

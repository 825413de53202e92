//! Twelve life stages (십이운성) of a branch relative to the Day Master.

use serde::{Deserialize, Serialize};

use crate::ganzhi::{Branch, Stem};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TwelveStage {
    Birth,
    Bath,
    Crown,
    Office,
    Peak,
    Decline,
    Sickness,
    Death,
    Tomb,
    Severance,
    Womb,
    Nurture,
}

impl TwelveStage {
    pub fn label(self) -> &'static str {
        match self {
            Self::Birth => "장생",
            Self::Bath => "목욕",
            Self::Crown => "관대",
            Self::Office => "건록",
            Self::Peak => "제왕",
            Self::Decline => "쇠",
            Self::Sickness => "병",
            Self::Death => "사",
            Self::Tomb => "묘",
            Self::Severance => "절",
            Self::Womb => "태",
            Self::Nurture => "양",
        }
    }
}

impl std::fmt::Display for TwelveStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

use TwelveStage::{
    Bath, Birth, Crown, Death, Decline, Nurture, Office, Peak, Severance, Sickness, Tomb, Womb,
};

const GAP: [TwelveStage; 12] = [
    Bath, Crown, Office, Peak, Decline, Sickness, Death, Tomb, Severance, Womb, Nurture, Birth,
];
const EUL: [TwelveStage; 12] = [
    Sickness, Decline, Peak, Office, Crown, Bath, Birth, Nurture, Womb, Severance, Tomb, Death,
];
const BYEONG: [TwelveStage; 12] = [
    Womb, Nurture, Birth, Bath, Crown, Office, Peak, Decline, Sickness, Death, Tomb, Severance,
];
const JEONG: [TwelveStage; 12] = [
    Severance, Tomb, Death, Sickness, Decline, Peak, Office, Crown, Bath, Birth, Nurture, Womb,
];
const GYEONG: [TwelveStage; 12] = [
    Death, Tomb, Severance, Womb, Nurture, Birth, Bath, Crown, Office, Peak, Decline, Sickness,
];
const SIN: [TwelveStage; 12] = [
    Birth, Nurture, Womb, Severance, Tomb, Death, Sickness, Decline, Peak, Office, Crown, Bath,
];
const IM: [TwelveStage; 12] = [
    Peak, Decline, Sickness, Death, Tomb, Severance, Womb, Nurture, Birth, Bath, Crown, Office,
];
const GYE: [TwelveStage; 12] = [
    Office, Crown, Bath, Birth, Nurture, Womb, Severance, Tomb, Death, Sickness, Decline, Peak,
];

/// Rows indexed by stem, columns by branch (자 first). 무 and 기 share the
/// rows of 병 and 정 (화토동법).
const STAGE_TABLE: [[TwelveStage; 12]; 10] = [
    GAP, EUL, BYEONG, JEONG, BYEONG, JEONG, GYEONG, SIN, IM, GYE,
];

pub fn locate(day_master: Stem, branch: Branch) -> TwelveStage {
    STAGE_TABLE[day_master.index()][branch.index()]
}

//! Spirit markers (신살) from triplet-group coincidences and the direct
//! stem → branch charisma lookup.

use serde::{Deserialize, Serialize};

use crate::ganzhi::{Branch, Stem, TripletGroup};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Spirit {
    /// 역마살
    Travel,
    /// 도화살
    PeachBlossom,
    /// 화개살
    ArtsHalo,
    /// 홍염살
    Charisma,
    /// 천을귀인. Never detected; the location-advice fallback key.
    Guardian,
}

impl Spirit {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Travel => "travel",
            Self::PeachBlossom => "peach-blossom",
            Self::ArtsHalo => "arts-halo",
            Self::Charisma => "charisma",
            Self::Guardian => "guardian",
        }
    }

    /// Korean name with the parenthetical sub-label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Travel => "역마살(驛馬)",
            Self::PeachBlossom => "도화살(桃花)",
            Self::ArtsHalo => "화개살(華蓋)",
            Self::Charisma => "홍염살(紅艶)",
            Self::Guardian => "천을귀인(天乙貴人)",
        }
    }

    /// Result branch of a triplet-group marker, or `None` for the markers
    /// that do not come from triplet groups.
    pub fn result_branch(self, group: TripletGroup) -> Option<Branch> {
        let branch = match (self, group) {
            (Self::Travel, TripletGroup::Water) => Branch::In,
            (Self::Travel, TripletGroup::Fire) => Branch::Sin,
            (Self::Travel, TripletGroup::Metal) => Branch::Hae,
            (Self::Travel, TripletGroup::Wood) => Branch::Sa,
            (Self::PeachBlossom, TripletGroup::Water) => Branch::Yu,
            (Self::PeachBlossom, TripletGroup::Fire) => Branch::Myo,
            (Self::PeachBlossom, TripletGroup::Metal) => Branch::O,
            (Self::PeachBlossom, TripletGroup::Wood) => Branch::Ja,
            (Self::ArtsHalo, TripletGroup::Water) => Branch::Jin,
            (Self::ArtsHalo, TripletGroup::Fire) => Branch::Sul,
            (Self::ArtsHalo, TripletGroup::Metal) => Branch::Chuk,
            (Self::ArtsHalo, TripletGroup::Wood) => Branch::Mi,
            (Self::Charisma | Self::Guardian, _) => return None,
        };
        Some(branch)
    }
}

impl std::fmt::Display for Spirit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Markers tested against the day branch's triplet group, in emit order.
const TRIPLET_SPIRITS: [Spirit; 3] = [Spirit::Travel, Spirit::PeachBlossom, Spirit::ArtsHalo];

/// 홍염살 branch per day stem: 갑을-오, 병-인, 정-미, 무기-진, 경-술, 신-유, 임-자, 계-신.
const CHARISMA_BRANCH: [Branch; 10] = [
    Branch::O,
    Branch::O,
    Branch::In,
    Branch::Mi,
    Branch::Jin,
    Branch::Jin,
    Branch::Sul,
    Branch::Yu,
    Branch::Ja,
    Branch::Sin,
];

/// Triplet-group markers that `other` triggers against `day_branch`.
pub fn detect(day_branch: Branch, other: Branch) -> Vec<Spirit> {
    let group = day_branch.triplet_group();
    TRIPLET_SPIRITS
        .into_iter()
        .filter(|spirit| spirit.result_branch(group) == Some(other))
        .collect()
}

pub fn detect_charisma(day_stem: Stem, other: Branch) -> Option<Spirit> {
    (CHARISMA_BRANCH[day_stem.index()] == other).then_some(Spirit::Charisma)
}

/// Ordered, first-seen-wins spirit list. Order is meaningful: the first
/// entry drives location advice.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpiritList(Vec<Spirit>);

impl SpiritList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, spirit: Spirit) {
        if !self.0.contains(&spirit) {
            self.0.push(spirit);
        }
    }

    pub fn extend(&mut self, spirits: impl IntoIterator<Item = Spirit>) {
        for spirit in spirits {
            self.push(spirit);
        }
    }

    pub fn first(&self) -> Option<Spirit> {
        self.0.first().copied()
    }

    pub fn as_slice(&self) -> &[Spirit] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, spirit: Spirit) -> bool {
        self.0.contains(&spirit)
    }
}

impl FromIterator<Spirit> for SpiritList {
    fn from_iter<I: IntoIterator<Item = Spirit>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

/// Scan `branches` in order, then the day branch against itself, and
/// collect every marker found.
pub fn collect_spirits(day_stem: Stem, day_branch: Branch, branches: &[Branch]) -> SpiritList {
    let mut spirits = SpiritList::new();
    for &branch in branches.iter().chain(std::iter::once(&day_branch)) {
        spirits.extend(detect(day_branch, branch));
        spirits.extend(detect_charisma(day_stem, branch));
    }
    spirits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_travel_for_water_frame() {
        assert_eq!(detect(Branch::Ja, Branch::In), vec![Spirit::Travel]);
        assert_eq!(detect(Branch::Sin, Branch::In), vec![Spirit::Travel]);
        assert!(detect(Branch::Ja, Branch::Sin).is_empty());
    }

    #[test]
    fn test_peach_blossom_and_arts_halo() {
        assert_eq!(detect(Branch::O, Branch::Myo), vec![Spirit::PeachBlossom]);
        assert_eq!(detect(Branch::Yu, Branch::O), vec![Spirit::PeachBlossom]);
        assert_eq!(detect(Branch::Hae, Branch::Mi), vec![Spirit::ArtsHalo]);
        // 진 is its own frame's arts-halo branch
        assert_eq!(detect(Branch::Jin, Branch::Jin), vec![Spirit::ArtsHalo]);
    }

    #[test]
    fn test_charisma_lookup() {
        assert_eq!(detect_charisma(Stem::Gap, Branch::O), Some(Spirit::Charisma));
        assert_eq!(detect_charisma(Stem::Gye, Branch::Sin), Some(Spirit::Charisma));
        assert_eq!(detect_charisma(Stem::Gye, Branch::Ja), None);
    }

    #[test]
    fn test_non_triplet_markers_have_no_result_branch() {
        for group in TripletGroup::ALL {
            assert_eq!(Spirit::Charisma.result_branch(group), None);
            assert_eq!(Spirit::Guardian.result_branch(group), None);
        }
    }

    #[test]
    fn test_spirit_list_dedupes_in_first_seen_order() {
        let list: SpiritList = [
            Spirit::PeachBlossom,
            Spirit::Travel,
            Spirit::PeachBlossom,
            Spirit::Charisma,
        ]
        .into_iter()
        .collect();
        assert_eq!(
            list.as_slice(),
            &[Spirit::PeachBlossom, Spirit::Travel, Spirit::Charisma]
        );
        assert_eq!(list.first(), Some(Spirit::PeachBlossom));
    }

    #[test]
    fn test_collect_spirits_checks_day_branch_against_itself() {
        // 무진 day: 진 is the water frame's arts-halo; 무 charisma is also 진
        let spirits = collect_spirits(Stem::Mu, Branch::Jin, &[]);
        assert_eq!(spirits.as_slice(), &[Spirit::ArtsHalo, Spirit::Charisma]);
    }

    #[test]
    fn test_collect_spirits_scans_in_order() {
        // 갑자 day: year 유 (peach blossom), month 인 (travel), hour 오 (charisma)
        let spirits = collect_spirits(
            Stem::Gap,
            Branch::Ja,
            &[Branch::Yu, Branch::In, Branch::Ja, Branch::O],
        );
        assert_eq!(
            spirits.as_slice(),
            &[Spirit::PeachBlossom, Spirit::Travel, Spirit::Charisma]
        );
    }
}

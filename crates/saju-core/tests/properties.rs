//! Property tests over the classification tables and the scoring rules.

use proptest::prelude::*;
use proptest::test_runner::Config;
use saju_core::{
    AssembleOptions, BirthInput, Branch, CalendarAdapter, CalendarError, CivilDate, Direction,
    Element, FourPillars, LabeledStem, LunarDate, Pillar, PropertyFeatures, RelationFamily, Stem,
    TenGod, TripletGroup, assemble, classify, compatibility_score, detect, locate, tally,
};

struct Fixed(FourPillars);

impl CalendarAdapter for Fixed {
    fn pillars_for(&self, _date: CivilDate, _hour: u8, _minute: u8) -> FourPillars {
        self.0
    }

    fn lunar_to_solar(&self, lunar: LunarDate) -> Result<CivilDate, CalendarError> {
        Err(CalendarError::OutOfRange(lunar.year))
    }

    fn stem_of_date(&self, _date: CivilDate) -> LabeledStem {
        LabeledStem {
            stem: self.0.day.stem,
            label: "day".into(),
        }
    }

    fn stem_of_month(&self, _date: CivilDate) -> LabeledStem {
        LabeledStem {
            stem: self.0.month.stem,
            label: "month".into(),
        }
    }

    fn stem_of_year(&self, _date: CivilDate) -> LabeledStem {
        LabeledStem {
            stem: self.0.year.stem,
            label: "year".into(),
        }
    }
}

fn stem() -> impl Strategy<Value = Stem> {
    (0usize..10).prop_map(Stem::from_index)
}

fn branch() -> impl Strategy<Value = Branch> {
    (0usize..12).prop_map(Branch::from_index)
}

fn pillar() -> impl Strategy<Value = Pillar> {
    (0usize..60).prop_map(Pillar::from_cycle)
}

fn four_pillars() -> impl Strategy<Value = FourPillars> {
    (pillar(), pillar(), pillar(), pillar()).prop_map(|(y, m, d, h)| FourPillars::new(y, m, d, h))
}

fn direction() -> impl Strategy<Value = Option<Direction>> {
    prop::option::of((0usize..8).prop_map(|i| Direction::ALL[i]))
}

fn birth() -> BirthInput {
    BirthInput::parse("1990-05-15", Some("08:30"), false).unwrap()
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn ten_god_depends_only_on_relation_and_polarity(
        a in stem(),
        b in stem(),
        c in stem(),
        d in stem(),
    ) {
        let same = |x: Stem, y: Stem| x.polarity() == y.polarity();
        let rel_ab = RelationFamily::between(a.element(), b.element());
        let rel_cd = RelationFamily::between(c.element(), d.element());
        if rel_ab == rel_cd && same(a, b) == same(c, d) {
            prop_assert_eq!(classify(a, b), classify(c, d));
        }
    }

    #[test]
    fn ten_god_polarity_splits_each_family(a in stem(), b in stem()) {
        let god = classify(a, b);
        let family = RelationFamily::between(a.element(), b.element());
        prop_assert_eq!(Some(god.family()), family);
        let same = a.polarity() == b.polarity();
        prop_assert_eq!(TenGod::from_relation(god.family(), same), god);
    }

    #[test]
    fn branch_and_stem_share_classification(day in stem(), target in branch()) {
        let as_stem = Stem::ALL
            .into_iter()
            .find(|s| s.element() == target.element() && s.polarity() == target.polarity());
        if let Some(s) = as_stem {
            prop_assert_eq!(classify(day, target), classify(day, s));
        }
    }

    #[test]
    fn earth_stems_follow_fire_rows(b in branch()) {
        prop_assert_eq!(locate(Stem::Mu, b), locate(Stem::Byeong, b));
        prop_assert_eq!(locate(Stem::Gi, b), locate(Stem::Jeong, b));
    }

    #[test]
    fn spirits_are_symmetric_within_a_group(day in branch(), other in branch()) {
        let group = day.triplet_group();
        for peer in group.members() {
            prop_assert_eq!(detect(peer, other), detect(day, other));
        }
    }

    #[test]
    fn tally_totals_nine(p in four_pillars()) {
        let t = tally(&p);
        prop_assert!((t.counts.total() - 9.0).abs() < 1e-9);
        prop_assert!(t.counts.get(t.dominant) >= t.counts.get(t.lacking));
        for e in Element::ALL {
            prop_assert!(t.counts.get(e) <= t.counts.get(t.dominant));
        }
    }

    #[test]
    fn score_stays_in_range(
        p in four_pillars(),
        dir in direction(),
        floor in prop::option::of(-5i32..200),
    ) {
        let profile = assemble(&Fixed(p), &birth(), &AssembleOptions::default());
        let features = PropertyFeatures {
            direction: dir,
            floor,
        };
        let report = compatibility_score(&profile, &features);
        prop_assert!(report.score <= 100);
        prop_assert!(!report.comment.is_empty());
        prop_assert!(!report.details.location.is_empty());
    }

    #[test]
    fn assemble_is_deterministic(p in four_pillars()) {
        let cal = Fixed(p);
        let a = assemble(&cal, &birth(), &AssembleOptions::default());
        let b = assemble(&cal, &birth(), &AssembleOptions::default());
        prop_assert_eq!(a, b);
    }
}

#[test]
fn triplet_groups_partition_branches() {
    let mut seen: Vec<Branch> = TripletGroup::ALL.iter().flat_map(|g| g.members()).collect();
    seen.sort_by_key(|b| b.index());
    assert_eq!(seen, Branch::ALL.to_vec());
}

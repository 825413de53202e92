//! Daily, monthly and yearly fortunes: the period's stem classified against
//! the Day Master, then looked up by the Ten-God's core term.

use serde::{Deserialize, Serialize};

use crate::calendar::{CalendarAdapter, LabeledStem};
use crate::profile::SajuProfile;
use crate::ten_god::{TenGod, classify};
use crate::time::CivilDate;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FortunePeriod {
    Daily,
    Monthly,
    Yearly,
}

impl FortunePeriod {
    pub fn from_str_lossy(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "daily" | "day" | "today" => Some(Self::Daily),
            "monthly" | "month" => Some(Self::Monthly),
            "yearly" | "year" => Some(Self::Yearly),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fortune {
    pub period: FortunePeriod,
    /// Calendar label of the period, e.g. `2024년 (갑진년)`.
    pub date: String,
    pub score: u8,
    pub title: String,
    pub content: String,
    pub ten_god: TenGod,
}

struct FortuneText {
    core_term: &'static str,
    score: u8,
    title: &'static str,
    content: &'static str,
}

static FORTUNE_TABLE: [FortuneText; 10] = [
    FortuneText {
        core_term: "비견",
        score: 70,
        title: "Standing shoulder to shoulder",
        content: "Peers and partners carry weight now. Cooperate rather than compete, and keep shared money clearly accounted for.",
    },
    FortuneText {
        core_term: "겁재",
        score: 60,
        title: "Guard what you hold",
        content: "Competition for resources runs high. Avoid lending or co-signing, and double-check agreements before committing.",
    },
    FortuneText {
        core_term: "식신",
        score: 85,
        title: "Easy abundance",
        content: "Creativity and appetite are rewarded. A good time to enjoy what you make and to share it generously.",
    },
    FortuneText {
        core_term: "상관",
        score: 65,
        title: "Sharp words, bright ideas",
        content: "Talent shows, but so does impatience. Express ideas freely while watching your tone with superiors.",
    },
    FortuneText {
        core_term: "편재",
        score: 80,
        title: "Windfall in motion",
        content: "Opportunities for irregular income appear. Move quickly but size every bet so a miss does not hurt.",
    },
    FortuneText {
        core_term: "정재",
        score: 90,
        title: "Steady gains",
        content: "Diligent effort converts into reliable income. Favor careful saving and long-term commitments.",
    },
    FortuneText {
        core_term: "편관",
        score: 55,
        title: "Pressure from outside",
        content: "Demands and obstacles test your resolve. Stay disciplined, rest enough, and do not force confrontations.",
    },
    FortuneText {
        core_term: "정관",
        score: 85,
        title: "Recognition and order",
        content: "Structure works in your favor. Promotions, contracts and formal recognition are well supported.",
    },
    FortuneText {
        core_term: "편인",
        score: 70,
        title: "Quiet insight",
        content: "Intuition and unconventional study pay off. Spend time alone with a problem before sharing conclusions.",
    },
    FortuneText {
        core_term: "정인",
        score: 88,
        title: "Support arrives",
        content: "Mentors, documents and learning all help. A good period for certificates, paperwork and asking for advice.",
    },
];

fn describe(god: TenGod) -> &'static FortuneText {
    let term = god.core_term();
    match FORTUNE_TABLE.iter().find(|t| t.core_term == term) {
        Some(text) => text,
        None => {
            debug_assert!(false, "no fortune text for {term}");
            &FORTUNE_TABLE[0]
        }
    }
}

fn read(profile: &SajuProfile, period: FortunePeriod, stem: LabeledStem) -> Fortune {
    let ten_god = classify(profile.day_master(), stem.stem);
    let text = describe(ten_god);
    Fortune {
        period,
        date: stem.label,
        score: text.score,
        title: text.title.to_string(),
        content: text.content.to_string(),
        ten_god,
    }
}

pub fn fortune(
    profile: &SajuProfile,
    calendar: &impl CalendarAdapter,
    period: FortunePeriod,
    on: CivilDate,
) -> Fortune {
    let stem = match period {
        FortunePeriod::Daily => calendar.stem_of_date(on),
        FortunePeriod::Monthly => calendar.stem_of_month(on),
        FortunePeriod::Yearly => calendar.stem_of_year(on),
    };
    read(profile, period, stem)
}

pub fn daily_fortune(
    profile: &SajuProfile,
    calendar: &impl CalendarAdapter,
    on: CivilDate,
) -> Fortune {
    fortune(profile, calendar, FortunePeriod::Daily, on)
}

pub fn monthly_fortune(
    profile: &SajuProfile,
    calendar: &impl CalendarAdapter,
    on: CivilDate,
) -> Fortune {
    fortune(profile, calendar, FortunePeriod::Monthly, on)
}

pub fn yearly_fortune(
    profile: &SajuProfile,
    calendar: &impl CalendarAdapter,
    on: CivilDate,
) -> Fortune {
    fortune(profile, calendar, FortunePeriod::Yearly, on)
}

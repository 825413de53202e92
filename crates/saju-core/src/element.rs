use serde::{Deserialize, Serialize};

/// The five elements in their fixed enumeration order.
///
/// Enumeration order matters: tie-breaks in the element tally scan
/// `Element::ALL` front to back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl Element {
    pub const ALL: [Element; 5] = [
        Element::Wood,
        Element::Fire,
        Element::Earth,
        Element::Metal,
        Element::Water,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Wood => "wood",
            Self::Fire => "fire",
            Self::Earth => "earth",
            Self::Metal => "metal",
            Self::Water => "water",
        }
    }

    /// Korean label with hanja, e.g. `목(木)`.
    pub fn label(self) -> &'static str {
        match self {
            Self::Wood => "목(木)",
            Self::Fire => "화(火)",
            Self::Earth => "토(土)",
            Self::Metal => "금(金)",
            Self::Water => "수(水)",
        }
    }

    /// Generation cycle: Wood → Fire → Earth → Metal → Water → Wood.
    pub fn generates(self) -> Element {
        Self::ALL[(self.index() + 1) % 5]
    }

    /// Control cycle, skipping one step: Wood → Earth → Water → Fire → Metal → Wood.
    pub fn controls(self) -> Element {
        Self::ALL[(self.index() + 2) % 5]
    }

    pub fn is_generated_by(self, other: Element) -> bool {
        other.generates() == self
    }

}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Yin-yang polarity. Stems and branches alike take polarity from index
/// parity: even indices are Yang.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    pub fn from_index(index: usize) -> Self {
        if index % 2 == 0 { Self::Yang } else { Self::Yin }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Yang => "양(陽)",
            Self::Yin => "음(陰)",
        }
    }
}

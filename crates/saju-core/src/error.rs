use std::fmt;

/// Rejections raised at the input boundary: dates, birth times, symbols,
/// and property directions that fail to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Date(String),
    Time(String),
    Stem(String),
    Branch(String),
    Pillar(String),
    Direction(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Date(s) => write!(f, "invalid date '{s}' (expected YYYY-MM-DD)"),
            ParseError::Time(s) => write!(f, "invalid birth time '{s}' (expected HH:MM)"),
            ParseError::Stem(s) => write!(f, "unknown heavenly stem '{s}'"),
            ParseError::Branch(s) => write!(f, "unknown earthly branch '{s}'"),
            ParseError::Pillar(s) => write!(f, "invalid pillar '{s}' (expected stem + branch)"),
            ParseError::Direction(s) => write!(f, "unknown compass direction '{s}'"),
        }
    }
}

impl std::error::Error for ParseError {}

// Card position - which of several same-bookmaker cards to scope to

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Disambiguates between offer cards that share a bookmaker identifier.
///
/// Parsing accepts `first`, `last`, `eq:<n>` and a bare non-negative index.
/// Anything else is rejected at the call boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CardPosition {
    /// First matching card
    #[default]
    First,
    /// Last matching card
    Last,
    /// Matching card at this 0-based index
    Index(u32),
}

impl FromStr for CardPosition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        match trimmed {
            "first" => return Ok(CardPosition::First),
            "last" => return Ok(CardPosition::Last),
            _ => {}
        }

        let index = trimmed.strip_prefix("eq:").unwrap_or(trimmed);
        index
            .parse::<u32>()
            .map(CardPosition::Index)
            .map_err(|_| Error::InvalidPosition(s.to_string()))
    }
}

impl From<u32> for CardPosition {
    fn from(index: u32) -> Self {
        CardPosition::Index(index)
    }
}

impl fmt::Display for CardPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardPosition::First => f.write_str("first"),
            CardPosition::Last => f.write_str("last"),
            CardPosition::Index(index) => write!(f, "eq:{}", index),
        }
    }
}

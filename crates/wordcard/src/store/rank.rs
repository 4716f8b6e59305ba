//! 1-based record ranks.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordcardError};

/// Position of a record in the corpus, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Rank(u32);

impl Rank {
    /// The first record.
    pub const FIRST: Rank = Rank(1);

    /// Create a rank. Zero is rejected.
    pub fn new(value: u32) -> Result<Self> {
        if value == 0 {
            return Err(WordcardError::InvalidRank(
                "ranks start at 1".to_string(),
            ));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Zero-based position in a sequence of records.
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// The previous rank, if any.
    pub fn previous(self) -> Option<Rank> {
        (self.0 >= 2).then(|| Rank(self.0 - 1))
    }

    /// The next rank within a corpus of `total` records, if any.
    pub fn next(self, total: usize) -> Option<Rank> {
        ((self.0 as usize) < total).then(|| Rank(self.0 + 1))
    }
}

impl TryFrom<u32> for Rank {
    type Error = WordcardError;

    fn try_from(value: u32) -> Result<Self> {
        Rank::new(value)
    }
}

impl From<Rank> for u32 {
    fn from(rank: Rank) -> Self {
        rank.0
    }
}

impl FromStr for Rank {
    type Err = WordcardError;

    fn from_str(s: &str) -> Result<Self> {
        let value: u32 = s
            .trim()
            .parse()
            .map_err(|_| WordcardError::InvalidRank(format!("'{}' is not a rank", s)))?;
        Rank::new(value)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_invalid() {
        assert!(Rank::new(0).is_err());
        assert!("0".parse::<Rank>().is_err());
        assert!("abc".parse::<Rank>().is_err());
        assert_eq!("12".parse::<Rank>().unwrap().get(), 12);
    }

    #[test]
    fn test_neighbors() {
        let first = Rank::FIRST;
        assert_eq!(first.previous(), None);
        assert_eq!(first.next(3), Some(Rank(2)));

        let last = Rank::new(3).unwrap();
        assert_eq!(last.previous(), Some(Rank(2)));
        assert_eq!(last.next(3), None);
    }

    #[test]
    fn test_index() {
        assert_eq!(Rank::FIRST.index(), 0);
        assert_eq!(Rank::new(10).unwrap().index(), 9);
    }

    #[test]
    fn test_serde() {
        assert_eq!(serde_json::to_string(&Rank(5)).unwrap(), "5");
        assert!(serde_json::from_str::<Rank>("0").is_err());
    }
}

//! # Item Grades
//!
//! The two axes every crafting formula is keyed by:
//!
//! - [`Tier`]: coarse material grade, `T1` through `T8`
//! - [`Level`]: enchantment refinement within a tier, `Level0` through `Level3`
//!
//! plus [`ArtifactRank`], the 1-4 rank carried by artifact favor tokens.
//!
//! Raw integers coming from the host are converted with `TryFrom<u8>`. Values
//! that have no variant are rejected at that boundary; every variant that
//! exists is accepted by the formula tables, which resolve the pairs they do
//! not define to a neutral default.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A raw grade value had no matching variant.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeError {
    /// Tier outside `1..=8`.
    #[error("invalid tier: {0}")]
    InvalidTier(u8),
    /// Level outside `0..=3`.
    #[error("invalid enchantment level: {0}")]
    InvalidLevel(u8),
    /// Artifact rank outside `1..=4`.
    #[error("invalid artifact rank: {0}")]
    InvalidRank(u8),
}

// ===========================================================================
// Tier
// ===========================================================================

/// Material tier of an item.
///
/// `T1` exists in the game but has no crafting formulas; every table returns
/// its default for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Tier {
    /// Beginner's.
    T1 = 1,
    /// Novice's.
    T2 = 2,
    /// Journeyman's.
    T3 = 3,
    /// Adept's.
    T4 = 4,
    /// Expert's.
    T5 = 5,
    /// Master's.
    T6 = 6,
    /// Grandmaster's.
    T7 = 7,
    /// Elder's.
    T8 = 8,
}

impl Tier {
    /// All tiers in ascending order.
    pub const ALL: [Self; 8] = [
        Self::T1,
        Self::T2,
        Self::T3,
        Self::T4,
        Self::T5,
        Self::T6,
        Self::T7,
        Self::T8,
    ];

    /// Converts from the tier number.
    #[inline]
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::T1),
            2 => Some(Self::T2),
            3 => Some(Self::T3),
            4 => Some(Self::T4),
            5 => Some(Self::T5),
            6 => Some(Self::T6),
            7 => Some(Self::T7),
            8 => Some(Self::T8),
            _ => None,
        }
    }

    /// The tier number (`T4` -> 4).
    #[inline]
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Parses the `T<n>` prefix used by item unique names (`"T6_ARTEFACT..."`).
    ///
    /// Only the first two characters are inspected.
    #[must_use]
    pub fn from_prefix(unique_name: &str) -> Option<Self> {
        let mut chars = unique_name.chars();
        if chars.next()? != 'T' {
            return None;
        }
        let digit = chars.next()?.to_digit(10)?;
        u8::try_from(digit).ok().and_then(Self::from_u8)
    }
}

impl TryFrom<u8> for Tier {
    type Error = GradeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_u8(value).ok_or(GradeError::InvalidTier(value))
    }
}

impl From<Tier> for u8 {
    fn from(tier: Tier) -> Self {
        tier.number()
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.number())
    }
}

// ===========================================================================
// Level
// ===========================================================================

/// Enchantment level within a tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Level {
    /// Unenchanted.
    #[default]
    Level0 = 0,
    /// `@1`.
    Level1 = 1,
    /// `@2`.
    Level2 = 2,
    /// `@3`.
    Level3 = 3,
}

impl Level {
    /// All levels in ascending order.
    pub const ALL: [Self; 4] = [Self::Level0, Self::Level1, Self::Level2, Self::Level3];

    /// Converts from the enchantment number.
    #[inline]
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Level0),
            1 => Some(Self::Level1),
            2 => Some(Self::Level2),
            3 => Some(Self::Level3),
            _ => None,
        }
    }

    /// The enchantment number.
    #[inline]
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Level {
    type Error = GradeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_u8(value).ok_or(GradeError::InvalidLevel(value))
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.number()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Level{}", self.number())
    }
}

// ===========================================================================
// Artifact rank
// ===========================================================================

/// Rank of an artifact favor token, read from the token's identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ArtifactRank {
    /// Rank 1.
    Rank1 = 1,
    /// Rank 2.
    Rank2 = 2,
    /// Rank 3.
    Rank3 = 3,
    /// Rank 4.
    Rank4 = 4,
}

impl ArtifactRank {
    /// All ranks in ascending order.
    pub const ALL: [Self; 4] = [Self::Rank1, Self::Rank2, Self::Rank3, Self::Rank4];

    /// Converts from the rank number.
    #[inline]
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Rank1),
            2 => Some(Self::Rank2),
            3 => Some(Self::Rank3),
            4 => Some(Self::Rank4),
            _ => None,
        }
    }

    /// Converts from a single rank digit (`'3'` -> `Rank3`).
    #[inline]
    #[must_use]
    pub const fn from_digit(c: char) -> Option<Self> {
        match c {
            '1' => Some(Self::Rank1),
            '2' => Some(Self::Rank2),
            '3' => Some(Self::Rank3),
            '4' => Some(Self::Rank4),
            _ => None,
        }
    }

    /// The rank number.
    #[inline]
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for ArtifactRank {
    type Error = GradeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_u8(value).ok_or(GradeError::InvalidRank(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_round_trips_through_number() {
        for tier in Tier::ALL {
            assert_eq!(Tier::from_u8(tier.number()), Some(tier));
        }
        assert_eq!(Tier::try_from(0_u8), Err(GradeError::InvalidTier(0)));
        assert_eq!(Tier::try_from(9_u8), Err(GradeError::InvalidTier(9)));
    }

    #[test]
    fn test_tier_from_prefix() {
        assert_eq!(Tier::from_prefix("T6_ARTEFACT_TOKEN_FAVOR_3"), Some(Tier::T6));
        assert_eq!(Tier::from_prefix("T8"), Some(Tier::T8));
        assert_eq!(Tier::from_prefix("T9_SOMETHING"), None);
        assert_eq!(Tier::from_prefix("X4_SOMETHING"), None);
        assert_eq!(Tier::from_prefix("T"), None);
        assert_eq!(Tier::from_prefix(""), None);
    }

    #[test]
    fn test_tier_display() {
        assert_eq!(Tier::T4.to_string(), "T4");
        assert_eq!(Level::Level2.to_string(), "Level2");
    }

    #[test]
    fn test_level_bounds() {
        assert_eq!(Level::try_from(3_u8), Ok(Level::Level3));
        assert_eq!(Level::try_from(4_u8), Err(GradeError::InvalidLevel(4)));
        assert_eq!(Level::default(), Level::Level0);
    }

    #[test]
    fn test_rank_from_digit() {
        assert_eq!(ArtifactRank::from_digit('1'), Some(ArtifactRank::Rank1));
        assert_eq!(ArtifactRank::from_digit('4'), Some(ArtifactRank::Rank4));
        assert_eq!(ArtifactRank::from_digit('0'), None);
        assert_eq!(ArtifactRank::from_digit('5'), None);
        assert_eq!(ArtifactRank::from_digit('R'), None);
    }
}

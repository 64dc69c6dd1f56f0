//! # Crafting Journals
//!
//! A journal collects crafting fame until it is full. Which journal a crafted
//! item feeds is decided by the item's sprite, mapped to a [`JournalProfession`]
//! by the reference data.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::grade::Tier;

/// The profession a crafting journal belongs to.
///
/// The numeric values are the ones used by the sprite-to-journal data file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
#[repr(u8)]
pub enum JournalProfession {
    /// Any value the data file does not define.
    #[default]
    Unknown = 0,
    /// Mage (cloth, staffs).
    Mage = 1,
    /// Hunter (leather, bows).
    Hunter = 2,
    /// Warrior (plate, swords).
    Warrior = 3,
    /// Toolmaker (tools, bags, furniture).
    ToolMaker = 4,
}

impl JournalProfession {
    /// Maps a wire value to a profession; anything unrecognised is `Unknown`.
    #[must_use]
    pub const fn from_wire(value: i64) -> Self {
        match value {
            1 => Self::Mage,
            2 => Self::Hunter,
            3 => Self::Warrior,
            4 => Self::ToolMaker,
            _ => Self::Unknown,
        }
    }

    /// Identifier fragment used in journal unique names.
    #[must_use]
    pub const fn key(self) -> Option<&'static str> {
        match self {
            Self::Mage => Some("MAGE"),
            Self::Hunter => Some("HUNTER"),
            Self::Warrior => Some("WARRIOR"),
            Self::ToolMaker => Some("TOOLMAKER"),
            Self::Unknown => None,
        }
    }

    /// Unique name of the empty journal for this profession at `tier`,
    /// e.g. `T5_JOURNAL_HUNTER_EMPTY`. `Unknown` has no journal.
    #[must_use]
    pub fn empty_journal_unique_name(self, tier: Tier) -> Option<String> {
        self.key().map(|key| format!("{tier}_JOURNAL_{key}_EMPTY"))
    }
}

impl From<i64> for JournalProfession {
    fn from(value: i64) -> Self {
        Self::from_wire(value)
    }
}

impl From<JournalProfession> for i64 {
    fn from(profession: JournalProfession) -> Self {
        profession as i64
    }
}

impl fmt::Display for JournalProfession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key().unwrap_or("UNKNOWN"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_journal_names() {
        assert_eq!(
            JournalProfession::Mage.empty_journal_unique_name(Tier::T4).as_deref(),
            Some("T4_JOURNAL_MAGE_EMPTY")
        );
        assert_eq!(
            JournalProfession::Hunter.empty_journal_unique_name(Tier::T5).as_deref(),
            Some("T5_JOURNAL_HUNTER_EMPTY")
        );
        assert_eq!(
            JournalProfession::Warrior.empty_journal_unique_name(Tier::T6).as_deref(),
            Some("T6_JOURNAL_WARRIOR_EMPTY")
        );
        assert_eq!(
            JournalProfession::ToolMaker.empty_journal_unique_name(Tier::T8).as_deref(),
            Some("T8_JOURNAL_TOOLMAKER_EMPTY")
        );
        assert_eq!(JournalProfession::Unknown.empty_journal_unique_name(Tier::T4), None);
    }

    #[test]
    fn test_wire_values() {
        assert_eq!(JournalProfession::from_wire(1), JournalProfession::Mage);
        assert_eq!(JournalProfession::from_wire(4), JournalProfession::ToolMaker);
        assert_eq!(JournalProfession::from_wire(0), JournalProfession::Unknown);
        assert_eq!(JournalProfession::from_wire(-7), JournalProfession::Unknown);
        assert_eq!(JournalProfession::from_wire(99), JournalProfession::Unknown);
        assert_eq!(i64::from(JournalProfession::Warrior), 3);
    }
}

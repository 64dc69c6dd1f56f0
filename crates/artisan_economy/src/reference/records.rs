//! Record shapes of the two reference data files.
//!
//! Both files are exported by game-data tooling that writes PascalCase keys
//! and sometimes quotes numbers (`"Index": "42"`), so numeric fields go
//! through the lenient deserializers below.

use artisan_core::{JournalProfession, Level, Tier};
use serde::{Deserialize, Serialize};

/// Lightweight projection of a catalog item, used for pre-filtering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SimpleItemRecord {
    /// Unique name, e.g. `T4_JOURNAL_MAGE_EMPTY` or `T5_2H_BOW@2`.
    pub unique_name: String,
    /// Numeric item index in the game's item table.
    #[serde(default, deserialize_with = "lenient::unsigned")]
    pub index: u32,
    /// Localization key of the display name.
    #[serde(default)]
    pub localization_name_variable: Option<String>,
}

impl SimpleItemRecord {
    /// Creates a record with no localization key.
    #[must_use]
    pub fn new(unique_name: impl Into<String>, index: u32) -> Self {
        Self {
            unique_name: unique_name.into(),
            index,
            localization_name_variable: None,
        }
    }

    /// Tier from the `T<n>_` prefix of the unique name.
    #[must_use]
    pub fn tier(&self) -> Option<Tier> {
        Tier::from_prefix(&self.unique_name)
    }

    /// Enchantment level from the `@<n>` suffix; no suffix means `Level0`.
    #[must_use]
    pub fn level(&self) -> Option<Level> {
        match self.unique_name.rsplit_once('@') {
            None => Some(Level::Level0),
            Some((_, suffix)) => suffix.parse().ok().and_then(Level::from_u8),
        }
    }
}

/// Maps an item sprite name to the journal its crafting fame fills.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JournalMapping {
    /// Sprite / icon name of the crafted item.
    #[serde(alias = "name")]
    pub name: String,
    /// Journal profession.
    #[serde(alias = "id", default, deserialize_with = "lenient::profession")]
    pub id: JournalProfession,
}

impl JournalMapping {
    /// Creates a mapping.
    #[must_use]
    pub fn new(name: impl Into<String>, id: JournalProfession) -> Self {
        Self {
            name: name.into(),
            id,
        }
    }
}

/// Deserializers accepting a number either bare or as a numeric string.
mod lenient {
    use artisan_core::JournalProfession;
    use serde::de::{self, Deserializer, Visitor};
    use std::fmt;

    struct IntegerVisitor;

    impl Visitor<'_> for IntegerVisitor {
        type Value = i64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an integer or a string containing an integer")
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<i64, E> {
            Ok(value)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<i64, E> {
            i64::try_from(value).map_err(|_| E::invalid_value(de::Unexpected::Unsigned(value), &self))
        }

        #[allow(clippy::cast_possible_truncation)]
        fn visit_f64<E: de::Error>(self, value: f64) -> Result<i64, E> {
            // Integral floats only; the range check keeps the cast exact.
            if value.fract() == 0.0 && value.abs() < 9.0e15 {
                Ok(value as i64)
            } else {
                Err(E::invalid_value(de::Unexpected::Float(value), &self))
            }
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<i64, E> {
            value
                .trim()
                .parse()
                .map_err(|_| E::invalid_value(de::Unexpected::Str(value), &self))
        }
    }

    pub(super) fn unsigned<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        let value = deserializer.deserialize_any(IntegerVisitor)?;
        u32::try_from(value).map_err(|_| de::Error::custom(format!("{value} is out of range for u32")))
    }

    pub(super) fn profession<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<JournalProfession, D::Error> {
        deserializer
            .deserialize_any(IntegerVisitor)
            .map(JournalProfession::from_wire)
    }
}

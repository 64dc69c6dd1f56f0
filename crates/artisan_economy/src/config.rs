//! # Data Source Configuration
//!
//! Where the reference data files live. Loaded from TOML; every key is
//! optional:
//!
//! ```toml
//! base_directory = "/opt/artisan"
//! game_files_directory = "GameFiles"
//! items_file = "Items.json"
//! item_sprite_to_journal_file = "ItemSpriteToJournal.json"
//! ```
//!
//! Persisting or editing the configuration is the host's business; this crate
//! only reads it.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{EconomyError, EconomyResult};

/// Locations of the two reference data files.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DataSourceConfig {
    /// Root directory, usually the application's install directory.
    pub base_directory: PathBuf,
    /// Directory below `base_directory` holding the game files.
    pub game_files_directory: PathBuf,
    /// File name of the simple item list.
    pub items_file: String,
    /// File name of the sprite -> journal mapping list.
    pub item_sprite_to_journal_file: String,
}

impl Default for DataSourceConfig {
    fn default() -> Self {
        Self {
            base_directory: PathBuf::from("."),
            game_files_directory: PathBuf::from("GameFiles"),
            items_file: "Items.json".to_string(),
            item_sprite_to_journal_file: "ItemSpriteToJournal.json".to_string(),
        }
    }
}

impl DataSourceConfig {
    /// Default file layout below `base_directory`.
    #[must_use]
    pub fn with_base_directory(base_directory: impl Into<PathBuf>) -> Self {
        Self {
            base_directory: base_directory.into(),
            ..Self::default()
        }
    }

    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the document is not valid TOML or contains
    /// unknown keys.
    pub fn from_toml_str(content: &str) -> EconomyResult<Self> {
        toml::from_str(content).map_err(|e| EconomyError::InvalidConfig(e.to_string()))
    }

    /// Reads and parses a TOML file.
    ///
    /// A relative `base_directory` is resolved against the directory holding
    /// the config file.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file cannot be read, `InvalidConfig` if it does
    /// not parse.
    pub fn from_toml_file(path: impl AsRef<Path>) -> EconomyResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| EconomyError::io(path, &e))?;
        let mut config = Self::from_toml_str(&content)?;

        if config.base_directory.is_relative() {
            if let Some(parent) = path.parent() {
                config.base_directory = parent.join(&config.base_directory);
            }
        }

        Ok(config)
    }

    /// Directory holding both data files.
    #[must_use]
    pub fn game_files_path(&self) -> PathBuf {
        self.base_directory.join(&self.game_files_directory)
    }

    /// Full path of the simple item list.
    #[must_use]
    pub fn items_path(&self) -> PathBuf {
        self.game_files_path().join(&self.items_file)
    }

    /// Full path of the sprite -> journal mapping list.
    #[must_use]
    pub fn journal_mappings_path(&self) -> PathBuf {
        self.game_files_path().join(&self.item_sprite_to_journal_file)
    }
}

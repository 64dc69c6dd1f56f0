//! # Economy Error Types
//!
//! Errors raised inside the economy crate. None of them cross the calculator
//! entry points: loaders turn them into empty collections and `crafting_tax`
//! turns them into a zero tax, logging them on the way.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the economy system.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EconomyError {
    /// A data or config file could not be read.
    #[error("failed to read {}: {message}", path.display())]
    Io {
        /// The file that was read.
        path: PathBuf,
        /// The underlying I/O error message.
        message: String,
    },

    /// A data file did not parse as a list of the expected records.
    #[error("parse error in {}: {detail}", path.display())]
    Parse {
        /// The file that was parsed.
        path: PathBuf,
        /// Parser diagnostic.
        detail: String,
    },

    /// Invalid configuration file.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// An item reached the tax calculation without crafting requirements.
    #[error("item {0} has no crafting requirements")]
    MissingCraftingRequirements(String),

    /// A recipe resource has no identifier (or, from `validate`, a blank one).
    #[error("recipe resource #{index} has no unique name")]
    MalformedResource {
        /// Position of the resource in the recipe.
        index: usize,
    },
}

impl EconomyError {
    pub(crate) fn io(path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, detail: impl ToString) -> Self {
        Self::Parse {
            path: path.into(),
            detail: detail.to_string(),
        }
    }
}

/// Result type for economy operations.
pub type EconomyResult<T> = Result<T, EconomyError>;

//! # ARTISAN Economy
//!
//! Crafting economics over the [`artisan_core`] formula tables.
//!
//! ## Design Principles
//!
//! 1. **Total calculations** - calculator entry points never panic and never
//!    return errors; worst case they return a conservative zero
//! 2. **Degrade, don't fail** - missing or corrupt reference files become
//!    empty collections plus a logged diagnostic
//! 3. **Atomic reloads** - readers see one whole reference snapshot or the
//!    next, never a mix
//! 4. **External configuration** - data file locations come from TOML
//!
//! ## Thread Safety
//!
//! Calculator functions are pure. [`ReferenceDataStore`] is `Send + Sync`
//! and can be reloaded while other threads read from it.
//!
//! ## Example
//!
//! ```rust,ignore
//! use artisan_economy::{calculator, DataSourceConfig, JournalResolver, ReferenceDataStore};
//!
//! let store = ReferenceDataStore::new(DataSourceConfig::from_toml_file("artisan.toml")?);
//! if !store.load().await {
//!     // still usable, some lookups will come back empty
//! }
//!
//! let journal = JournalResolver::new(&store, &catalog).resolve_journal_item(Tier::T5, sprite);
//! let tax = calculator::item_crafting_tax(food_value, &item, quantity);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod artifact;
pub mod calculator;
pub mod config;
pub mod error;
pub mod journal;
pub mod recipe;
pub mod reference;

pub use artifact::{parse_artifact_token, ARTIFACT_MARKER};
pub use config::DataSourceConfig;
pub use error::{EconomyError, EconomyResult};
pub use journal::{ItemCatalog, JournalResolver};
pub use recipe::{CraftableItem, CraftingRequirements, RecipeResource};
pub use reference::{JournalMapping, ReferenceDataStore, ReferenceSnapshot, SimpleItemRecord};

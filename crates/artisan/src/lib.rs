//! # ARTISAN
//!
//! Crafting economics for a tiered, enchantment-levelled crafting system.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                     CraftingEngine                     │
//! ├────────────────────────────────────────────────────────┤
//! │  ┌──────────────────────┐  ┌────────────────────────┐  │
//! │  │  CraftingCalculator  │  │    JournalResolver     │  │
//! │  │     (pure, sync)     │  │  sprite -> journal     │  │
//! │  └──────────┬───────────┘  └───────────┬────────────┘  │
//! │             ▼                          ▼               │
//! │  ┌──────────────────────┐  ┌────────────────────────┐  │
//! │  │    FormulaTables     │  │   ReferenceDataStore   │  │
//! │  │    (artisan_core)    │  │  async load, Arc swap  │  │
//! │  └──────────────────────┘  └────────────────────────┘  │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `engine`: the [`CraftingEngine`] facade and [`CraftingQuote`]

pub mod engine;

// Re-export the units
pub use artisan_core as core;
pub use artisan_economy as economy;

// Re-export commonly used types
pub use artisan_core::{ArtifactRank, JournalProfession, Level, Tier};
pub use artisan_economy::{
    CraftableItem, CraftingRequirements, DataSourceConfig, EconomyError, ItemCatalog,
    JournalResolver, RecipeResource, ReferenceDataStore, ReferenceSnapshot,
};
pub use engine::{CraftingEngine, CraftingQuote};

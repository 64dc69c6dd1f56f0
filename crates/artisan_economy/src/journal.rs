//! # Journal Resolver
//!
//! Finds the empty journal an item's crafting fame goes into:
//!
//! ```text
//! sprite name ──ReferenceDataStore──▶ JournalProfession
//!             ──template──▶ "T{tier}_JOURNAL_{PROFESSION}_EMPTY"
//!             ──ItemCatalog──▶ item
//! ```
//!
//! Every miss along the way (unknown sprite, `Unknown` profession, catalog
//! without the journal) is a normal `None`, not an error.

use artisan_core::Tier;
use std::sync::Arc;

use crate::reference::ReferenceDataStore;

/// The host's item catalog.
pub trait ItemCatalog {
    /// What the catalog hands out for an item.
    type Item;

    /// Looks up an item by unique name.
    fn get_item_by_unique_name(&self, unique_name: &str) -> Option<Self::Item>;
}

impl<C: ItemCatalog + ?Sized> ItemCatalog for &C {
    type Item = C::Item;

    fn get_item_by_unique_name(&self, unique_name: &str) -> Option<Self::Item> {
        (**self).get_item_by_unique_name(unique_name)
    }
}

impl<C: ItemCatalog + ?Sized> ItemCatalog for Arc<C> {
    type Item = C::Item;

    fn get_item_by_unique_name(&self, unique_name: &str) -> Option<Self::Item> {
        (**self).get_item_by_unique_name(unique_name)
    }
}

/// Resolves sprite names to journal items.
///
/// Holds no state of its own; build one per call site or keep it around.
#[derive(Debug)]
pub struct JournalResolver<'a, C: ?Sized> {
    store: &'a ReferenceDataStore,
    catalog: &'a C,
}

impl<C: ?Sized> Clone for JournalResolver<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized> Copy for JournalResolver<'_, C> {}

impl<'a, C: ItemCatalog + ?Sized> JournalResolver<'a, C> {
    /// Creates a resolver over `store` and `catalog`.
    #[must_use]
    pub fn new(store: &'a ReferenceDataStore, catalog: &'a C) -> Self {
        Self { store, catalog }
    }

    /// Unique name of the empty journal for `sprite_name` at `tier`.
    #[must_use]
    pub fn journal_unique_name(&self, tier: Tier, sprite_name: &str) -> Option<String> {
        let Some(mapping) = self.store.find_journal_mapping(sprite_name) else {
            tracing::debug!(sprite_name, "no journal mapping for sprite");
            return None;
        };
        mapping.id.empty_journal_unique_name(tier)
    }

    /// The empty journal item for `sprite_name` at `tier`, as the catalog
    /// returns it.
    #[must_use]
    pub fn resolve_journal_item(&self, tier: Tier, sprite_name: &str) -> Option<C::Item> {
        let unique_name = self.journal_unique_name(tier, sprite_name)?;
        let item = self.catalog.get_item_by_unique_name(&unique_name);
        if item.is_none() {
            tracing::debug!(%unique_name, "journal item not in catalog");
        }
        item
    }
}

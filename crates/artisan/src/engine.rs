//! # Crafting Engine
//!
//! One handle over the calculator, the reference data store and the journal
//! resolver. The engine owns nothing but a shared store and the host's item
//! catalog; every calculation goes straight to the stateless calculator.

use std::sync::Arc;

use artisan_core::Tier;
use artisan_economy::{
    calculator, CraftableItem, DataSourceConfig, ItemCatalog, JournalResolver, ReferenceDataStore,
};

/// Everything the host shows for a planned crafting batch.
#[derive(Clone, Debug, PartialEq)]
pub struct CraftingQuote<I> {
    /// Fame generated by a single craft.
    pub total_base_fame: f64,
    /// Journals filled by the whole batch.
    pub journal_fraction: f64,
    /// Setup fee of a single craft.
    pub per_food_setup_fee: f64,
    /// Setup fee of the whole batch.
    pub crafting_tax: f64,
    /// Empty journal to bring, when a sprite was given and resolved.
    pub journal_item: Option<I>,
}

/// Facade over the crafting economics units.
#[derive(Debug)]
pub struct CraftingEngine<C> {
    store: Arc<ReferenceDataStore>,
    catalog: C,
}

impl CraftingEngine<Arc<ReferenceDataStore>> {
    /// An engine whose own simple item list serves as the item catalog.
    #[must_use]
    pub fn standalone(config: DataSourceConfig) -> Self {
        let store = Arc::new(ReferenceDataStore::new(config));
        Self::new(Arc::clone(&store), store)
    }
}

impl<C: ItemCatalog> CraftingEngine<C> {
    /// Creates an engine over a shared store and the host's catalog.
    #[must_use]
    pub fn new(store: Arc<ReferenceDataStore>, catalog: C) -> Self {
        Self { store, catalog }
    }

    /// The shared reference data store.
    #[must_use]
    pub fn store(&self) -> &Arc<ReferenceDataStore> {
        &self.store
    }

    /// The host's item catalog.
    #[must_use]
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Loads (or reloads) the reference data. `false` means a degraded load;
    /// the engine keeps working with whatever was loaded.
    pub async fn load_reference_data(&self) -> bool {
        self.store.load().await
    }

    /// A resolver borrowing this engine's store and catalog.
    #[must_use]
    pub fn journal_resolver(&self) -> JournalResolver<'_, C> {
        JournalResolver::new(&self.store, &self.catalog)
    }

    /// The empty journal for an item sprite at `tier`.
    #[must_use]
    pub fn journal_item(&self, tier: Tier, sprite_name: &str) -> Option<C::Item> {
        self.journal_resolver().resolve_journal_item(tier, sprite_name)
    }

    /// Journals filled by crafting `quantity` of `item`.
    #[must_use]
    pub fn required_journal_amount(&self, item: &CraftableItem, quantity: u32) -> f64 {
        calculator::required_journal_amount(item, quantity)
    }

    /// Setup fee for crafting `quantity` of `item` at `food_value`.
    #[must_use]
    pub fn crafting_tax(&self, food_value: i32, item: &CraftableItem, quantity: u32) -> f64 {
        calculator::item_crafting_tax(food_value, item, quantity)
    }

    /// See [`calculator::setup_fee_estimate`].
    #[must_use]
    pub fn setup_fee_estimate(
        &self,
        quantity: Option<u32>,
        setup_fee_percent: Option<f64>,
        sell_price_per_item: Option<f64>,
    ) -> f64 {
        calculator::setup_fee_estimate(quantity, setup_fee_percent, sell_price_per_item)
    }

    /// All figures for one batch.
    #[must_use]
    pub fn quote(
        &self,
        item: &CraftableItem,
        quantity: u32,
        food_value: i32,
        sprite_name: Option<&str>,
    ) -> CraftingQuote<C::Item> {
        let resource_count = item.total_amount_resources();
        let per_food_setup_fee = item.requirements.as_ref().map_or(0.0, |requirements| {
            calculator::per_food_setup_fee(
                food_value,
                resource_count,
                item.tier,
                item.level,
                &requirements.resources,
            )
        });

        CraftingQuote {
            total_base_fame: calculator::total_base_fame(resource_count, item.tier, item.level),
            journal_fraction: self.required_journal_amount(item, quantity),
            per_food_setup_fee,
            crafting_tax: self.crafting_tax(food_value, item, quantity),
            journal_item: sprite_name.and_then(|sprite| self.journal_item(item.tier, sprite)),
        }
    }
}

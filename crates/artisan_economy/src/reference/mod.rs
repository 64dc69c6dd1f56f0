//! # Reference Data Store
//!
//! **Cached local game data, swapped atomically on reload.**
//!
//! Two collections are read from disk:
//!
//! - the simple item list ([`SimpleItemRecord`])
//! - the sprite -> journal mapping list ([`JournalMapping`])
//!
//! ## Snapshot model
//!
//! ```text
//!   load()                              readers
//!     │ read + parse both files            │
//!     │ (no lock held)                     │ snapshot() -> Arc clone
//!     ▼                                    ▼
//!   ReferenceSnapshot ──publish──▶ RwLock<Arc<ReferenceSnapshot>>
//!                      (swap the Arc under a short write lock)
//! ```
//!
//! A reader holds either the old or the new snapshot, never a mix of two
//! loads. Before the first load the store holds an empty snapshot; after a
//! load a collection may still be empty if its file was missing or malformed.
//! Both states are valid and every lookup tolerates them.

mod loader;
mod records;

pub use loader::{parse_records, read_records};
pub use records::{JournalMapping, SimpleItemRecord};

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::config::DataSourceConfig;
use crate::journal::ItemCatalog;

/// An immutable view of both reference collections.
#[derive(Debug, Default)]
pub struct ReferenceSnapshot {
    items: Vec<SimpleItemRecord>,
    journal_mappings: Vec<JournalMapping>,
    /// Unique name -> position in `items`; first occurrence wins.
    item_index: HashMap<String, usize>,
    /// 0 until the first publish.
    generation: u64,
}

impl ReferenceSnapshot {
    /// Builds a snapshot from already-loaded collections.
    #[must_use]
    pub fn new(items: Vec<SimpleItemRecord>, journal_mappings: Vec<JournalMapping>) -> Self {
        let mut item_index = HashMap::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            item_index.entry(item.unique_name.clone()).or_insert(position);
        }

        Self {
            items,
            journal_mappings,
            item_index,
            generation: 0,
        }
    }

    /// All simple item records, in file order.
    #[must_use]
    pub fn items(&self) -> &[SimpleItemRecord] {
        &self.items
    }

    /// All journal mappings, in file order.
    #[must_use]
    pub fn journal_mappings(&self) -> &[JournalMapping] {
        &self.journal_mappings
    }

    /// Looks up a simple item by unique name.
    #[must_use]
    pub fn find_item(&self, unique_name: &str) -> Option<&SimpleItemRecord> {
        self.item_index.get(unique_name).map(|&position| &self.items[position])
    }

    /// First mapping whose name equals `sprite_name` exactly.
    #[must_use]
    pub fn find_journal_mapping(&self, sprite_name: &str) -> Option<&JournalMapping> {
        self.journal_mappings.iter().find(|m| m.name == sprite_name)
    }

    /// Whether either collection is empty.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.items.is_empty() || self.journal_mappings.is_empty()
    }

    /// Number of publishes before this one; 0 for a snapshot never published.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl ItemCatalog for ReferenceSnapshot {
    type Item = SimpleItemRecord;

    fn get_item_by_unique_name(&self, unique_name: &str) -> Option<SimpleItemRecord> {
        self.find_item(unique_name).cloned()
    }
}

/// Process-wide holder of the current [`ReferenceSnapshot`].
///
/// Shared behind an `Arc`; `load` may run on one task while others keep
/// reading the previous snapshot.
#[derive(Debug)]
pub struct ReferenceDataStore {
    config: DataSourceConfig,
    snapshot: RwLock<Arc<ReferenceSnapshot>>,
}

impl ReferenceDataStore {
    /// Creates an empty, not yet loaded store.
    #[must_use]
    pub fn new(config: DataSourceConfig) -> Self {
        Self {
            config,
            snapshot: RwLock::new(Arc::new(ReferenceSnapshot::default())),
        }
    }

    /// Creates a store already holding `snapshot`, without touching disk.
    #[must_use]
    pub fn with_snapshot(config: DataSourceConfig, snapshot: ReferenceSnapshot) -> Self {
        let store = Self::new(config);
        store.publish(snapshot);
        store
    }

    /// Where this store reads from.
    #[must_use]
    pub fn config(&self) -> &DataSourceConfig {
        &self.config
    }

    /// The current snapshot. Stays valid across later reloads.
    #[must_use]
    pub fn snapshot(&self) -> Arc<ReferenceSnapshot> {
        Arc::clone(&self.snapshot.read())
    }

    /// Whether a snapshot has been published.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.snapshot.read().generation > 0
    }

    /// Replaces the current snapshot.
    pub fn publish(&self, mut snapshot: ReferenceSnapshot) {
        let mut current = self.snapshot.write();
        snapshot.generation = current.generation + 1;
        *current = Arc::new(snapshot);
    }

    /// Reads both data files and publishes the result.
    ///
    /// A file that cannot be read or parsed contributes an empty collection
    /// and an error log entry. Returns `false` if either collection ended up
    /// empty. That is a diagnostic signal; the store is usable either way.
    pub async fn load(&self) -> bool {
        let items_path = self.config.items_path();
        let journal_path = self.config.journal_mappings_path();

        let (items, journal_mappings) = tokio::join!(
            loader::read_records_or_empty::<SimpleItemRecord>(&items_path, "items"),
            loader::read_records_or_empty::<JournalMapping>(&journal_path, "journal mappings"),
        );

        let snapshot = ReferenceSnapshot::new(items, journal_mappings);
        let complete = !snapshot.is_degraded();

        if complete {
            tracing::info!(
                items = snapshot.items.len(),
                journal_mappings = snapshot.journal_mappings.len(),
                "reference data loaded"
            );
        } else {
            tracing::warn!(
                items = snapshot.items.len(),
                journal_mappings = snapshot.journal_mappings.len(),
                items_path = %items_path.display(),
                journal_path = %journal_path.display(),
                "reference data incomplete"
            );
        }

        self.publish(snapshot);
        complete
    }

    /// First mapping for `sprite_name` in the current snapshot.
    #[must_use]
    pub fn find_journal_mapping(&self, sprite_name: &str) -> Option<JournalMapping> {
        self.snapshot.read().find_journal_mapping(sprite_name).cloned()
    }

    /// Simple item by unique name in the current snapshot.
    #[must_use]
    pub fn find_item(&self, unique_name: &str) -> Option<SimpleItemRecord> {
        self.snapshot.read().find_item(unique_name).cloned()
    }
}

impl ItemCatalog for ReferenceDataStore {
    type Item = SimpleItemRecord;

    fn get_item_by_unique_name(&self, unique_name: &str) -> Option<SimpleItemRecord> {
        self.find_item(unique_name)
    }
}

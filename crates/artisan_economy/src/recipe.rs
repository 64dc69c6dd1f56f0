//! # Recipe Data
//!
//! The slice of an item's definition the calculator reads: its grade and the
//! resources its recipe consumes. These records come from the host's item
//! catalog and are not validated on construction; [`CraftingRequirements::validate`]
//! is the one place that rejects malformed recipes.

use artisan_core::{Level, Tier};
use serde::{Deserialize, Serialize};

use crate::error::{EconomyError, EconomyResult};

/// One resource entry in a recipe.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeResource {
    /// Unique name of the resource item. Catalog data may leave it out.
    pub unique_name: Option<String>,
    /// Units consumed per craft.
    pub count: u32,
}

impl RecipeResource {
    /// Creates a resource entry.
    #[must_use]
    pub fn new(unique_name: impl Into<String>, count: u32) -> Self {
        Self {
            unique_name: Some(unique_name.into()),
            count,
        }
    }

    /// The unique name, if present and not blank.
    #[inline]
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.unique_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
    }
}

/// Resources consumed by one craft of an item.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CraftingRequirements {
    /// Total resource units per craft, as reported by the catalog.
    pub total_amount_resources: u32,
    /// Resource entries, in recipe order.
    pub resources: Vec<RecipeResource>,
}

impl CraftingRequirements {
    /// Creates requirements whose total is the sum of the entry counts.
    #[must_use]
    pub fn from_resources(resources: Vec<RecipeResource>) -> Self {
        let total_amount_resources = resources.iter().map(|r| r.count).sum();
        Self {
            total_amount_resources,
            resources,
        }
    }

    /// Checks that every resource carries a unique name.
    ///
    /// # Errors
    ///
    /// Returns `MalformedResource` with the index of the first entry whose
    /// name is missing or blank.
    pub fn validate(&self) -> EconomyResult<()> {
        match self.resources.iter().position(|r| r.name().is_none()) {
            Some(index) => Err(EconomyError::MalformedResource { index }),
            None => Ok(()),
        }
    }
}

/// An item as the calculator sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CraftableItem {
    /// Unique name, e.g. `T4_MAIN_SWORD@1`.
    pub unique_name: String,
    /// Material tier.
    pub tier: Tier,
    /// Enchantment level.
    pub level: Level,
    /// Recipe, when the catalog knows one.
    pub requirements: Option<CraftingRequirements>,
}

impl CraftableItem {
    /// Creates an item without a recipe.
    #[must_use]
    pub fn new(unique_name: impl Into<String>, tier: Tier, level: Level) -> Self {
        Self {
            unique_name: unique_name.into(),
            tier,
            level,
            requirements: None,
        }
    }

    /// Attaches a recipe.
    #[must_use]
    pub fn with_requirements(mut self, requirements: CraftingRequirements) -> Self {
        self.requirements = Some(requirements);
        self
    }

    /// Total resource units per craft; 0 without a recipe.
    #[must_use]
    pub fn total_amount_resources(&self) -> u32 {
        self.requirements
            .as_ref()
            .map_or(0, |r| r.total_amount_resources)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_names_are_absent() {
        assert_eq!(RecipeResource::new("T4_PLANKS", 8).name(), Some("T4_PLANKS"));
        assert_eq!(RecipeResource::new("   ", 8).name(), None);
        assert_eq!(RecipeResource::default().name(), None);
    }

    #[test]
    fn test_total_from_resources() {
        let req = CraftingRequirements::from_resources(vec![
            RecipeResource::new("T4_PLANKS", 16),
            RecipeResource::new("T4_METALBAR", 8),
        ]);
        assert_eq!(req.total_amount_resources, 24);
    }

    #[test]
    fn test_validate_reports_first_bad_entry() {
        let req = CraftingRequirements::from_resources(vec![
            RecipeResource::new("T4_PLANKS", 16),
            RecipeResource::default(),
            RecipeResource::new("", 1),
        ]);
        assert_eq!(req.validate(), Err(EconomyError::MalformedResource { index: 1 }));
    }

    #[test]
    fn test_item_without_recipe_has_no_resources() {
        let item = CraftableItem::new("T4_MAIN_SWORD", Tier::T4, Level::Level0);
        assert_eq!(item.total_amount_resources(), 0);
    }
}

//! # Crafting Calculator
//!
//! **Total, stateless formulas over the formula tables.**
//!
//! | Formula                        | Result                                             |
//! |--------------------------------|----------------------------------------------------|
//! | [`total_base_fame`]            | fame per craft                                     |
//! | [`required_journal_fraction`]  | journals filled by a batch                         |
//! | [`per_food_setup_fee`]         | station fee per craft                              |
//! | [`crafting_tax`]               | station fee for a batch, `0.0` on malformed recipes |
//! | [`setup_fee_estimate`]         | fee from a sell price and a fee percentage         |
//!
//! No input panics. Grade pairs the tables do not define fall back to the
//! table defaults; only the tax formulas look at externally sourced recipe
//! entries, and they convert any fault into a zero tax after logging it.
//!
//! ## Example
//!
//! ```rust
//! use artisan_core::{Level, Tier};
//! use artisan_economy::calculator;
//!
//! // 10 resources, 5 crafts of a T4 item: 1125 fame of a 14400-fame journal.
//! let fraction = calculator::required_journal_fraction(10, Tier::T4, Level::Level0, 5);
//! assert_eq!(fraction, 1125.0 / 14400.0);
//! ```

use artisan_core::{base_fame_per_resource, max_journal_fame, setup_fee_tier_factor, Level, Tier};

use crate::artifact::{artifact_factor, scan_artifact_resource};
use crate::error::{EconomyError, EconomyResult};
use crate::recipe::{CraftableItem, RecipeResource};

/// Artifact premium applied when a recipe has no artifact token.
const DEFAULT_ARTIFACT_FACTOR: f64 = artisan_core::NO_ARTIFACT_PREMIUM;

/// Food values at or below zero are charged as this value.
const MIN_FOOD_VALUE: i32 = 1;

// ===========================================================================
// Fame
// ===========================================================================

/// Fame generated by one craft consuming `resource_count` resource units.
#[inline]
#[must_use]
pub fn total_base_fame(resource_count: u32, tier: Tier, level: Level) -> f64 {
    base_fame_per_resource(tier, level) * f64::from(resource_count)
}

/// Fraction of an empty journal filled by crafting `quantity` items.
///
/// Values above `1.0` mean more than one journal. Returns `0.0` when
/// `quantity` is zero, and when the tier has no journal (`T1`) instead of
/// dividing by a zero capacity.
#[must_use]
pub fn required_journal_fraction(
    total_resource_count: u32,
    tier: Tier,
    level: Level,
    quantity: u32,
) -> f64 {
    if quantity == 0 {
        return 0.0;
    }

    let capacity = max_journal_fame(tier);
    if capacity == 0 {
        return 0.0;
    }

    let total_journal_fame = total_base_fame(total_resource_count, tier, level) * f64::from(quantity);
    total_journal_fame / f64::from(capacity)
}

/// [`required_journal_fraction`] for a catalog item; items without a recipe
/// generate no fame.
#[must_use]
pub fn required_journal_amount(item: &CraftableItem, quantity: u32) -> f64 {
    required_journal_fraction(item.total_amount_resources(), item.tier, item.level, quantity)
}

// ===========================================================================
// Setup fee
// ===========================================================================

/// Station setup fee for one craft.
///
/// ```text
/// fee = (food / 100) * resource_count * (tier_factor + artifact_factor)
/// ```
///
/// `food_value <= 0` is charged as `1`. The artifact factor comes from the
/// first artifact token in `resources`, priced at the token's own tier.
#[must_use]
pub fn per_food_setup_fee(
    food_value: i32,
    resource_count: u32,
    tier: Tier,
    level: Level,
    resources: &[RecipeResource],
) -> f64 {
    let tier_factor = setup_fee_tier_factor(tier, level);
    let safe_food_value = if food_value <= 0 { MIN_FOOD_VALUE } else { food_value };
    let artifact = artifact_factor(resources, DEFAULT_ARTIFACT_FACTOR);

    f64::from(safe_food_value) / 100.0 * f64::from(resource_count) * (tier_factor + artifact)
}

/// Station setup fee for `item_quantity` crafts.
///
/// Best effort: a recipe entry with no name, reached while looking for the
/// artifact token, is logged and yields `0.0`. Blank names are not a fault.
#[must_use]
pub fn crafting_tax(
    food_value: i32,
    resource_count: u32,
    tier: Tier,
    level: Level,
    resources: &[RecipeResource],
    item_quantity: u32,
) -> f64 {
    try_crafting_tax(food_value, resource_count, tier, level, resources, item_quantity)
        .unwrap_or_else(|err| {
            tracing::error!(%tier, %level, error = %err, "crafting tax calculation failed");
            0.0
        })
}

/// [`crafting_tax`] for a catalog item. Items without a recipe yield `0.0`.
#[must_use]
pub fn item_crafting_tax(food_value: i32, item: &CraftableItem, item_quantity: u32) -> f64 {
    try_item_crafting_tax(food_value, item, item_quantity).unwrap_or_else(|err| {
        tracing::error!(item = %item.unique_name, error = %err, "crafting tax calculation failed");
        0.0
    })
}

fn try_item_crafting_tax(food_value: i32, item: &CraftableItem, item_quantity: u32) -> EconomyResult<f64> {
    let requirements = item
        .requirements
        .as_ref()
        .ok_or_else(|| EconomyError::MissingCraftingRequirements(item.unique_name.clone()))?;

    try_crafting_tax(
        food_value,
        requirements.total_amount_resources,
        item.tier,
        item.level,
        &requirements.resources,
        item_quantity,
    )
}

fn try_crafting_tax(
    food_value: i32,
    resource_count: u32,
    tier: Tier,
    level: Level,
    resources: &[RecipeResource],
    item_quantity: u32,
) -> EconomyResult<f64> {
    scan_artifact_resource(resources)?;

    Ok(f64::from(item_quantity) * per_food_setup_fee(food_value, resource_count, tier, level, resources))
}

/// Fee for `quantity` items at `sell_price_per_item` and a `setup_fee_percent`
/// station fee.
///
/// Returns `0.0` unless all three inputs are present and strictly positive.
#[must_use]
pub fn setup_fee_estimate(
    quantity: Option<u32>,
    setup_fee_percent: Option<f64>,
    sell_price_per_item: Option<f64>,
) -> f64 {
    match (quantity, setup_fee_percent, sell_price_per_item) {
        (Some(quantity), Some(percent), Some(price)) if quantity > 0 && percent > 0.0 && price > 0.0 => {
            f64::from(quantity) * price / 100.0 * percent
        }
        _ => 0.0,
    }
}

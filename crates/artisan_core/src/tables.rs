//! # Formula Tables
//!
//! **Static lookup tables driving every crafting formula.**
//!
//! Four tables, all pure and total:
//!
//! | Table                       | Key                    | Default for undefined keys |
//! |-----------------------------|------------------------|----------------------------|
//! | [`base_fame_per_resource`]  | `(Tier, Level)`        | `0.0` (additive)           |
//! | [`setup_fee_tier_factor`]   | `(Tier, Level)`        | `1.0` (multiplicative)     |
//! | [`max_journal_fame`]        | `Tier`                 | `0`                        |
//! | [`artifact_premium`]        | `(Tier, ArtifactRank)` | caller-supplied            |
//!
//! `T2` and `T3` only define `Level0`; `T1` defines nothing.
//!
//! The matches below are exhaustive over the enums with no wildcard arm, so
//! adding a tier or level variant fails to compile until every table decides
//! what the new key maps to.

use crate::grade::{ArtifactRank, Level, Tier};

/// Default premium when no artifact resource is in the recipe.
pub const NO_ARTIFACT_PREMIUM: f64 = 0.0;

/// Crafting fame generated per resource unit consumed.
#[must_use]
pub fn base_fame_per_resource(tier: Tier, level: Level) -> f64 {
    use Level::{Level0, Level1, Level2, Level3};
    use Tier::{T1, T2, T3, T4, T5, T6, T7, T8};

    match (tier, level) {
        (T2, Level0) => 1.5,
        (T3, Level0) => 7.5,
        (T4, Level0) => 22.5,
        (T4, Level1) => 37.5,
        (T4, Level2) => 52.5,
        (T4, Level3) => 67.5,
        (T5, Level0) => 90.0,
        (T5, Level1) => 172.5,
        (T5, Level2) => 255.0,
        (T5, Level3) => 337.5,
        (T6, Level0) => 270.0,
        (T6, Level1) => 532.5,
        (T6, Level2) => 795.0,
        (T6, Level3) => 1057.5,
        (T7, Level0) => 645.0,
        (T7, Level1) => 1282.5,
        (T7, Level2) => 1920.0,
        (T7, Level3) => 2557.5,
        (T8, Level0) => 1395.0,
        (T8, Level1) => 2782.5,
        (T8, Level2) => 4170.0,
        (T8, Level3) => 5557.5,
        (T1, _) | (T2 | T3, Level1 | Level2 | Level3) => 0.0,
    }
}

/// Base multiplier of the per-food setup fee.
#[must_use]
pub fn setup_fee_tier_factor(tier: Tier, level: Level) -> f64 {
    use Level::{Level0, Level1, Level2, Level3};
    use Tier::{T1, T2, T3, T4, T5, T6, T7, T8};

    match (tier, level) {
        (T2 | T3, Level0) => 1.0,
        (T4, Level0) => 1.8,
        (T4, Level1) | (T5, Level0) => 3.6,
        (T4, Level2) | (T5, Level1) | (T6, Level0) => 7.2,
        (T4, Level3) | (T5, Level2) | (T6, Level1) | (T7, Level0) => 14.4,
        (T5, Level3) | (T6, Level2) | (T7, Level1) | (T8, Level0) => 28.8,
        (T6, Level3) | (T7, Level2) | (T8, Level1) => 57.6,
        (T7, Level3) | (T8, Level2) => 115.2,
        (T8, Level3) => 230.4,
        (T1, _) | (T2 | T3, Level1 | Level2 | Level3) => 1.0,
    }
}

/// Fame needed to fill one empty journal of the given tier.
#[must_use]
pub const fn max_journal_fame(tier: Tier) -> u32 {
    match tier {
        Tier::T1 => 0,
        Tier::T2 => 3_600,
        Tier::T3 => 7_200,
        Tier::T4 => 14_400,
        Tier::T5 => 28_380,
        Tier::T6 => 58_590,
        Tier::T7 => 114_120,
        Tier::T8 => 236_250,
    }
}

/// Setup-fee surcharge for an artifact favor token of `tier` and `rank`.
///
/// Doubles per tier from `T4` to `T8`. Tokens of tiers without a premium
/// return `default`.
#[must_use]
pub fn artifact_premium(tier: Tier, rank: ArtifactRank, default: f64) -> f64 {
    use ArtifactRank::{Rank1, Rank2, Rank3, Rank4};
    use Tier::{T1, T2, T3, T4, T5, T6, T7, T8};

    match (tier, rank) {
        (T4, Rank1) => 0.45,
        (T4, Rank2) => 1.35,
        (T4, Rank3) => 3.15,
        (T4, Rank4) => 6.75,
        (T5, Rank1) => 0.9,
        (T5, Rank2) => 2.7,
        (T5, Rank3) => 6.3,
        (T5, Rank4) => 13.5,
        (T6, Rank1) => 1.8,
        (T6, Rank2) => 5.4,
        (T6, Rank3) => 12.6,
        (T6, Rank4) => 27.0,
        (T7, Rank1) => 3.6,
        (T7, Rank2) => 10.8,
        (T7, Rank3) => 25.2,
        (T7, Rank4) => 45.0,
        (T8, Rank1) => 7.2,
        (T8, Rank2) => 21.6,
        (T8, Rank3) => 50.4,
        (T8, Rank4) => 108.0,
        (T1 | T2 | T3, _) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grade::ArtifactRank::{Rank1, Rank2, Rank3, Rank4};
    use crate::grade::Level::{Level0, Level1, Level2, Level3};
    use crate::grade::Tier::{T1, T2, T3, T4, T5, T6, T7, T8};

    const FAME: [(Tier, Level, f64); 22] = [
        (T2, Level0, 1.5),
        (T3, Level0, 7.5),
        (T4, Level0, 22.5),
        (T4, Level1, 37.5),
        (T4, Level2, 52.5),
        (T4, Level3, 67.5),
        (T5, Level0, 90.0),
        (T5, Level1, 172.5),
        (T5, Level2, 255.0),
        (T5, Level3, 337.5),
        (T6, Level0, 270.0),
        (T6, Level1, 532.5),
        (T6, Level2, 795.0),
        (T6, Level3, 1057.5),
        (T7, Level0, 645.0),
        (T7, Level1, 1282.5),
        (T7, Level2, 1920.0),
        (T7, Level3, 2557.5),
        (T8, Level0, 1395.0),
        (T8, Level1, 2782.5),
        (T8, Level2, 4170.0),
        (T8, Level3, 5557.5),
    ];

    const FEE: [(Tier, Level, f64); 22] = [
        (T2, Level0, 1.0),
        (T3, Level0, 1.0),
        (T4, Level0, 1.8),
        (T4, Level1, 3.6),
        (T4, Level2, 7.2),
        (T4, Level3, 14.4),
        (T5, Level0, 3.6),
        (T5, Level1, 7.2),
        (T5, Level2, 14.4),
        (T5, Level3, 28.8),
        (T6, Level0, 7.2),
        (T6, Level1, 14.4),
        (T6, Level2, 28.8),
        (T6, Level3, 57.6),
        (T7, Level0, 14.4),
        (T7, Level1, 28.8),
        (T7, Level2, 57.6),
        (T7, Level3, 115.2),
        (T8, Level0, 28.8),
        (T8, Level1, 57.6),
        (T8, Level2, 115.2),
        (T8, Level3, 230.4),
    ];

    const UNDEFINED: [(Tier, Level); 10] = [
        (T1, Level0),
        (T1, Level1),
        (T1, Level2),
        (T1, Level3),
        (T2, Level1),
        (T2, Level2),
        (T2, Level3),
        (T3, Level1),
        (T3, Level2),
        (T3, Level3),
    ];

    #[test]
    fn test_fame_table_constants() {
        for (tier, level, expected) in FAME {
            assert_eq!(base_fame_per_resource(tier, level), expected, "{tier} {level}");
        }
    }

    #[test]
    fn test_fee_table_constants() {
        for (tier, level, expected) in FEE {
            assert_eq!(setup_fee_tier_factor(tier, level), expected, "{tier} {level}");
        }
    }

    #[test]
    fn test_undefined_pairs_use_table_defaults() {
        for (tier, level) in UNDEFINED {
            assert_eq!(base_fame_per_resource(tier, level), 0.0, "{tier} {level}");
            assert_eq!(setup_fee_tier_factor(tier, level), 1.0, "{tier} {level}");
        }
    }

    #[test]
    fn test_tables_cover_every_pair() {
        // 8 tiers x 4 levels = defined + undefined
        assert_eq!(FAME.len() + UNDEFINED.len(), Tier::ALL.len() * Level::ALL.len());
    }

    #[test]
    fn test_max_journal_fame() {
        assert_eq!(max_journal_fame(T1), 0);
        assert_eq!(max_journal_fame(T4), 14_400);
        let mut previous = 0;
        for tier in [T2, T3, T4, T5, T6, T7, T8] {
            let fame = max_journal_fame(tier);
            assert!(fame > previous, "{tier} journal should hold more than the tier below");
            previous = fame;
        }
    }

    #[test]
    fn test_artifact_premium_constants() {
        assert_eq!(artifact_premium(T4, Rank1, 0.0), 0.45);
        assert_eq!(artifact_premium(T4, Rank4, 0.0), 6.75);
        assert_eq!(artifact_premium(T5, Rank2, 0.0), 2.7);
        assert_eq!(artifact_premium(T6, Rank3, 0.0), 12.6);
        assert_eq!(artifact_premium(T7, Rank4, 0.0), 45.0);
        assert_eq!(artifact_premium(T8, Rank3, 0.0), 50.4);
        assert_eq!(artifact_premium(T8, Rank4, 0.0), 108.0);
    }

    #[test]
    fn test_artifact_premium_default_for_low_tiers() {
        for tier in [T1, T2, T3] {
            for rank in ArtifactRank::ALL {
                assert_eq!(artifact_premium(tier, rank, NO_ARTIFACT_PREMIUM), 0.0);
                assert_eq!(artifact_premium(tier, rank, 2.5), 2.5);
            }
        }
    }

    #[test]
    fn test_artifact_premium_monotonic_in_rank() {
        for tier in [T4, T5, T6, T7, T8] {
            let premiums = [Rank1, Rank2, Rank3, Rank4].map(|rank| artifact_premium(tier, rank, 0.0));
            assert!(premiums.windows(2).all(|w| w[0] < w[1]), "{tier}: {premiums:?}");
        }
    }

    #[test]
    fn test_artifact_premium_monotonic_in_tier() {
        for rank in ArtifactRank::ALL {
            let premiums = [T4, T5, T6, T7, T8].map(|tier| artifact_premium(tier, rank, 0.0));
            assert!(premiums.windows(2).all(|w| w[0] < w[1]), "{rank:?}: {premiums:?}");
        }
    }
}

//! # ARTISAN Core
//!
//! Vocabulary and formula tables for a tiered crafting economy.
//!
//! ## Contents
//!
//! - [`grade`]: [`Tier`], [`Level`] and [`ArtifactRank`]
//! - [`journal`]: [`JournalProfession`] and journal naming
//! - [`tables`]: the static fame, setup-fee, journal capacity and artifact
//!   premium tables
//!
//! Nothing in this crate performs I/O or holds state. Every table lookup is
//! total: a key the table does not define resolves to a documented default.
//!
//! ## Example
//!
//! ```rust
//! use artisan_core::{tables, Level, Tier};
//!
//! let fame = tables::base_fame_per_resource(Tier::T4, Level::Level0) * 10.0;
//! assert_eq!(fame, 225.0);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod grade;
pub mod journal;
pub mod tables;

pub use grade::{ArtifactRank, GradeError, Level, Tier};
pub use journal::JournalProfession;
pub use tables::{
    artifact_premium, base_fame_per_resource, max_journal_fame, setup_fee_tier_factor,
    NO_ARTIFACT_PREMIUM,
};

//! # Artifact Favor Tokens
//!
//! A recipe that consumes an artifact favor token pays a setup-fee premium.
//! The token's tier and rank are not stored as fields; they are encoded in its
//! unique name:
//!
//! ```text
//! T6_ARTEFACT_TOKEN_FAVOR_3
//! ^^                      ^
//! tier prefix             rank (last character)
//! ```
//!
//! The premium uses the token's own tier, not the tier of the item being
//! crafted. All knowledge of this naming convention lives in
//! [`parse_artifact_token`].

use artisan_core::{artifact_premium, ArtifactRank, Tier};

use crate::error::{EconomyError, EconomyResult};
use crate::recipe::RecipeResource;

/// Substring identifying an artifact favor token.
pub const ARTIFACT_MARKER: &str = "ARTEFACT_TOKEN_FAVOR";

/// Reads the tier prefix and trailing rank from a token's unique name.
///
/// Returns `None` if the name is not an artifact token or either part does
/// not parse.
#[must_use]
pub fn parse_artifact_token(unique_name: &str) -> Option<(Tier, ArtifactRank)> {
    if !unique_name.contains(ARTIFACT_MARKER) {
        return None;
    }
    let tier = Tier::from_prefix(unique_name)?;
    let rank = ArtifactRank::from_digit(unique_name.chars().last()?)?;
    Some((tier, rank))
}

/// The first resource whose name contains [`ARTIFACT_MARKER`].
///
/// Entries without a name are skipped.
#[must_use]
pub fn find_artifact_resource(resources: &[RecipeResource]) -> Option<&str> {
    resources
        .iter()
        .filter_map(RecipeResource::name)
        .find(|name| name.contains(ARTIFACT_MARKER))
}

/// Like [`find_artifact_resource`], but fails on an entry with no name that
/// is reached before the token.
///
/// Blank names are scanned past; entries after the token are never looked at.
///
/// # Errors
///
/// Returns `MalformedResource` with the position of the unnamed entry.
pub fn scan_artifact_resource(resources: &[RecipeResource]) -> EconomyResult<Option<&str>> {
    for (index, resource) in resources.iter().enumerate() {
        match resource.unique_name.as_deref() {
            None => return Err(EconomyError::MalformedResource { index }),
            Some(name) if name.contains(ARTIFACT_MARKER) => return Ok(Some(name)),
            Some(_) => {}
        }
    }
    Ok(None)
}

/// Premium contributed by the recipe's artifact token, or `default` when the
/// recipe has none or the token's tier/rank has no premium.
#[must_use]
pub fn artifact_factor(resources: &[RecipeResource], default: f64) -> f64 {
    find_artifact_resource(resources)
        .and_then(parse_artifact_token)
        .map_or(default, |(tier, rank)| artifact_premium(tier, rank, default))
}

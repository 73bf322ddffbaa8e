//! District inference from arbitrary coordinates.
//!
//! A point's district is decided by a majority vote of its nearest
//! shelters. Shelters whose address named no district do not vote.

use shelter_map_shelter_models::{District, ShelterRecord};

use crate::rank_by_distance;

/// Number of nearest shelters that vote when no other count is given.
pub const DEFAULT_NEIGHBOURS: usize = 5;

/// Infers the district containing `(latitude, longitude)`.
///
/// The `neighbours` nearest shelters with coordinates vote, ignoring
/// [`District::Other`]. The most frequent district wins; ties go to the
/// district that appears first in distance order. Returns `fallback` when
/// no shelter gets to vote.
#[must_use]
pub fn infer_district<'a, I>(
    records: I,
    latitude: f64,
    longitude: f64,
    neighbours: usize,
    fallback: District,
) -> District
where
    I: IntoIterator<Item = &'a ShelterRecord>,
{
    let ranked = rank_by_distance(records, latitude, longitude);

    // (district, votes) in order of first appearance.
    let mut tally: Vec<(District, usize)> = Vec::with_capacity(neighbours);
    for candidate in ranked.iter().take(neighbours) {
        let district = candidate.record.classes.district;
        if district == District::Other {
            continue;
        }
        match tally.iter_mut().find(|(d, _)| *d == district) {
            Some((_, votes)) => *votes += 1,
            None => tally.push((district, 1)),
        }
    }

    let mut winner: Option<(District, usize)> = None;
    for &(district, votes) in &tally {
        if winner.is_none_or(|(_, best)| votes > best) {
            winner = Some((district, votes));
        }
    }

    let Some((district, votes)) = winner else {
        log::debug!(
            "No district votes near ({latitude}, {longitude}); using {fallback}"
        );
        return fallback;
    };

    log::debug!("Inferred {district} for ({latitude}, {longitude}) with {votes} votes");
    district
}

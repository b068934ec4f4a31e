//! Place-id deduplication with first-seen priority.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::types::RawListing;

/// Output of [`dedup_by_place_id`].
#[derive(Debug, Clone, Default)]
pub struct Deduplicated {
    /// One listing per distinct place_id, in first-occurrence order.
    pub listings: Vec<RawListing>,
    /// Later records dropped because their place_id was already seen.
    pub duplicates_dropped: usize,
}

/// Drop every listing whose place_id has already been seen. No fields are
/// merged: the first record wins outright.
///
/// An empty place_id is a valid key, so all id-less listings collapse into
/// the first one. That is almost always an upstream data problem, so it is
/// logged at warn level.
pub fn dedup_by_place_id(raw: Vec<RawListing>) -> Deduplicated {
    let mut seen: HashSet<String> = HashSet::with_capacity(raw.len());
    let mut listings = Vec::with_capacity(raw.len());
    let mut duplicates_dropped = 0;
    let mut empty_ids = 0;

    for listing in raw {
        if listing.place_id.is_empty() {
            empty_ids += 1;
        }
        if seen.contains(&listing.place_id) {
            debug!("Dropping duplicate listing {:?} ({})", listing.place_id, listing.name);
            duplicates_dropped += 1;
            continue;
        }
        seen.insert(listing.place_id.clone());
        listings.push(listing);
    }

    if empty_ids > 1 {
        warn!(
            "{} listings had no place_id and were collapsed into one",
            empty_ids
        );
    }

    Deduplicated {
        listings,
        duplicates_dropped,
    }
}

//! Batch enrichment: dedup, then derive every field per listing.

use tracing::info;

use crate::dedup::dedup_by_place_id;
use crate::extract;
use crate::normalize::{cuisine_types, price_display};
use crate::profile::synthesize_profile;
use crate::sentiment::Sentiment;
use crate::types::{EnrichedListing, RawListing};

/// Result of one enrichment run.
#[derive(Debug, Clone, Default)]
pub struct EnrichmentReport {
    /// Enriched listings, one per distinct place_id, in first-seen order.
    pub listings: Vec<EnrichedListing>,
    pub input_count: usize,
    pub duplicates_dropped: usize,
    pub duration_ms: u64,
}

/// Enrichment pipeline over a full batch of raw listings.
pub struct EnrichmentPipeline;

impl EnrichmentPipeline {
    /// Run dedup and enrichment. Never fails: missing or malformed optional
    /// fields are recovered by defaults.
    pub fn run(raw: Vec<RawListing>) -> EnrichmentReport {
        let start = std::time::Instant::now();
        let input_count = raw.len();

        info!("Starting enrichment pipeline ({} listings)", input_count);

        let deduped = dedup_by_place_id(raw);
        let listings: Vec<EnrichedListing> =
            deduped.listings.into_iter().map(enrich_listing).collect();

        let report = EnrichmentReport {
            listings,
            input_count,
            duplicates_dropped: deduped.duplicates_dropped,
            duration_ms: start.elapsed().as_millis() as u64,
        };

        info!(
            "Enrichment complete: input={}, output={}, duplicates={}, duration={}ms",
            report.input_count,
            report.listings.len(),
            report.duplicates_dropped,
            report.duration_ms
        );

        report
    }
}

/// Derive every field of one listing from its raw fields and reviews.
///
/// Prior derived values are never consulted, so re-enriching a listing
/// always recomputes from scratch.
pub fn enrich_listing(listing: RawListing) -> EnrichedListing {
    let cuisine_types = cuisine_types(&listing.type_tags);
    let price_display = price_display(listing.price_level);
    let signals = extract::extract_all(&listing.reviews);
    let sentiment = Sentiment::from_reviews(&listing.reviews);
    let profile = synthesize_profile(
        &listing,
        &cuisine_types,
        price_display,
        &signals.descriptors,
        &signals.popular_dishes,
    );

    EnrichedListing {
        listing,
        cuisine_types,
        price_display: price_display.to_string(),
        popular_dishes: signals.popular_dishes,
        descriptors: signals.descriptors,
        sentiment,
        profile,
    }
}

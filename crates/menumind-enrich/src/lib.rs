//! MenuMind Enrich — turns raw restaurant listings into LLM-ready profiles.
//!
//! Every stage is a pure function over a listing and its reviews, so the
//! whole transform is total and deterministic: re-running it on the same
//! input yields byte-identical output.

pub mod dedup;
pub mod extract;
pub mod lexicon;
pub mod normalize;
pub mod pipeline;
pub mod profile;
pub mod sentiment;
pub mod stats;
pub mod types;

pub use dedup::{dedup_by_place_id, Deduplicated};
pub use pipeline::{enrich_listing, EnrichmentPipeline, EnrichmentReport};
pub use sentiment::Sentiment;
pub use stats::{cuisine_frequency, price_frequency, LabelCount};
pub use types::*;

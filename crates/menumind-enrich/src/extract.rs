//! Heuristic review mining: descriptors and popular dishes.
//!
//! Both extractors are fuzzy text heuristics, not parsers. They depend only
//! on review text and review order.

pub mod descriptors;
pub mod dishes;

use crate::types::{Descriptor, Review};

/// Derived signals for one listing's review set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewSignals {
    pub descriptors: Vec<Descriptor>,
    pub popular_dishes: Vec<String>,
}

/// Run both extractors over a listing's reviews.
pub fn extract_all(reviews: &[Review]) -> ReviewSignals {
    ReviewSignals {
        descriptors: descriptors::extract_descriptors(&review_corpus(reviews)),
        popular_dishes: dishes::extract_popular_dishes(reviews, dishes::MAX_DISHES),
    }
}

/// All review texts joined with a space and lowercased.
pub fn review_corpus(reviews: &[Review]) -> String {
    reviews
        .iter()
        .map(|r| r.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

//! Read-only aggregate views over an enriched collection.

use serde::Serialize;
use std::collections::HashMap;

use crate::lexicon::PRICE_LABELS;
use crate::normalize::price_display;
use crate::types::EnrichedListing;

/// One row of a frequency report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

/// Cuisine label → number of listings, highest count first. Ties keep the
/// order in which the label first appeared.
pub fn cuisine_frequency(listings: &[EnrichedListing]) -> Vec<LabelCount> {
    let mut rows: Vec<LabelCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for listing in listings {
        for cuisine in &listing.cuisine_types {
            match index.get(cuisine.as_str()) {
                Some(&i) => rows[i].count += 1,
                None => {
                    index.insert(cuisine.as_str(), rows.len());
                    rows.push(LabelCount {
                        label: cuisine.clone(),
                        count: 1,
                    });
                }
            }
        }
    }

    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows
}

/// Listings per price label, always all five labels in price order.
/// Out-of-range price levels count as "Unknown".
pub fn price_frequency(listings: &[EnrichedListing]) -> Vec<LabelCount> {
    let mut counts = [0usize; PRICE_LABELS.len()];
    for listing in listings {
        let label = price_display(listing.listing.price_level);
        if let Some(i) = PRICE_LABELS.iter().position(|l| *l == label) {
            counts[i] += 1;
        }
    }

    PRICE_LABELS
        .iter()
        .zip(counts)
        .map(|(label, count)| LabelCount {
            label: label.to_string(),
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::enrich_listing;
    use crate::types::RawListing;

    fn enriched(id: &str, tags: &[&str], price_level: i64) -> EnrichedListing {
        enrich_listing(RawListing {
            place_id: id.into(),
            price_level,
            type_tags: tags.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        })
    }

    #[test]
    fn test_cuisine_frequency_order() {
        let listings = vec![
            enriched("1", &["thai_restaurant"], 1),
            enriched("2", &["italian_restaurant", "pizza_restaurant"], 2),
            enriched("3", &["pizza_restaurant"], 2),
        ];
        let rows = cuisine_frequency(&listings);
        let flat: Vec<(&str, usize)> = rows.iter().map(|r| (r.label.as_str(), r.count)).collect();
        assert_eq!(flat, vec![("Pizza", 2), ("Thai", 1), ("Italian", 1)]);
    }

    #[test]
    fn test_price_frequency_zero_filled() {
        let listings = vec![
            enriched("1", &[], 2),
            enriched("2", &[], 2),
            enriched("3", &[], 9),
        ];
        let rows = price_frequency(&listings);
        let flat: Vec<(&str, usize)> = rows.iter().map(|r| (r.label.as_str(), r.count)).collect();
        assert_eq!(
            flat,
            vec![("Unknown", 1), ("$", 0), ("$$", 2), ("$$$", 0), ("$$$$", 0)]
        );
    }

    #[test]
    fn test_empty_collection() {
        assert!(cuisine_frequency(&[]).is_empty());
        assert_eq!(price_frequency(&[]).len(), 5);
    }
}

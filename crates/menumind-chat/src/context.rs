//! Candidate filtering, LLM context and prompt construction.

use menumind_enrich::EnrichedListing;

/// Review counts above this no longer raise a listing's popularity.
const POPULARITY_REVIEW_CAP: u64 = 500;

/// Narrow listings by city (case-insensitive) and price level. `None` or an
/// empty filter keeps everything.
pub fn filter_candidates<'a>(
    listings: &'a [EnrichedListing],
    city: Option<&str>,
    price_levels: Option<&[i64]>,
) -> Vec<&'a EnrichedListing> {
    let city = city.map(str::to_lowercase).filter(|c| !c.is_empty());
    let price_levels = price_levels.filter(|p| !p.is_empty());

    listings
        .iter()
        .filter(|l| match &city {
            Some(c) => l.listing.city.to_lowercase() == *c,
            None => true,
        })
        .filter(|l| match price_levels {
            Some(levels) => levels.contains(&l.listing.price_level),
            None => true,
        })
        .collect()
}

/// Rating weighted by review volume, capped at 500 reviews.
pub fn popularity(listing: &EnrichedListing) -> f64 {
    let reviews = listing.listing.user_ratings_total.min(POPULARITY_REVIEW_CAP);
    listing.listing.rating * reviews as f64 / POPULARITY_REVIEW_CAP as f64
}

/// One `Restaurant {n}: {profile}` line per candidate. When there are more
/// than `max` candidates only the `max` most popular are kept.
pub fn prepare_context(candidates: &[&EnrichedListing], max: usize) -> String {
    let mut selected: Vec<&EnrichedListing> = candidates.to_vec();
    if selected.len() > max {
        // Stable: equally popular listings keep their stored order.
        selected.sort_by(|a, b| popularity(b).total_cmp(&popularity(a)));
        selected.truncate(max);
    }

    selected
        .iter()
        .enumerate()
        .filter(|(_, l)| !l.profile.is_empty())
        .map(|(i, l)| format!("Restaurant {}: {}", i + 1, l.profile))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full prompt for the recommendation model.
pub fn build_prompt(context: &str, user_query: &str, num_results: usize) -> String {
    format!(
        r#"
You are a restaurant recommendation assistant for Ohio.
Your task is to recommend restaurants based on the user's query.
Use only the restaurant information provided below. Do not make up any restaurants.

USER QUERY: "{user_query}"

RESTAURANT DATABASE:
{context}

Based on the user's query, identify the top {num_results} most relevant restaurants.
For each restaurant, provide:
1. Restaurant name
2. Rating (out of 5)
3. Price level
4. A brief explanation of why it matches the user's query
5. A few key details about the restaurant (cuisine, popular dishes, etc.)

Also provide a brief analysis of what the user seems to be looking for.

Format your response as a JSON object with the following structure:
{{
  "query_analysis": "Brief analysis of what the user is looking for",
  "recommendations": [
    {{
      "name": "Restaurant Name",
      "rating": "4.5/5",
      "price_level": "$",
      "match_reasons": "Why this restaurant matches the query",
      "details": "Key details about this restaurant"
    }},
    ...
  ]
}}

Ensure your response is valid JSON with all values as strings.
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use menumind_enrich::{enrich_listing, RawListing, Review};

    fn listing(id: &str, city: &str, price_level: i64, rating: f64, total: u64) -> EnrichedListing {
        enrich_listing(RawListing {
            place_id: id.into(),
            name: format!("R{}", id),
            city: city.into(),
            price_level,
            rating,
            user_ratings_total: total,
            reviews: vec![Review {
                rating: 4.0,
                text: "fine".into(),
                ..Default::default()
            }],
            ..Default::default()
        })
    }

    #[test]
    fn test_filter_by_city_and_price() {
        let all = vec![
            listing("1", "Columbus", 1, 4.0, 10),
            listing("2", "columbus", 3, 4.0, 10),
            listing("3", "Akron", 1, 4.0, 10),
        ];
        let ids = |v: Vec<&EnrichedListing>| -> Vec<String> {
            v.iter().map(|l| l.listing.place_id.clone()).collect()
        };

        assert_eq!(ids(filter_candidates(&all, Some("COLUMBUS"), None)), vec!["1", "2"]);
        assert_eq!(ids(filter_candidates(&all, None, Some(&[1][..]))), vec!["1", "3"]);
        assert_eq!(ids(filter_candidates(&all, Some("Columbus"), Some(&[3][..]))), vec!["2"]);
        assert_eq!(ids(filter_candidates(&all, Some(""), Some(&[][..]))).len(), 3);
    }

    #[test]
    fn test_popularity_caps_reviews() {
        assert_eq!(popularity(&listing("1", "X", 1, 4.0, 250)), 2.0);
        assert_eq!(popularity(&listing("2", "X", 1, 4.0, 5000)), 4.0);
    }

    #[test]
    fn test_context_keeps_most_popular() {
        let all = vec![
            listing("low", "X", 1, 3.0, 10),
            listing("high", "X", 1, 5.0, 600),
            listing("mid", "X", 1, 4.0, 300),
        ];
        let refs: Vec<&EnrichedListing> = all.iter().collect();
        let context = prepare_context(&refs, 2);
        let lines: Vec<&str> = context.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Restaurant 1: Rhigh is a restaurant in X"));
        assert!(lines[1].starts_with("Restaurant 2: Rmid"));
    }

    #[test]
    fn test_context_under_cap_keeps_order() {
        let all = vec![listing("a", "X", 1, 1.0, 1), listing("b", "X", 1, 5.0, 500)];
        let refs: Vec<&EnrichedListing> = all.iter().collect();
        let context = prepare_context(&refs, 100);
        assert!(context.starts_with("Restaurant 1: Ra"));
    }

    #[test]
    fn test_prompt_contents() {
        let prompt = build_prompt("Restaurant 1: Foo", "late night tacos", 5);
        assert!(prompt.contains(r#"USER QUERY: "late night tacos""#));
        assert!(prompt.contains("Restaurant 1: Foo"));
        assert!(prompt.contains("identify the top 5 most relevant"));
        assert!(prompt.contains(r#""query_analysis""#));
    }
}

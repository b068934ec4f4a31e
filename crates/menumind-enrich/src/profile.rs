//! Natural-language profile synthesis.
//!
//! The profile is the only field the recommendation LLM reads, so its
//! wording is stable: one sentence per fact group, joined by single spaces.

use crate::types::{Descriptor, RawListing};

/// Compose the profile paragraph for a listing.
///
/// A listing without reviews gets only `"{name} is a restaurant in {city}."`.
/// With an empty cuisine list the first sentence reads "is a restaurant"
/// rather than leaving a blank before "restaurant".
pub fn synthesize_profile(
    listing: &RawListing,
    cuisine_types: &[String],
    price_display: &str,
    descriptors: &[Descriptor],
    popular_dishes: &[String],
) -> String {
    if listing.reviews.is_empty() {
        return format!("{} is a restaurant in {}.", listing.name, listing.city);
    }

    let kind = if cuisine_types.is_empty() {
        "restaurant".to_string()
    } else {
        format!("{} restaurant", cuisine_types.join(", "))
    };

    let mut sentences = vec![format!(
        "{} is a {} in {} with a {} price range.",
        listing.name, kind, listing.city, price_display
    )];

    if listing.rating > 0.0 {
        sentences.push(format!("It has a rating of {}/5.", format_rating(listing.rating)));
    }

    match descriptors {
        [] => {}
        [only] => sentences.push(format!("It is known for being {}.", only.phrase())),
        _ => {
            let phrases: Vec<String> = descriptors.iter().map(Descriptor::phrase).collect();
            sentences.push(format!("It is known for being {}.", join_with_and(&phrases)));
        }
    }

    match popular_dishes {
        [] => {}
        [only] => sentences.push(format!("A popular dish is {}.", only)),
        _ => sentences.push(format!("Popular dishes include {}.", join_with_and(popular_dishes))),
    }

    sentences.join(" ")
}

/// Whole ratings keep one decimal (`4.0`), others print as stored (`4.7`).
fn format_rating(rating: f64) -> String {
    if rating.fract() == 0.0 {
        format!("{:.1}", rating)
    } else {
        rating.to_string()
    }
}

/// `["a"]` → `a`, `["a", "b"]` → `a and b`, `["a", "b", "c"]` → `a, b, and c`.
pub fn join_with_and<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} and {}", first.as_ref(), second.as_ref()),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(|s| s.as_ref()).collect();
            format!("{}, and {}", head.join(", "), last.as_ref())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Review;

    fn listing(name: &str, city: &str, rating: f64, reviews: usize) -> RawListing {
        RawListing {
            name: name.into(),
            city: city.into(),
            rating,
            reviews: vec![Review::default(); reviews],
            ..Default::default()
        }
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_reviews() {
        let profile = synthesize_profile(
            &listing("Joe's Diner", "Columbus", 4.2, 0),
            &strings(&["American"]),
            "$$",
            &[Descriptor::Casual],
            &strings(&["Pancakes"]),
        );
        assert_eq!(profile, "Joe's Diner is a restaurant in Columbus.");
    }

    #[test]
    fn test_full_profile() {
        let profile = synthesize_profile(
            &listing("Luigi's", "Cleveland", 4.5, 3),
            &strings(&["Italian", "Pizza"]),
            "$$",
            &[Descriptor::FamilyFriendly, Descriptor::Casual, Descriptor::Authentic],
            &strings(&["Chicken Parm", "Garlic Knots"]),
        );
        assert_eq!(
            profile,
            "Luigi's is a Italian, Pizza restaurant in Cleveland with a $$ price range. \
             It has a rating of 4.5/5. \
             It is known for being family friendly, casual, and authentic. \
             Popular dishes include Chicken Parm and Garlic Knots."
        );
    }

    #[test]
    fn test_singular_phrasing_and_no_rating() {
        let profile = synthesize_profile(
            &listing("Pho Real", "Dayton", 0.0, 1),
            &strings(&["Vietnamese"]),
            "$",
            &[Descriptor::QuickService],
            &strings(&["Brisket Pho"]),
        );
        assert_eq!(
            profile,
            "Pho Real is a Vietnamese restaurant in Dayton with a $ price range. \
             It is known for being quick service. \
             A popular dish is Brisket Pho."
        );
    }

    #[test]
    fn test_empty_cuisine_fallback() {
        let profile = synthesize_profile(
            &listing("Spot", "Akron", 4.0, 1),
            &[],
            "Unknown",
            &[],
            &[],
        );
        assert_eq!(
            profile,
            "Spot is a restaurant in Akron with a Unknown price range. It has a rating of 4.0/5."
        );
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(4.0), "4.0");
        assert_eq!(format_rating(5.0), "5.0");
        assert_eq!(format_rating(4.7), "4.7");
        assert_eq!(format_rating(4.25), "4.25");
    }

    #[test]
    fn test_join_with_and() {
        let empty: [&str; 0] = [];
        assert_eq!(join_with_and(&empty), "");
        assert_eq!(join_with_and(&["a"]), "a");
        assert_eq!(join_with_and(&["a", "b"]), "a and b");
        assert_eq!(join_with_and(&["a", "b", "c", "d"]), "a, b, c, and d");
    }
}

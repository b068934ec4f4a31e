//! Static lexicon tables: cuisine tags, descriptor triggers, price labels,
//! food nouns and dish stop-words.
//!
//! All tables are read-only and process-wide.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

use crate::types::Descriptor;

/// Provider tags that say nothing about the cuisine.
pub const GENERIC_TAGS: &[&str] = &["restaurant", "food", "point_of_interest", "establishment"];

/// Price labels indexed by price level 0–4.
pub const PRICE_LABELS: [&str; 5] = ["Unknown", "$", "$$", "$$$", "$$$$"];

/// Provider type tag → cuisine label.
static CUISINE_MAP: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("american_restaurant", "American"),
        ("italian_restaurant", "Italian"),
        ("chinese_restaurant", "Chinese"),
        ("mexican_restaurant", "Mexican"),
        ("japanese_restaurant", "Japanese"),
        ("thai_restaurant", "Thai"),
        ("indian_restaurant", "Indian"),
        ("french_restaurant", "French"),
        ("greek_restaurant", "Greek"),
        ("korean_restaurant", "Korean"),
        ("vietnamese_restaurant", "Vietnamese"),
        ("mediterranean_restaurant", "Mediterranean"),
        ("middle_eastern_restaurant", "Middle Eastern"),
        ("lebanese_restaurant", "Lebanese"),
        ("turkish_restaurant", "Turkish"),
        ("spanish_restaurant", "Spanish"),
        ("brazilian_restaurant", "Brazilian"),
        ("african_restaurant", "African"),
        ("seafood_restaurant", "Seafood"),
        ("steak_house", "Steakhouse"),
        ("sushi_restaurant", "Sushi"),
        ("ramen_restaurant", "Ramen"),
        ("pizza_restaurant", "Pizza"),
        ("hamburger_restaurant", "Burgers"),
        ("barbecue_restaurant", "Barbecue"),
        ("breakfast_restaurant", "Breakfast"),
        ("brunch_restaurant", "Brunch"),
        ("vegan_restaurant", "Vegan"),
        ("vegetarian_restaurant", "Vegetarian"),
        ("fast_food_restaurant", "Fast Food"),
        ("sandwich_shop", "Sandwiches"),
        ("ice_cream_shop", "Ice Cream"),
        ("dessert_shop", "Desserts"),
        ("bakery", "Bakery"),
        ("cafe", "Cafe"),
        ("coffee_shop", "Coffee"),
        ("bar", "Bar"),
        ("meal_takeaway", "Takeout"),
        ("meal_delivery", "Delivery"),
    ])
});

/// Look up the cuisine label for a provider tag.
pub fn cuisine_label(tag: &str) -> Option<&'static str> {
    CUISINE_MAP.get(tag).copied()
}

pub fn is_generic_tag(tag: &str) -> bool {
    GENERIC_TAGS.contains(&tag)
}

/// Descriptor → ordered substring triggers, in display order.
pub const DESCRIPTOR_PATTERNS: &[(Descriptor, &[&str])] = &[
    (Descriptor::Affordable, &[
        "affordable", "cheap", "inexpensive", "budget", "low price",
        "good price", "good value", "value for money",
    ]),
    (Descriptor::Expensive, &[
        "expensive", "pricey", "overpriced", "high price", "costly", "splurge",
    ]),
    (Descriptor::FamilyFriendly, &[
        "family friendly", "family-friendly", "kid friendly", "kid-friendly",
        "kids menu", "great for kids", "children", "family",
    ]),
    (Descriptor::QuickService, &[
        "quick", "fast service", "speedy", "no wait", "in and out", "served fast",
    ]),
    (Descriptor::Casual, &[
        "casual", "laid back", "laid-back", "relaxed", "no frills", "low-key",
    ]),
    (Descriptor::Fancy, &[
        "fancy", "upscale", "elegant", "fine dining", "classy", "sophisticated",
    ]),
    (Descriptor::LateNight, &[
        "late night", "late-night", "open late", "after midnight", "24 hours",
    ]),
    (Descriptor::Romantic, &[
        "romantic", "date night", "intimate", "anniversary", "candlelit",
    ]),
    (Descriptor::Takeout, &[
        "takeout", "take out", "take-out", "to-go", "carryout", "carry out", "delivery",
    ]),
    (Descriptor::Healthy, &[
        "healthy", "organic", "vegan", "vegetarian", "gluten free", "gluten-free", "nutritious",
    ]),
    (Descriptor::ComfortFood, &[
        "comfort food", "hearty", "homestyle", "home-style", "home cooking", "homemade", "soul food",
    ]),
    (Descriptor::Authentic, &[
        "authentic", "traditional", "genuine", "real deal", "just like home",
    ]),
];

/// Head nouns for the `<word> <food-noun>` dish pattern.
pub const FOOD_NOUNS: &[&str] = &[
    "burger", "pizza", "sandwich", "salad", "pasta", "taco", "burrito",
    "chicken", "steak", "fish", "soup", "dessert",
];

/// Filler words trimmed from the edges of capitalized runs
/// ("The Chicken Parm" → "Chicken Parm", "Amazing Pho" → "Pho").
const EDGE_WORDS: &[&str] = &[
    // Articles, pronouns, function words
    "the", "a", "an", "and", "or", "but", "this", "that", "these", "those",
    "my", "our", "your", "their", "his", "her", "its", "we", "they", "you",
    "he", "she", "it", "i", "me", "us", "them", "with", "for", "from", "at",
    "in", "on", "of", "to", "if", "so", "not", "then", "also", "just", "when",
    "what", "there", "here", "after", "before", "every", "some", "all",
    // Praise and filler
    "delicious", "good", "great", "amazing", "awesome", "excellent", "best",
    "nice", "tasty", "yummy", "perfect", "wonderful", "fantastic", "love",
    "loved", "like", "liked", "really", "very", "definitely", "highly",
    "recommend", "friendly", "fresh", "again", "will", "would", "could",
    "came", "went", "got", "first", "last", "overall", "thanks", "thank",
    // Calendar words that are always capitalized
    "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday",
];

/// Generic terms rejected as whole candidates but kept inside a run
/// ("Breakfast Burrito" survives, "Breakfast" alone does not).
const GENERIC_TERMS: &[&str] = &[
    "food", "foods", "place", "restaurant", "service", "staff", "server",
    "waiter", "waitress", "menu", "order", "ordered", "meal", "dish", "dishes",
    "dinner", "lunch", "breakfast", "brunch", "time", "times", "visit",
    "experience", "atmosphere", "price", "prices", "everything",
];

static STOP_WORDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| EDGE_WORDS.iter().chain(GENERIC_TERMS).copied().collect());

static EDGE_WORD_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| EDGE_WORDS.iter().copied().collect());

/// Case-insensitive stop-word test for whole dish candidates.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word.to_lowercase().as_str())
}

/// Case-insensitive test for filler that may be trimmed off a run's edges.
pub fn is_edge_word(word: &str) -> bool {
    EDGE_WORD_SET.contains(word.to_lowercase().as_str())
}

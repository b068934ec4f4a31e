//! Listing types as stored in `restaurants.json`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::sentiment::Sentiment;

/// A place record as supplied by the listing source.
///
/// Every field is optional on the wire. Absent, `null` or wrongly typed
/// values fall back to their defaults (0, empty string, empty list), so
/// one bad record never rejects a whole batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawListing {
    #[serde(default, deserialize_with = "lenient_text")]
    pub place_id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub address: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub city: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub zipcode: String,
    #[serde(default, deserialize_with = "lenient_float")]
    pub lat: f64,
    #[serde(default, deserialize_with = "lenient_float")]
    pub lng: f64,
    /// Average rating, 0–5.
    #[serde(default, deserialize_with = "lenient_float")]
    pub rating: f64,
    #[serde(default, alias = "review_count", deserialize_with = "lenient_count")]
    pub user_ratings_total: u64,
    /// 0–4, where 0 means unknown. Out-of-range values are kept as-is and
    /// displayed as unknown.
    #[serde(default, deserialize_with = "lenient_integer")]
    pub price_level: i64,
    #[serde(default, deserialize_with = "lenient_text")]
    pub website: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub phone: String,
    /// Provider type tags, e.g. `["italian_restaurant", "restaurant", "food"]`.
    #[serde(default, rename = "types", deserialize_with = "lenient_list")]
    pub type_tags: Vec<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub reviews: Vec<Review>,
}

/// A single user review.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(default, deserialize_with = "lenient_text")]
    pub author_name: String,
    #[serde(default, deserialize_with = "lenient_float")]
    pub rating: f64,
    #[serde(default, deserialize_with = "lenient_text")]
    pub text: String,
    /// Provider epoch timestamp, not validated.
    #[serde(default, rename = "time", deserialize_with = "lenient_integer")]
    pub timestamp: i64,
}

/// Qualitative tag inferred from review text.
///
/// Variant order is the stable display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Descriptor {
    Affordable,
    Expensive,
    FamilyFriendly,
    QuickService,
    Casual,
    Fancy,
    LateNight,
    Romantic,
    Takeout,
    Healthy,
    ComfortFood,
    Authentic,
}

impl Descriptor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Affordable => "affordable",
            Self::Expensive => "expensive",
            Self::FamilyFriendly => "family_friendly",
            Self::QuickService => "quick_service",
            Self::Casual => "casual",
            Self::Fancy => "fancy",
            Self::LateNight => "late_night",
            Self::Romantic => "romantic",
            Self::Takeout => "takeout",
            Self::Healthy => "healthy",
            Self::ComfortFood => "comfort_food",
            Self::Authentic => "authentic",
        }
    }

    /// Human phrasing used in profiles (`family_friendly` → `family friendly`).
    pub fn phrase(&self) -> String {
        self.as_str().replace('_', " ")
    }
}

impl std::fmt::Display for Descriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A raw listing plus every derived field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedListing {
    #[serde(flatten)]
    pub listing: RawListing,
    pub cuisine_types: Vec<String>,
    pub price_display: String,
    pub popular_dishes: Vec<String>,
    pub descriptors: Vec<Descriptor>,
    pub sentiment: Sentiment,
    pub profile: String,
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

/// Numbers and numeric strings; anything else, or a non-finite value, is 0.
fn lenient_float<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(value.filter(|v| v.is_finite()).unwrap_or_default())
}

/// Integers, integral floats (`2.0`) and integer strings. Fractional or
/// junk values become 0.
fn lenient_integer<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(integral(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = integral(Value::deserialize(deserializer)?);
    Ok(value.and_then(|n| u64::try_from(n).ok()).unwrap_or_default())
}

fn integral(value: Value) -> Option<i64> {
    let float = match value {
        Value::Number(n) => match n.as_i64() {
            Some(i) => return Some(i),
            None => n.as_f64()?,
        },
        Value::String(s) => {
            let s = s.trim();
            if let Ok(i) = s.parse::<i64>() {
                return Some(i);
            }
            s.parse::<f64>().ok()?
        }
        _ => return None,
    };
    let in_range = float.is_finite() && float.abs() < i64::MAX as f64;
    (in_range && float.fract() == 0.0).then_some(float as i64)
}

/// Array elements that deserialize as `T`; other elements are skipped and a
/// non-array is an empty list.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

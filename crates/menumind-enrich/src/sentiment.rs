//! Five-level sentiment bucket from average review rating.

use serde::{Deserialize, Serialize};

use crate::types::Review;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    #[serde(rename = "very positive")]
    VeryPositive,
    #[serde(rename = "positive")]
    Positive,
    #[default]
    #[serde(rename = "neutral")]
    Neutral,
    #[serde(rename = "negative")]
    Negative,
    #[serde(rename = "very negative")]
    VeryNegative,
}

impl Sentiment {
    /// Bucket an average rating. Lower bounds are inclusive.
    pub fn from_average(avg: f64) -> Self {
        if avg >= 4.5 {
            Self::VeryPositive
        } else if avg >= 4.0 {
            Self::Positive
        } else if avg >= 3.0 {
            Self::Neutral
        } else if avg >= 2.0 {
            Self::Negative
        } else {
            Self::VeryNegative
        }
    }

    /// Sentiment of a review set; an empty set is neutral.
    pub fn from_reviews(reviews: &[Review]) -> Self {
        if reviews.is_empty() {
            return Self::Neutral;
        }
        let total: f64 = reviews.iter().map(|r| r.rating).sum();
        Self::from_average(total / reviews.len() as f64)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VeryPositive => "very positive",
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
            Self::VeryNegative => "very negative",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Recommendation request and response types.

use serde::{Deserialize, Deserializer, Serialize};

/// Incoming recommendation query.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationRequest {
    pub query: String,
    #[serde(default = "default_num_results")]
    pub num_results: usize,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub price_levels: Option<Vec<i64>>,
}

fn default_num_results() -> usize {
    3
}

impl RecommendationRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            num_results: default_num_results(),
            city: None,
            price_levels: None,
        }
    }
}

/// One suggested restaurant as returned by the LLM.
///
/// The model is asked for strings everywhere but sometimes answers with
/// numbers, so every field accepts any scalar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub rating: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub price_level: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub match_reasons: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub details: String,
}

/// Parsed LLM answer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    #[serde(default, deserialize_with = "lenient_string")]
    pub query_analysis: String,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RecommendationResponse {
    /// Fallback when the model output cannot be parsed.
    pub fn unparseable() -> Self {
        Self {
            query_analysis: "Unable to analyze query properly".into(),
            recommendations: Vec::new(),
            error: Some("Failed to parse LLM response".into()),
        }
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    })
}

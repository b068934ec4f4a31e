//! Tolerant parsing of the model's JSON answer.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use crate::types::RecommendationResponse;

static FENCED_JSON_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```json\s*(.*?)\s*```").unwrap());

static OUTER_OBJECT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)(\{.*\})").unwrap());

/// Parse model output into a response. Tries, in order: the whole text,
/// a ```` ```json ```` fenced block, the outermost `{...}` span. Falls back
/// to [`RecommendationResponse::unparseable`].
pub fn parse_response(text: &str) -> RecommendationResponse {
    if let Ok(parsed) = serde_json::from_str::<RecommendationResponse>(text.trim()) {
        return parsed;
    }

    let fenced = FENCED_JSON_RE
        .captures(text)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str());
    let outer = OUTER_OBJECT_RE
        .captures(text)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str());

    for candidate in [fenced, outer].into_iter().flatten() {
        match serde_json::from_str::<RecommendationResponse>(candidate) {
            Ok(parsed) => return parsed,
            Err(e) => debug!("Candidate JSON rejected: {}", e),
        }
    }

    warn!("Failed to parse LLM response ({} chars)", text.len());
    RecommendationResponse::unparseable()
}

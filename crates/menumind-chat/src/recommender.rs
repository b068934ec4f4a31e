//! Query answering over an enriched collection.

use tracing::info;

use menumind_core::Result;
use menumind_enrich::EnrichedListing;

use crate::context::{build_prompt, filter_candidates, prepare_context};
use crate::parse::parse_response;
use crate::provider::CompletionBackend;
use crate::types::{RecommendationRequest, RecommendationResponse};

/// Answers recommendation queries against a loaded collection.
pub struct Recommender {
    listings: Vec<EnrichedListing>,
    max_context: usize,
}

impl Recommender {
    pub fn new(listings: Vec<EnrichedListing>, max_context: usize) -> Self {
        Self {
            listings,
            max_context,
        }
    }

    /// The exact prompt a request would send.
    pub fn prompt_for(&self, request: &RecommendationRequest) -> String {
        let candidates = filter_candidates(
            &self.listings,
            request.city.as_deref(),
            request.price_levels.as_deref(),
        );
        info!(
            "{} of {} restaurants match the filters",
            candidates.len(),
            self.listings.len()
        );
        let context = prepare_context(&candidates, self.max_context);
        build_prompt(&context, &request.query, request.num_results)
    }

    /// Filter, build the prompt, ask the backend and parse its answer.
    /// Transport failures are errors; an unparseable answer is not.
    pub async fn recommend<B: CompletionBackend>(
        &self,
        backend: &B,
        request: &RecommendationRequest,
    ) -> Result<RecommendationResponse> {
        let prompt = self.prompt_for(request);
        let text = backend.complete(&prompt).await?;
        Ok(parse_response(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use menumind_core::Error;
    use menumind_enrich::{enrich_listing, RawListing, Review};
    use std::future::Future;
    use std::sync::Mutex;

    /// Backend that records the prompt and answers with fixed text.
    struct CannedBackend {
        answer: std::result::Result<String, String>,
        seen: Mutex<Vec<String>>,
    }

    impl CompletionBackend for CannedBackend {
        fn complete(&self, prompt: &str) -> impl Future<Output = Result<String>> + Send {
            self.seen.lock().unwrap().push(prompt.to_string());
            let answer = self.answer.clone().map_err(Error::Http);
            async move { answer }
        }
    }

    fn canned(answer: &str) -> CannedBackend {
        CannedBackend {
            answer: Ok(answer.to_string()),
            seen: Mutex::new(Vec::new()),
        }
    }

    fn collection() -> Vec<EnrichedListing> {
        [("a", "Columbus", 1), ("b", "Akron", 2)]
            .into_iter()
            .map(|(id, city, price_level)| {
                enrich_listing(RawListing {
                    place_id: id.into(),
                    name: format!("Spot {}", id.to_uppercase()),
                    city: city.into(),
                    price_level,
                    reviews: vec![Review {
                        rating: 5.0,
                        text: "cheap eats".into(),
                        ..Default::default()
                    }],
                    ..Default::default()
                })
            })
            .collect()
    }

    #[test]
    fn test_prompt_respects_filters() {
        let recommender = Recommender::new(collection(), 100);
        let mut request = RecommendationRequest::new("cheap food");
        request.city = Some("akron".into());

        let prompt = recommender.prompt_for(&request);
        assert!(prompt.contains("Spot B"));
        assert!(!prompt.contains("Spot A"));
    }

    #[tokio::test]
    async fn test_recommend_parses_answer() {
        let recommender = Recommender::new(collection(), 100);
        let backend = canned(
            "```json\n{\"query_analysis\": \"cheap\", \"recommendations\": [{\"name\": \"Spot A\"}]}\n```",
        );

        let response = recommender
            .recommend(&backend, &RecommendationRequest::new("cheap food"))
            .await
            .unwrap();
        assert_eq!(response.query_analysis, "cheap");
        assert_eq!(response.recommendations[0].name, "Spot A");

        let seen = backend.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].contains(r#"USER QUERY: "cheap food""#));
    }

    #[tokio::test]
    async fn test_unparseable_answer_is_not_an_error() {
        let recommender = Recommender::new(collection(), 100);
        let response = recommender
            .recommend(&canned("no idea"), &RecommendationRequest::new("x"))
            .await
            .unwrap();
        assert_eq!(response, RecommendationResponse::unparseable());
    }

    #[tokio::test]
    async fn test_backend_failure_propagates() {
        let recommender = Recommender::new(collection(), 100);
        let backend = CannedBackend {
            answer: Err("connection refused".into()),
            seen: Mutex::new(Vec::new()),
        };
        let result = recommender
            .recommend(&backend, &RecommendationRequest::new("x"))
            .await;
        assert!(matches!(result, Err(Error::Http(_))));
    }
}

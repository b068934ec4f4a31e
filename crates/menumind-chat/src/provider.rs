//! LLM completion backends.
//!
//! `CompletionBackend` abstracts "prompt in, text out". `GeminiClient`
//! implements it against Google's `generateContent` REST endpoint.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use serde_json::json;
use tracing::debug;

use menumind_core::{Error, Result};

use crate::config::LLMConfig;

/// Trait for text-completion backends.
pub trait CompletionBackend: Send + Sync {
    /// Send a prompt and return the model's text answer.
    fn complete(&self, prompt: &str) -> impl Future<Output = Result<String>> + Send;
}

/// Google Gemini client (non-streaming).
pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(config: &LLMConfig) -> Result<Self> {
        let api_key = config.api_key()?.to_string();
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::Http(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model)
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        let body = json!({
            "contents": [{"role": "user", "parts": [{"text": prompt}]}],
        });

        debug!("Requesting completion from Gemini model {}", self.model);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Http(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Http(format!("API error {}: {}", status, body)));
        }

        let parsed: serde_json::Value = response
            .json()
            .await
            .map_err(|e| Error::Http(format!("Invalid response body: {}", e)))?;

        extract_text(&parsed).ok_or_else(|| {
            let reason = parsed["candidates"][0]["finishReason"]
                .as_str()
                .or_else(|| parsed["promptFeedback"]["blockReason"].as_str())
                .unwrap_or("no text in response");
            Error::Llm(format!("Gemini returned no text: {}", reason))
        })
    }
}

impl CompletionBackend for GeminiClient {
    fn complete(&self, prompt: &str) -> impl Future<Output = Result<String>> + Send {
        self.generate(prompt)
    }
}

/// Concatenated text parts of the first candidate.
pub fn extract_text(response: &serde_json::Value) -> Option<String> {
    let parts = response["candidates"][0]["content"]["parts"].as_array()?;
    let text: String = parts
        .iter()
        .filter_map(|p| p["text"].as_str())
        .collect();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

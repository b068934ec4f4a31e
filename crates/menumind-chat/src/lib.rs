//! Recommendation queries answered by a hosted LLM.
//!
//! The LLM does the ranking; this crate narrows the candidate set, turns
//! enriched profiles into a prompt, calls the provider and parses whatever
//! comes back into a structured response.

pub mod config;
pub mod context;
pub mod parse;
pub mod provider;
pub mod recommender;
pub mod types;

pub use config::LLMConfig;
pub use provider::{CompletionBackend, GeminiClient};
pub use recommender::Recommender;
pub use types::*;

//! Sentiment extraction pipeline
//!
//! Builds the prompt for a review batch, invokes the completion service
//! once, and parses the response into a score record.

mod parser;
mod prompt;

pub use parser::parse_scores;
pub use prompt::{build_prompt, SYSTEM_PROMPT};

use crate::client::CompletionClient;
use crate::error::Result;
use crate::types::SentimentScores;
use std::sync::Arc;

/// Sentiment extraction model backed by a completion service.
///
/// The client is injected so tests can substitute a fake service; the
/// underlying handle is built once at startup and shared across requests.
pub struct SentimentModel {
    client: Arc<dyn CompletionClient>,
}

impl SentimentModel {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Score a batch of reviews.
    ///
    /// One synchronous request/response cycle: no retries, no backoff, no
    /// caching of prior results.
    pub async fn analyze(&self, reviews: &[String]) -> Result<SentimentScores> {
        let prompt = build_prompt(reviews)?;
        let response = self.client.complete(SYSTEM_PROMPT, &prompt).await?;
        tracing::debug!("completion text: {}", response);
        parse_scores(&response)
    }
}

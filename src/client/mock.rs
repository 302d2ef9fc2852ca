//! Mock completion client for testing
//!
//! Provides a scripted implementation of `CompletionClient` for:
//! - Unit tests without network calls
//! - Asserting on the prompts the pipeline sends
//! - Simulating service failures

use super::CompletionClient;
use crate::error::{AnalysisError, Result};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;

/// One recorded completion call.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub system: String,
    pub user: String,
}

/// Mock completion client with canned responses.
#[derive(Clone, Default)]
pub struct MockCompletionClient {
    response: String,
    simulate_failure: bool,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockCompletionClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Respond to every call with the given text.
    pub fn with_response(mut self, response: &str) -> Self {
        self.response = response.to_string();
        self
    }

    /// Fail every call with an API error.
    pub fn with_failure(mut self) -> Self {
        self.simulate_failure = true;
        self
    }

    /// Number of completion calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// All recorded calls, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl CompletionClient for MockCompletionClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        self.calls.lock().push(RecordedCall {
            system: system.to_string(),
            user: user.to_string(),
        });

        if self.simulate_failure {
            return Err(AnalysisError::Api("simulated failure".to_string()));
        }

        Ok(self.response.trim().to_string())
    }
}

//! Completion service clients
//!
//! This module provides access to the hosted chat-completion API:
//! - `CompletionClient`: the trait the extraction pipeline depends on
//! - `GroqClient`: OpenAI-compatible chat-completions client
//! - `MockCompletionClient`: canned responses for tests

mod groq;
pub mod mock;

pub use groq::GroqClient;
pub use mock::MockCompletionClient;

use crate::error::Result;
use async_trait::async_trait;

/// Chat-completion service interface (allows mocking).
///
/// Implementations perform exactly one outbound call per invocation and
/// return the trimmed text of the first completion choice.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, system: &str, user: &str) -> Result<String>;
}

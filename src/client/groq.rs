//! Groq chat-completions client
//!
//! Speaks the OpenAI-compatible `/v1/chat/completions` protocol.

use super::CompletionClient;
use crate::config::LlmConfig;
use crate::error::{AnalysisError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Groq API client
pub struct GroqClient {
    http: Client,
    config: LlmConfig,
}

// ============ Request/Response types ============

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

impl GroqClient {
    pub fn new(config: LlmConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl CompletionClient for GroqClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user.to_string(),
                },
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        let resp = self
            .http
            .post(format!(
                "{}/v1/chat/completions",
                self.config.base_url.trim_end_matches('/')
            ))
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;
        tracing::debug!("completion raw response: {}", &text[..text.len().min(500)]);

        if !status.is_success() {
            return Err(AnalysisError::Api(format!(
                "{}: {}",
                status,
                &text[..text.len().min(200)]
            )));
        }

        let response: ChatResponse = serde_json::from_str(&text).map_err(|e| {
            AnalysisError::Api(format!(
                "unexpected completion payload: {} - response: {}",
                e,
                &text[..text.len().min(200)]
            ))
        })?;

        response
            .choices
            .first()
            .map(|c| c.message.content.trim().to_string())
            .ok_or_else(|| AnalysisError::Api("Empty response from completion service".into()))
    }
}

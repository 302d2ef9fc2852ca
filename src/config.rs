//! Configuration management

use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub llm: LlmConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the HTTP server binds to
    pub bind: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// API key for the completion service (falls back to GROQ_API_KEY)
    pub api_key: String,
    /// Model identifier
    pub model: String,
    /// OpenAI-compatible API base URL
    pub base_url: String,
    /// Sampling temperature (low, to favor deterministic-looking output)
    pub temperature: f32,
    /// Completion token ceiling
    pub max_tokens: u32,
}

impl Config {
    /// Load configuration from an optional file plus environment overrides.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref().to_str().unwrap_or("config");
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("SENTIMENT").separator("__"))
            .build()?;

        let mut config: Config = settings.try_deserialize()?;

        // The credential is read from the environment at startup; when it is
        // absent the completion call fails with an authentication error at
        // call time rather than failing here.
        if config.llm.api_key.is_empty() {
            config.llm.api_key = std::env::var("GROQ_API_KEY").unwrap_or_default();
        }

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8000".to_string(),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: "llama-3.1-70b-versatile".to_string(),
            base_url: "https://api.groq.com/openai".to_string(),
            temperature: 0.2,
            max_tokens: 150,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_llm_config() {
        let config = LlmConfig::default();
        assert_eq!(config.model, "llama-3.1-70b-versatile");
        assert_eq!(config.temperature, 0.2);
        assert_eq!(config.max_tokens, 150);
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn test_default_server_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind, "127.0.0.1:8000");
    }
}

use std::env;

use thiserror::Error;

pub const DEFAULT_CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "claude-3-7-sonnet-20250219";

const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub port: u16,
    /// Absent keys are surfaced as a 500 on the first chat request rather
    /// than refusing to start, matching the original deployment behavior.
    pub api_key: Option<String>,
    pub chat_completions_url: String,
    pub model: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid integer in env var {0}")]
    ParseInt(String),
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("failed to build completion http client: {0}")]
    HttpClient(String),
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let chat_completions_url = optional_trimmed_env("OPENAI_BASE_URL")
            .unwrap_or_else(|| DEFAULT_CHAT_COMPLETIONS_URL.to_string());
        if !chat_completions_url.starts_with("http://")
            && !chat_completions_url.starts_with("https://")
        {
            return Err(ConfigError::InvalidConfiguration(
                "OPENAI_BASE_URL must start with http:// or https://".to_string(),
            ));
        }

        Ok(Self {
            port: parse_u16_env("PORT", DEFAULT_PORT)?,
            api_key: optional_trimmed_env("OPENAI_API_KEY"),
            chat_completions_url,
            model: optional_trimmed_env("OPENAI_MODEL")
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        })
    }
}

fn parse_u16_env(key: &str, default: u16) -> Result<u16, ConfigError> {
    match optional_trimmed_env(key) {
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ConfigError::ParseInt(key.to_string())),
        None => Ok(default),
    }
}

fn optional_trimmed_env(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

use std::time::Duration;

use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::ConfigError;
use crate::models::Turn;

const COMPLETION_TIMEOUT_SECS: u64 = 30;

/// Reply used when the upstream response carries no usable choice. This is
/// deliberately not an error.
pub const FALLBACK_REPLY: &str = "Sorry, I could not get a response.";

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("OPENAI_API_KEY is not configured")]
    MissingApiKey,
    #[error("completion endpoint returned status {status}: {body}")]
    UpstreamHttp { status: u16, body: String },
    #[error("completion endpoint unreachable: {0}")]
    Unreachable(String),
}

/// Thin client for an OpenAI-compatible chat-completions endpoint. One
/// request per call, no retries; retry policy belongs to callers and none
/// of them implement one.
#[derive(Clone)]
pub struct CompletionClient {
    client: reqwest::Client,
    chat_completions_url: String,
    api_key: Option<String>,
}

impl CompletionClient {
    pub fn new(chat_completions_url: String, api_key: Option<String>) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(COMPLETION_TIMEOUT_SECS))
            .build()
            .map_err(|err| ConfigError::HttpClient(err.to_string()))?;

        Ok(Self {
            client,
            chat_completions_url,
            api_key,
        })
    }

    /// Sends the assembled message list and extracts the first choice's
    /// content. Timeouts and connection failures fold into `Unreachable`;
    /// non-2xx responses carry the upstream status and body verbatim.
    pub async fn complete(&self, model: &str, messages: &[Turn]) -> Result<String, CompletionError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(CompletionError::MissingApiKey);
        };

        let request_body = json!({
            "model": model,
            "messages": messages,
        });

        debug!(
            "sending completion request to {} with {} messages",
            self.chat_completions_url,
            messages.len()
        );

        let response = self
            .client
            .post(&self.chat_completions_url)
            .bearer_auth(api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|err| CompletionError::Unreachable(err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| CompletionError::Unreachable(err.to_string()))?;

        if !status.is_success() {
            return Err(CompletionError::UpstreamHttp {
                status: status.as_u16(),
                body,
            });
        }

        let Ok(parsed) = serde_json::from_str::<ChatCompletionResponse>(&body) else {
            warn!("completion response did not parse; using fallback reply");
            return Ok(FALLBACK_REPLY.to_string());
        };

        Ok(parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_else(|| {
                warn!("completion response had no usable choice; using fallback reply");
                FALLBACK_REPLY.to_string()
            }))
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatCompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionChoice {
    #[serde(default)]
    message: ChatCompletionMessage,
}

#[derive(Debug, Default, Deserialize)]
struct ChatCompletionMessage {
    #[serde(default)]
    content: Option<String>,
}

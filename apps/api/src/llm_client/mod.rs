//! Anthropic Messages API transport. The generation and optimization backends
//! reach the model only through `complete` and `call_json`.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// The model used for every LLM call.
pub const MODEL: &str = "claude-sonnet-4-5";
const MAX_TOKENS: u32 = 4096;
const MAX_RETRIES: u32 = 3;
const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct LlmResponse {
    content: Vec<ContentBlock>,
    usage: Usage,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: Option<String>,
}

/// Token accounting reported by the API for one call.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl LlmResponse {
    /// First text block, trimmed; `None` when the model said nothing.
    fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .filter(|b| b.block_type == "text")
            .find_map(|b| b.text.as_deref())
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

/// Outcome of a single HTTP round trip.
enum Attempt {
    Done(LlmResponse),
    Retry(LlmError),
}

/// Shared Anthropic Messages client used by the generation and optimization backends.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client, api_key })
    }

    /// Calls the LLM and returns the trimmed text together with token usage.
    /// Blank output is an error, never an empty success.
    pub async fn complete(&self, prompt: &str, system: &str) -> Result<(String, Usage), LlmError> {
        let response = self.call(prompt, system).await?;
        let text = response.text().ok_or(LlmError::EmptyContent)?;
        Ok((text.to_string(), response.usage))
    }

    /// Calls the LLM and deserializes its answer as JSON.
    /// The prompt must instruct the model to return valid JSON.
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        prompt: &str,
        system: &str,
    ) -> Result<T, LlmError> {
        let response = self.call(prompt, system).await?;
        let text = response.text().ok_or(LlmError::EmptyContent)?;
        serde_json::from_str(strip_json_fences(text)).map_err(LlmError::Parse)
    }

    /// Sends one user message, retrying 429 and 5xx answers with exponential backoff.
    async fn call(&self, prompt: &str, system: &str) -> Result<LlmResponse, LlmError> {
        let body = AnthropicRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            system,
            messages: vec![AnthropicMessage {
                role: "user",
                content: prompt,
            }],
        };

        let mut last_error = LlmError::RateLimited {
            retries: MAX_RETRIES,
        };

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                let delay = backoff(attempt);
                warn!(
                    "LLM attempt {attempt} failed ({last_error}); retrying in {}ms",
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            match self.attempt(&body).await? {
                Attempt::Done(response) => {
                    debug!(
                        "LLM call ok: input_tokens={}, output_tokens={}",
                        response.usage.input_tokens, response.usage.output_tokens
                    );
                    return Ok(response);
                }
                Attempt::Retry(e) => last_error = e,
            }
        }

        Err(last_error)
    }

    /// One round trip. Transport errors, 429 and 5xx are retryable; any other
    /// non-success status is returned as a hard error.
    async fn attempt(&self, body: &AnthropicRequest<'_>) -> Result<Attempt, LlmError> {
        let response = match self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return Ok(Attempt::Retry(LlmError::Http(e))),
        };

        let status = response.status();
        if status.is_success() {
            return Ok(Attempt::Done(response.json().await?));
        }

        let raw = response.text().await.unwrap_or_default();
        let error = LlmError::Api {
            status: status.as_u16(),
            message: serde_json::from_str::<AnthropicError>(&raw)
                .map(|e| e.error.message)
                .unwrap_or(raw),
        };

        if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
            Ok(Attempt::Retry(error))
        } else {
            Err(error)
        }
    }
}

/// 1s, 2s, 4s, ...
fn backoff(attempt: u32) -> Duration {
    Duration::from_millis(1000 << (attempt - 1))
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let Some(stripped) = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
    else {
        return text;
    };

    stripped
        .trim_start()
        .strip_suffix("```")
        .map(|s| s.trim())
        .unwrap_or(stripped.trim_start())
}

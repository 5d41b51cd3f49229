//! Anthropic Messages-API Oracle
//!
//! Hosted provider over HTTP. Failure classification follows the trait
//! contract: rate limits and server errors are `Transient`, everything
//! else client-side is `Permanent`. No automatic retry is performed here;
//! retry policy belongs to the caller.

use async_trait::async_trait;
use attest_domain::{Oracle, OracleError, OracleResponse};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Default API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";

/// Default HTTP timeout for one call (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

const API_VERSION: &str = "2023-06-01";

/// Hosted Oracle provider speaking the Anthropic Messages API.
pub struct AnthropicOracle {
    base_url: String,
    api_key: String,
    model: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: [Message<'a>; 1],
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
    usage: Usage,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
struct Usage {
    input_tokens: u64,
    output_tokens: u64,
}

impl AnthropicOracle {
    /// Create a provider against the public endpoint.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self, OracleError> {
        Self::with_base_url(DEFAULT_BASE_URL, api_key, model)
    }

    /// Create a provider against a custom endpoint (proxies, test servers).
    pub fn with_base_url(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self, OracleError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| OracleError::Permanent(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
            client,
        })
    }
}

#[async_trait]
impl Oracle for AnthropicOracle {
    async fn call(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        max_tokens: u32,
    ) -> Result<OracleResponse, OracleError> {
        let url = format!("{}/v1/messages", self.base_url);

        let body = MessagesRequest {
            model: &self.model,
            max_tokens,
            system: system_prompt,
            messages: [Message {
                role: "user",
                content: user_prompt,
            }],
        };

        debug!(
            "oracle call: model={}, prompt {} chars, max_tokens={}",
            self.model,
            user_prompt.len(),
            max_tokens
        );

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| OracleError::Transient(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            let message = format!("HTTP {}: {}", status, detail);
            return if status.as_u16() == 429 || status.is_server_error() {
                Err(OracleError::Transient(message))
            } else {
                Err(OracleError::Permanent(message))
            };
        }

        let parsed: MessagesResponse = response
            .json()
            .await
            .map_err(|e| OracleError::Permanent(format!("malformed response body: {}", e)))?;

        let text = parsed
            .content
            .iter()
            .filter(|block| block.kind == "text")
            .map(|block| block.text.as_str())
            .collect::<Vec<_>>()
            .join("");

        Ok(OracleResponse {
            text,
            input_tokens: parsed.usage.input_tokens,
            output_tokens: parsed.usage.output_tokens,
        })
    }
}

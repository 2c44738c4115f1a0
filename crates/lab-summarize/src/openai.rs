//! OpenAI Responses API client.

use std::fmt;
use std::time::Duration;

use lab_config::OpenAiConfig;
use serde::{Deserialize, Serialize};

use crate::error::SummarizeError;
use crate::remote::TextGenerator;
use crate::text::truncate_chars;

/// Longest response body kept in [`SummarizeError::Api`].
const MAX_ERROR_BODY_CHARS: usize = 300;

#[derive(Serialize)]
struct ResponsesRequest<'a> {
    model: &'a str,
    input: [InputMessage<'a>; 2],
    max_output_tokens: u32,
}

#[derive(Serialize)]
struct InputMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ResponsesResponse {
    /// Convenience aggregate some gateways include.
    #[serde(default)]
    output_text: Option<String>,
    #[serde(default)]
    output: Vec<OutputItem>,
}

#[derive(Deserialize)]
struct OutputItem {
    #[serde(default)]
    content: Option<Vec<ContentPart>>,
}

#[derive(Deserialize)]
struct ContentPart {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

impl ResponsesResponse {
    fn into_text(self) -> String {
        if let Some(text) = self.output_text.filter(|t| !t.trim().is_empty()) {
            return text;
        }
        self.output
            .into_iter()
            .flat_map(|item| item.content.unwrap_or_default())
            .filter(|part| part.kind == "output_text")
            .filter_map(|part| part.text)
            .collect()
    }
}

/// HTTP client for a Responses-compatible text generation endpoint.
pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl OpenAiClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SummarizeError::NotConfigured`] if no API key is set, or
    /// [`SummarizeError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &OpenAiConfig) -> Result<Self, SummarizeError> {
        if !config.is_configured() {
            return Err(SummarizeError::NotConfigured);
        }
        let http = reqwest::Client::builder()
            .user_agent(concat!("labtrack/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            api_key: config.api_key.trim().to_string(),
            model: config.model.clone(),
            base_url: config.base_url_trimmed().to_string(),
        })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Lightweight authenticated call used to verify the key works.
    ///
    /// # Errors
    ///
    /// Returns [`SummarizeError`] if the request fails or is rejected.
    pub async fn list_models(&self) -> Result<(), SummarizeError> {
        let url = format!("{}/models", self.base_url);
        let resp = self
            .http
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await?;
        ensure_success(resp).await?;
        Ok(())
    }
}

/// Pass a 2xx response through; turn anything else into [`SummarizeError::Api`].
async fn ensure_success(resp: reqwest::Response) -> Result<reqwest::Response, SummarizeError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(api_error(status, &body))
}

fn api_error(status: reqwest::StatusCode, body: &str) -> SummarizeError {
    let body = body.trim();
    let message = if body.is_empty() {
        status.canonical_reason().unwrap_or("no response body").to_string()
    } else {
        truncate_chars(body, MAX_ERROR_BODY_CHARS).to_string()
    };
    SummarizeError::Api {
        status: status.as_u16(),
        message,
    }
}

impl TextGenerator for OpenAiClient {
    async fn generate(
        &self,
        system_prompt: &str,
        user_text: &str,
        max_tokens: u32,
    ) -> Result<String, SummarizeError> {
        let url = format!("{}/responses", self.base_url);
        let request = ResponsesRequest {
            model: &self.model,
            input: [
                InputMessage {
                    role: "system",
                    content: system_prompt,
                },
                InputMessage {
                    role: "user",
                    content: user_text,
                },
            ],
            max_output_tokens: max_tokens,
        };

        tracing::debug!(model = %self.model, chars = user_text.len(), "requesting summary");
        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;
        let resp = ensure_success(resp).await?;

        let data: ResponsesResponse = resp
            .json()
            .await
            .map_err(|e| SummarizeError::Parse(format!("responses body: {e}")))?;
        Ok(data.into_text().trim().to_string())
    }
}

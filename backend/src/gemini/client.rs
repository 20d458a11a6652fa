//! Gemini API client
//!
//! Direct HTTP client for the Gemini `generateContent` endpoint.

use std::time::Duration;

use thiserror::Error;

use crate::config::GeminiConfig;
use crate::gemini::types::{GenerateContentRequest, GenerateContentResponse};

/// Errors returned by [`GeminiClient::generate`]
#[derive(Error, Debug)]
pub enum GeminiError {
    /// No API key configured
    #[error("Gemini API key is not configured")]
    MissingApiKey,

    /// Request could not be sent or the body could not be read
    #[error("Failed to reach Gemini API: {0}")]
    Request(String),

    /// Gemini answered HTTP 429
    #[error("Gemini API rate limit exceeded: {0}")]
    RateLimited(String),

    /// Gemini answered with another non-success status
    #[error("Gemini API returned error status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, for diagnostics
        body: String,
    },

    /// Response body was not the expected JSON
    #[error("Failed to parse JSON response from Gemini API: {0}")]
    Parse(String),

    /// Prompt was rejected by safety filters
    #[error("Gemini API blocked the prompt: {0}")]
    Blocked(String),

    /// Response parsed but contained no text
    #[error("Gemini API response contains no text")]
    EmptyResponse,
}

/// Shared Gemini client (connection pooling via `reqwest::Client`)
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Build a client from configuration
    ///
    /// # Errors
    /// Returns `GeminiError::Request` if the HTTP client cannot be built.
    pub fn new(config: &GeminiConfig) -> Result<Self, GeminiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GeminiError::Request(e.to_string()))?;

        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Model used for generation
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generate a text reply for `prompt`
    ///
    /// # Returns
    /// * `Ok(String)` - Text of the first candidate
    /// * `Err(GeminiError)` - Missing key, transport failure, error status,
    ///   unparseable body, blocked prompt, or a reply without text
    pub async fn generate(&self, prompt: &str) -> Result<String, GeminiError> {
        if self.api_key.is_empty() {
            return Err(GeminiError::MissingApiKey);
        }

        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        tracing::debug!(
            url = %url,
            model = %self.model,
            prompt_len = prompt.len(),
            "Calling Gemini API"
        );

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await
            .map_err(|e| GeminiError::Request(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GeminiError::Request(e.to_string()))?;

        if !status.is_success() {
            tracing::error!(
                status_code = status.as_u16(),
                error_body = %body,
                "Gemini API returned error status"
            );
            if status.as_u16() == 429 {
                return Err(GeminiError::RateLimited(body));
            }
            return Err(GeminiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse =
            serde_json::from_str(&body).map_err(|e| GeminiError::Parse(e.to_string()))?;

        if let Some(reason) = parsed
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_ref())
        {
            return Err(GeminiError::Blocked(reason.clone()));
        }

        let text = parsed.text().ok_or(GeminiError::EmptyResponse)?;

        tracing::debug!(
            response_len = text.len(),
            "Successfully received response from Gemini API"
        );

        Ok(text)
    }
}

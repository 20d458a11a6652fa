//! Chat API
//!
//! `POST /chat` turns one user message into one GreenBot reply.
//! Flow: user message -> prompt with plant knowledge -> Gemini -> `{"bot": reply}`

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::error::AppError;
use crate::gemini::GeminiError;
use crate::prompt::build_prompt;
use crate::state::SharedState;

/// Maximum message length in characters
pub const MAX_MESSAGE_LENGTH: usize = 10_000;

/// Reply used when Gemini answers without any text
pub const EMPTY_REPLY: &str = "Sorry, I couldn’t generate a response.";

#[allow(missing_docs)]
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[allow(missing_docs)]
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub bot: String,
}

/// Validate a chat message
///
/// # Returns
/// * `Ok(&str)` - The trimmed message
/// * `Err(AppError)` - Message is empty or too long
pub fn validate_message(message: &str) -> Result<&str, AppError> {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        return Err(AppError::InvalidRequest(
            "Message cannot be empty".to_string(),
        ));
    }
    if trimmed.chars().count() > MAX_MESSAGE_LENGTH {
        return Err(AppError::InvalidRequest(format!(
            "Message exceeds maximum length of {} characters",
            MAX_MESSAGE_LENGTH
        )));
    }
    Ok(trimmed)
}

/// Chat endpoint
///
/// This endpoint:
/// 1. Validates the message (non-empty, bounded length)
/// 2. Builds a prompt embedding the plant knowledge base
/// 3. Asks Gemini for a reply
/// 4. Returns `{"bot": reply}`; failures return `{"bot": "Error: ..."}` with an error status
pub async fn chat(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::InvalidRequest(e.body_text()))?;
    let message = validate_message(&request.message)?;

    info!(message_len = message.len(), "Chat request received");

    let prompt = build_prompt(&state.knowledge, message);
    let reply = match state.gemini.generate(&prompt).await {
        Ok(text) => text,
        Err(GeminiError::EmptyResponse) => EMPTY_REPLY.to_string(),
        Err(e) => {
            error!(error = %e, model = %state.gemini.model(), "Failed to generate chat reply");
            return Err(e.into());
        }
    };

    info!(response_len = reply.len(), "Chat reply generated");

    Ok(Json(ChatResponse { bot: reply }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_message_trims() {
        assert_eq!(validate_message("  list crops \n").unwrap(), "list crops");
    }

    #[test]
    fn test_validate_message_rejects_blank() {
        assert!(validate_message("").is_err());
        assert!(validate_message("   \t").is_err());
    }

    #[test]
    fn test_validate_message_rejects_too_long() {
        let long = "a".repeat(MAX_MESSAGE_LENGTH + 1);
        let err = validate_message(&long).unwrap_err();
        assert!(err.to_string().contains("maximum length"));

        let max = "a".repeat(MAX_MESSAGE_LENGTH);
        assert!(validate_message(&max).is_ok());
    }
}

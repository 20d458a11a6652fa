//! Error types and error handling for the application
//!
//! Errors convert to HTTP responses shaped like a chat reply,
//! `{"bot": "Error: ..."}`, so the chat widget never sees a second body format.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::gemini::GeminiError;

/// Application-level error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Request body is missing, malformed, or the message is unusable
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Reply generation failed
    #[error("{0}")]
    Gemini(#[from] GeminiError),

    /// Internal server error (catch-all for unexpected errors)
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// HTTP status this error maps to
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Gemini(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({
            "bot": format!("Error: {}", self),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::InvalidRequest("empty".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(GeminiError::MissingApiKey).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::from(anyhow::anyhow!("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_gemini_error_message_is_passed_through() {
        let err = AppError::from(GeminiError::Blocked("SAFETY".into()));
        assert_eq!(err.to_string(), "Gemini API blocked the prompt: SAFETY");
    }
}

//! Health check endpoint

use axum::Json;
use serde::{Deserialize, Serialize};

#[allow(missing_docs)]
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub message: String,
}

/// Report that the server is up
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        message: "GreenBot backend is healthy".to_string(),
    })
}

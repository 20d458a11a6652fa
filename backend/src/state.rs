//! Shared application state
//!
//! Built once at startup and shared read-only across request handlers.

use std::sync::Arc;

use serde_json::Value;

use crate::config::Config;
use crate::gemini::GeminiClient;
use crate::knowledge::load_knowledge;

/// State shared by all handlers
pub type SharedState = Arc<AppState>;

/// Application state
#[derive(Debug)]
pub struct AppState {
    /// Loaded configuration
    pub config: Config,
    /// Plant knowledge embedded into prompts
    pub knowledge: Value,
    /// Gemini client (shared connection pool)
    pub gemini: GeminiClient,
}

impl AppState {
    /// Build state from configuration, loading the knowledge file
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let knowledge = load_knowledge(&config.content.knowledge_file);
        Self::with_knowledge(config, knowledge)
    }

    /// Build state with an already-loaded knowledge document
    pub fn with_knowledge(config: Config, knowledge: Value) -> anyhow::Result<Self> {
        let gemini = GeminiClient::new(&config.gemini)?;
        Ok(Self {
            config,
            knowledge,
            gemini,
        })
    }

    /// Wrap into the handle passed to the router
    pub fn shared(self) -> SharedState {
        Arc::new(self)
    }
}

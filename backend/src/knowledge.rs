//! Plant knowledge base
//!
//! Loads the JSON document that is embedded into every chat prompt.

use serde_json::Value;
use std::path::Path;

/// Load the knowledge document from `path`
///
/// A missing or unparseable file is not fatal: the bot still answers, just
/// without the extra context, so an empty object is returned instead.
pub fn load_knowledge(path: &Path) -> Value {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Knowledge file not readable, using empty knowledge"
            );
            return empty();
        }
    };

    match serde_json::from_str(&contents) {
        Ok(value) => {
            tracing::info!(path = %path.display(), "Loaded plant knowledge");
            value
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Knowledge file is not valid JSON, using empty knowledge"
            );
            empty()
        }
    }
}

fn empty() -> Value {
    Value::Object(serde_json::Map::new())
}

// Chat data models
// Conversation turns shown in the chat window and the JSON wire format

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Who wrote a conversation turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Author {
    /// Text typed (or quick-replied) by the user
    User,
    /// Reply from the remote endpoint, or the fallback message
    Assistant,
}

impl Author {
    /// Avatar glyph rendered next to the message bubble
    pub fn avatar(&self) -> &'static str {
        match self {
            Author::User => "👤",
            Author::Assistant => "🌱",
        }
    }
}

/// One message in the conversation
///
/// Turns are created once and never modified; the order they are pushed in
/// is the order they are displayed in.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationTurn {
    author: Author,
    text: String,
    timestamp: DateTime<Local>,
}

impl ConversationTurn {
    /// Create a turn stamped with the current local time
    pub fn new(author: Author, text: impl Into<String>) -> Self {
        Self {
            author,
            text: text.into(),
            timestamp: Local::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Author::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Author::Assistant, text)
    }

    pub fn author(&self) -> Author {
        self.author
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    #[allow(dead_code)] // Used in tests
    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    /// Wall-clock label in 24-hour `HH:MM` form
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

/// Body of `POST /chat`
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
}

/// Successful `/chat` response body
#[derive(Debug, Deserialize)]
pub struct ChatReply {
    pub bot: String,
}

// Chat module
// Conversation model, remote chat client, and the bridge that ties them together

pub mod bridge;
pub mod client;
pub mod error;
pub mod models;

pub use bridge::ChatBridge;
pub use client::HttpChatClient;
pub use models::{Author, ConversationTurn};

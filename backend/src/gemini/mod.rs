//! Gemini API integration
//!
//! HTTP client and wire types for generating chat replies.

pub mod client;
pub mod types;

pub use client::{GeminiClient, GeminiError};

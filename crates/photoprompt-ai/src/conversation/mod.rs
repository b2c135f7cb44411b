//! Conversational opener generation.
//!
//! Primary path: the Gemini `generateContent` API. Fallback: a canned
//! opener chosen by keyword rules over the caption.

mod api;
mod client;
mod config;
pub mod fallback;
pub mod prompt;

pub use client::ConversationClient;
pub use config::{ConversationConfig, MAX_OUTPUT_TOKENS, TEMPERATURE};

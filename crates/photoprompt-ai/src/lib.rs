//! Remote model clients for photoprompt.
//!
//! Provides the two pipeline providers:
//! - [`CaptionProvider`]: image bytes to a caption, via a hosted vision
//!   captioning model, falling back to a caption built from file metadata
//! - [`ConversationProvider`]: caption to a conversational opener, via the
//!   Gemini `generateContent` API, falling back to keyword rules
//!
//! Neither provider ever fails. Remote errors are logged and replaced by a
//! deterministic local result tagged [`Sourced::Fallback`].

pub mod caption;
pub mod conversation;
mod http;

use async_trait::async_trait;
use photoprompt_common::ImageRef;

pub use caption::{CaptionClient, CaptionConfig};
pub use conversation::{ConversationClient, ConversationConfig};

/// Turns an image into a caption.
#[async_trait]
pub trait CaptionProvider: Send + Sync {
    /// `encoded` is the image bytes in standard base64.
    async fn caption(&self, image: &ImageRef, encoded: &str) -> Sourced<String>;
}

/// Turns a caption into a short conversational opener.
#[async_trait]
pub trait ConversationProvider: Send + Sync {
    async fn converse(&self, caption: &str) -> Sourced<String>;
}

/// Which path produced a provider result.
///
/// Downstream consumers treat both the same; the tag exists for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sourced<T> {
    Primary(T),
    Fallback(T),
}

impl<T> Sourced<T> {
    pub fn into_inner(self) -> T {
        match self {
            Sourced::Primary(v) | Sourced::Fallback(v) => v,
        }
    }

    pub fn value(&self) -> &T {
        match self {
            Sourced::Primary(v) | Sourced::Fallback(v) => v,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Sourced::Fallback(_))
    }

    pub fn source_name(&self) -> &'static str {
        match self {
            Sourced::Primary(_) => "primary",
            Sourced::Fallback(_) => "fallback",
        }
    }
}

/// Errors from a remote call. Never escapes a provider.
#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
    #[error("No credential configured for {0}")]
    MissingCredential(&'static str),
}

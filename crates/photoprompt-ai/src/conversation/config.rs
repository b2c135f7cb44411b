//! Conversation client configuration.

use std::time::Duration;

/// Sampling temperature sent with every request.
pub const TEMPERATURE: f64 = 0.7;

/// Upper bound on generated tokens; the opener is one or two sentences.
pub const MAX_OUTPUT_TOKENS: u32 = 150;

/// Conversation client configuration.
#[derive(Clone)]
pub struct ConversationConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl std::fmt::Debug for ConversationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversationConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ConversationConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: None,
            timeout: Duration::from_secs(20),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_api_key() {
        let config = ConversationConfig::new("https://example.com/gen").with_api_key("AIza-secret");
        let debug = format!("{config:?}");
        assert!(!debug.contains("AIza-secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}

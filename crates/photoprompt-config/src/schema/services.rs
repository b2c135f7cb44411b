//! Remote service endpoints: image captioning and conversation.

use serde::{Deserialize, Serialize};

/// Default request timeout for both remote services, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u32 = 20;

/// Vision captioning endpoint settings.
///
/// The bearer token is never stored in the file; `token_env` names the
/// environment variable it is read from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptioningConfig {
    pub endpoint: String,
    pub token_env: String,
    /// Request timeout in seconds (valid range: 1-120).
    pub timeout_secs: u32,
}

impl Default for CaptioningConfig {
    fn default() -> Self {
        Self {
            endpoint:
                "https://api-inference.huggingface.co/models/Salesforce/blip-image-captioning-large"
                    .into(),
            token_env: "HF_API_TOKEN".into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl CaptioningConfig {
    /// Read the bearer token from the configured environment variable.
    pub fn token(&self) -> Option<String> {
        read_token(&self.token_env)
    }
}

/// Generative-language endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversationConfig {
    pub endpoint: String,
    pub token_env: String,
    /// Request timeout in seconds (valid range: 1-120).
    pub timeout_secs: u32,
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self {
            endpoint:
                "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent"
                    .into(),
            token_env: "GEMINI_API_KEY".into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ConversationConfig {
    /// Read the API key from the configured environment variable.
    pub fn token(&self) -> Option<String> {
        read_token(&self.token_env)
    }
}

fn read_token(var: &str) -> Option<String> {
    std::env::var(var)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_reads_named_env_var() {
        let config = CaptioningConfig {
            token_env: "PHOTOPROMPT_TEST_CAPTION_TOKEN".into(),
            ..CaptioningConfig::default()
        };
        std::env::set_var("PHOTOPROMPT_TEST_CAPTION_TOKEN", "  hf_abc  ");
        assert_eq!(config.token().as_deref(), Some("hf_abc"));
        std::env::remove_var("PHOTOPROMPT_TEST_CAPTION_TOKEN");
    }

    #[test]
    fn blank_token_is_none() {
        let config = ConversationConfig {
            token_env: "PHOTOPROMPT_TEST_BLANK_KEY".into(),
            ..ConversationConfig::default()
        };
        std::env::set_var("PHOTOPROMPT_TEST_BLANK_KEY", "   ");
        assert_eq!(config.token(), None);
        std::env::remove_var("PHOTOPROMPT_TEST_BLANK_KEY");
    }

    #[test]
    fn missing_token_is_none() {
        let config = ConversationConfig {
            token_env: "PHOTOPROMPT_TEST_UNSET_KEY".into(),
            ..ConversationConfig::default()
        };
        assert_eq!(config.token(), None);
    }
}

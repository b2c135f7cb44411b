//! Configuration schema types for photoprompt.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod services;
mod system;

pub use services::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PhotopromptConfig {
    pub captioning: CaptioningConfig,
    pub conversation: ConversationConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_captioning_section() {
        let config = PhotopromptConfig::default();
        assert_eq!(
            config.captioning.endpoint,
            "https://api-inference.huggingface.co/models/Salesforce/blip-image-captioning-large"
        );
        assert_eq!(config.captioning.token_env, "HF_API_TOKEN");
        assert_eq!(config.captioning.timeout_secs, 20);
    }

    #[test]
    fn default_conversation_section() {
        let config = PhotopromptConfig::default();
        assert_eq!(
            config.conversation.endpoint,
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent"
        );
        assert_eq!(config.conversation.token_env, "GEMINI_API_KEY");
        assert_eq!(config.conversation.timeout_secs, 20);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let toml_str = r#"
[captioning]
timeout_secs = 30
"#;
        let config: PhotopromptConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.captioning.timeout_secs, 30);
        assert_eq!(config.captioning.token_env, "HF_API_TOKEN");
        assert_eq!(config.conversation.timeout_secs, 20);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn empty_toml_is_default() {
        let config: PhotopromptConfig = toml::from_str("").unwrap();
        assert_eq!(config.logging.level, LogLevel::Info);
        assert_eq!(config.conversation.token_env, "GEMINI_API_KEY");
    }
}

//! photoprompt configuration.
//!
//! TOML-based configuration for the captioning and conversation endpoints
//! and for logging. Every section uses serde defaults, so a partial (or
//! empty) file works out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use photoprompt_config::{config_to_json, load_config};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{CaptioningConfig, ConversationConfig, LogLevel, LoggingConfig, PhotopromptConfig};

use std::path::Path;

use photoprompt_common::ConfigError;

/// Load config from the platform default path, creating it if missing.
pub fn load_config() -> Result<PhotopromptConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path (e.g. a `--config` override).
pub fn load_config_from(path: &Path) -> Result<PhotopromptConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string (`--print-config`).
pub fn config_to_json(config: &PhotopromptConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

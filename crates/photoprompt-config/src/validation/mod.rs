//! Full configuration validation.
//!
//! Each section has its own check; this orchestrator calls them all and
//! collects errors into a single `ConfigError`.

mod helpers;
mod services;


use crate::schema::PhotopromptConfig;
use photoprompt_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &PhotopromptConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    services::validate_captioning(&mut errors, config);
    services::validate_conversation(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

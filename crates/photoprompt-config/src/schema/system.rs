//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// `tracing` filter directive scoped to the photoprompt crates.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Debug => "photoprompt=debug",
            LogLevel::Info => "photoprompt=info",
            LogLevel::Warning => "photoprompt=warn",
            LogLevel::Error => "photoprompt=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

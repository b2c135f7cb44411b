//! Captioning client struct, request building, and response parsing.

use serde_json::Value;

use crate::http::build_client;
use crate::AiError;

use super::config::CaptionConfig;

/// Hosted image-captioning client.
pub struct CaptionClient {
    pub(crate) config: CaptionConfig,
    pub(crate) http: reqwest::Client,
}

impl CaptionClient {
    pub fn new(config: CaptionConfig) -> Result<Self, AiError> {
        let http = build_client(config.timeout)?;
        Ok(Self { config, http })
    }

    /// Build the JSON request body: `{ "inputs": { "image": <base64> } }`.
    pub(crate) fn build_request_body(encoded: &str) -> Value {
        serde_json::json!({
            "inputs": { "image": encoded }
        })
    }

    /// Extract the caption from either an array of `{generated_text}`
    /// objects or a single `{generated_text}` object.
    pub(crate) fn parse_response(json: &Value) -> Result<String, AiError> {
        let found = match json {
            Value::Array(items) => items.iter().find_map(generated_text),
            Value::Object(_) => generated_text(json),
            _ => None,
        };
        found.ok_or_else(|| AiError::ParseError("no generated_text in response".to_string()))
    }
}

fn generated_text(item: &Value) -> Option<String> {
    item.get("generated_text")?
        .as_str()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(String::from)
}

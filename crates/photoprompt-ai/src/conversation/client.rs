//! Conversation client struct, request building, and response parsing.

use serde_json::Value;

use crate::http::build_client;
use crate::AiError;

use super::config::{ConversationConfig, MAX_OUTPUT_TOKENS, TEMPERATURE};

/// Gemini `generateContent` client.
pub struct ConversationClient {
    pub(crate) config: ConversationConfig,
    pub(crate) http: reqwest::Client,
}

impl ConversationClient {
    pub fn new(config: ConversationConfig) -> Result<Self, AiError> {
        let http = build_client(config.timeout)?;
        Ok(Self { config, http })
    }

    /// Build the JSON request body for a single-turn prompt.
    pub(crate) fn build_request_body(prompt: &str) -> Value {
        serde_json::json!({
            "contents": [{
                "parts": [{ "text": prompt }]
            }],
            "generationConfig": {
                "temperature": TEMPERATURE,
                "maxOutputTokens": MAX_OUTPUT_TOKENS,
            }
        })
    }

    /// Extract `candidates[0].content.parts[0].text`.
    pub(crate) fn parse_response(json: &Value) -> Result<String, AiError> {
        let first = json["candidates"]
            .as_array()
            .and_then(|candidates| candidates.first())
            .ok_or_else(|| AiError::ParseError("no candidates in response".to_string()))?;

        let part = first["content"]["parts"]
            .as_array()
            .and_then(|parts| parts.first())
            .ok_or_else(|| AiError::ParseError("no content parts in candidate".to_string()))?;

        part["text"]
            .as_str()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(String::from)
            .ok_or_else(|| AiError::ParseError("no text in first part".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_body_shape() {
        let body = ConversationClient::build_request_body("hello");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(body["generationConfig"]["temperature"], 0.7);
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 150);
    }

    #[test]
    fn parses_first_candidate_first_part() {
        let json = json!({
            "candidates": [
                { "content": { "parts": [{ "text": "Cute dog! What's its name?" }, { "text": "ignored" }] } },
                { "content": { "parts": [{ "text": "second candidate" }] } }
            ]
        });
        assert_eq!(
            ConversationClient::parse_response(&json).unwrap(),
            "Cute dog! What's its name?"
        );
    }

    #[test]
    fn rejects_missing_pieces() {
        assert!(ConversationClient::parse_response(&json!({})).is_err());
        assert!(ConversationClient::parse_response(&json!({ "candidates": [] })).is_err());
        assert!(ConversationClient::parse_response(&json!({
            "candidates": [{ "finishReason": "SAFETY" }]
        }))
        .is_err());
        assert!(ConversationClient::parse_response(&json!({
            "candidates": [{ "content": { "parts": [] } }]
        }))
        .is_err());
        assert!(ConversationClient::parse_response(&json!({
            "candidates": [{ "content": { "parts": [{ "text": "  " }] } }]
        }))
        .is_err());
    }
}

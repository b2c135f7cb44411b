//! ConversationProvider implementation for ConversationClient.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::http::{check_status, read_json, transport_error};
use crate::{AiError, ConversationProvider, Sourced};

use super::client::ConversationClient;
use super::fallback::keyword_opener;
use super::prompt::build_prompt;

impl ConversationClient {
    async fn request_opener(&self, caption: &str) -> Result<String, AiError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(AiError::MissingCredential("conversation"))?;

        debug!(endpoint = %self.config.endpoint, "Conversation request");

        let response = self
            .http
            .post(&self.config.endpoint)
            .query(&[("key", api_key)])
            .header("content-type", "application/json")
            .json(&Self::build_request_body(&build_prompt(caption)))
            .send()
            .await
            .map_err(transport_error)?;

        let json = read_json(check_status(response).await?).await?;
        Self::parse_response(&json)
    }
}

#[async_trait]
impl ConversationProvider for ConversationClient {
    async fn converse(&self, caption: &str) -> Sourced<String> {
        match self.request_opener(caption).await {
            Ok(opener) => Sourced::Primary(opener),
            Err(e) => {
                warn!(error = %e, "conversation failed, using keyword opener");
                Sourced::Fallback(keyword_opener(caption).to_string())
            }
        }
    }
}

//! CaptionProvider implementation for CaptionClient.

use async_trait::async_trait;
use photoprompt_common::ImageRef;
use tracing::{debug, warn};

use crate::http::{check_status, read_json, transport_error};
use crate::{AiError, CaptionProvider, Sourced};

use super::client::CaptionClient;
use super::fallback::metadata_caption;

impl CaptionClient {
    async fn request_caption(&self, encoded: &str) -> Result<String, AiError> {
        let token = self
            .config
            .token
            .as_deref()
            .ok_or(AiError::MissingCredential("captioning"))?;

        debug!(endpoint = %self.config.endpoint, size = encoded.len(), "Caption request");

        let response = self
            .http
            .post(&self.config.endpoint)
            .header("Authorization", format!("Bearer {token}"))
            .header("content-type", "application/json")
            .json(&Self::build_request_body(encoded))
            .send()
            .await
            .map_err(transport_error)?;

        let json = read_json(check_status(response).await?).await?;
        Self::parse_response(&json)
    }
}

#[async_trait]
impl CaptionProvider for CaptionClient {
    async fn caption(&self, image: &ImageRef, encoded: &str) -> Sourced<String> {
        match self.request_caption(encoded).await {
            Ok(caption) => Sourced::Primary(caption),
            Err(e) => {
                warn!(image = %image.id(), error = %e, "captioning failed, using metadata caption");
                Sourced::Fallback(metadata_caption(image, chrono::Local::now().naive_local()))
            }
        }
    }
}

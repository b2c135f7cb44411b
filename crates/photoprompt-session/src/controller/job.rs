//! One analysis run, detached from the controller.

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use photoprompt_ai::caption::fallback::LAST_RESORT_CAPTION;
use photoprompt_ai::conversation::fallback::GENERIC_OPENER;
use photoprompt_ai::{CaptionProvider, ConversationProvider};
use photoprompt_common::{ImageError, ImageId, ImageRef};
use tracing::{info, warn};

use crate::event::SessionEvent;
use crate::source::ImageReader;

/// Work for a single image, tagged with that image's id.
pub struct AnalysisJob {
    image: ImageRef,
    reader: Arc<dyn ImageReader>,
    captioner: Arc<dyn CaptionProvider>,
    conversation: Arc<dyn ConversationProvider>,
}

/// Result of [`AnalysisJob::run`], still tagged with its image id.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    Completed {
        image_id: ImageId,
        caption: String,
        prompt: String,
    },
    ReadFailed {
        image_id: ImageId,
        error: ImageError,
    },
}

impl AnalysisOutcome {
    pub fn image_id(&self) -> &ImageId {
        match self {
            AnalysisOutcome::Completed { image_id, .. }
            | AnalysisOutcome::ReadFailed { image_id, .. } => image_id,
        }
    }

    pub(crate) fn into_event(self) -> SessionEvent {
        match self {
            AnalysisOutcome::Completed {
                image_id,
                caption,
                prompt,
            } => SessionEvent::AnalysisCompleted {
                image_id,
                caption,
                prompt,
            },
            AnalysisOutcome::ReadFailed { image_id, error } => {
                SessionEvent::ImageReadFailed { image_id, error }
            }
        }
    }
}

impl AnalysisJob {
    pub(crate) fn new(
        image: ImageRef,
        reader: Arc<dyn ImageReader>,
        captioner: Arc<dyn CaptionProvider>,
        conversation: Arc<dyn ConversationProvider>,
    ) -> Self {
        Self {
            image,
            reader,
            captioner,
            conversation,
        }
    }

    pub fn image(&self) -> &ImageRef {
        &self.image
    }

    /// Read, caption, then converse. The opener request starts only after
    /// the caption has resolved, since the prompt embeds it.
    pub async fn run(self) -> AnalysisOutcome {
        let image_id = self.image.id().clone();

        let bytes = match self.reader.read(&self.image).await {
            Ok(bytes) => bytes,
            Err(error) => return AnalysisOutcome::ReadFailed { image_id, error },
        };
        let encoded = BASE64.encode(&bytes);

        let caption = self.captioner.caption(&self.image, &encoded).await;
        let caption_source = caption.source_name();
        let caption = non_blank(caption.into_inner(), LAST_RESORT_CAPTION, "caption");

        let prompt = self.conversation.converse(&caption).await;
        let prompt_source = prompt.source_name();
        let prompt = non_blank(prompt.into_inner(), GENERIC_OPENER, "opener");

        info!(image = %image_id, caption_source, prompt_source, "analysis finished");

        AnalysisOutcome::Completed {
            image_id,
            caption,
            prompt,
        }
    }
}

/// Providers must not return blank text; substitute `default` if one does.
fn non_blank(value: String, default: &str, what: &'static str) -> String {
    if value.trim().is_empty() {
        warn!(what, "provider returned blank text, using default");
        default.to_string()
    } else {
        value
    }
}

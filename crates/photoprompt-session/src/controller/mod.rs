//! The single owner of the live session.

mod job;


pub use job::{AnalysisJob, AnalysisOutcome};

use std::sync::Arc;

use photoprompt_ai::{CaptionProvider, ConversationProvider};
use photoprompt_common::{ImageError, ImageOrigin, ImageRef, Notification, NotificationQueue};
use tracing::{debug, info, warn};

use crate::event::SessionEvent;
use crate::recorder::{self, SavedResponse};
use crate::session::Session;
use crate::source::{ImageReader, ImageSource};
use crate::stage::Stage;
use crate::transition::transition;

/// What happened when the user asked for a new image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcquireOutcome {
    Selected,
    Cancelled,
    PermissionDenied,
}

/// Drives one session through the pipeline.
///
/// Analysis is split into [`begin_analysis`](Self::begin_analysis),
/// [`AnalysisJob::run`] and [`complete`](Self::complete) so the controller
/// is free while remote calls are pending: a new selection or a clear can
/// happen in between, and the job's result is then discarded on arrival.
pub struct PipelineController {
    session: Session,
    reader: Arc<dyn ImageReader>,
    captioner: Arc<dyn CaptionProvider>,
    conversation: Arc<dyn ConversationProvider>,
    notifications: NotificationQueue,
}

impl PipelineController {
    pub fn new(
        reader: Arc<dyn ImageReader>,
        captioner: Arc<dyn CaptionProvider>,
        conversation: Arc<dyn ConversationProvider>,
    ) -> Self {
        Self {
            session: Session::default(),
            reader,
            captioner,
            conversation,
            notifications: NotificationQueue::default(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn stage(&self) -> Stage {
        self.session.stage()
    }

    /// Pending user-facing notices (permission prompts, saves, read errors).
    pub fn notifications(&mut self) -> &mut NotificationQueue {
        &mut self.notifications
    }

    fn apply(&mut self, event: SessionEvent) -> bool {
        let name = event.name();
        let from = self.session.stage();
        let result = transition(&self.session, event);
        if result.accepted {
            debug!(event = name, %from, to = %result.session.stage(), "session transition");
        } else {
            debug!(event = name, stage = %from, "event ignored");
        }
        self.session = result.session;
        result.accepted
    }

    pub fn select_image(&mut self, image: ImageRef) {
        info!(image = %image.id(), origin = %image.origin(), "image selected");
        self.apply(SessionEvent::ImageSelected(image));
    }

    /// Ask `source` for an image and select it.
    ///
    /// A refused permission becomes a warning notice and leaves the session
    /// untouched. Other source errors are returned to the caller.
    pub async fn acquire(
        &mut self,
        source: &dyn ImageSource,
        origin: ImageOrigin,
    ) -> Result<AcquireOutcome, ImageError> {
        let picked = match origin {
            ImageOrigin::Gallery => source.select_from_gallery().await,
            ImageOrigin::Camera => source.capture_from_camera().await,
        };

        match picked {
            Ok(Some(image)) => {
                self.select_image(image);
                Ok(AcquireOutcome::Selected)
            }
            Ok(None) => {
                debug!(%origin, "image selection cancelled");
                Ok(AcquireOutcome::Cancelled)
            }
            Err(ImageError::PermissionDenied(reason)) => {
                warn!(%origin, %reason, "permission denied");
                self.notifications.push(Notification::warning(
                    "Permission needed",
                    format!("Access to the {origin} was not granted."),
                ));
                Ok(AcquireOutcome::PermissionDenied)
            }
            Err(e) => Err(e),
        }
    }

    /// Move to `Analyzing` and hand out the work for the current image.
    ///
    /// Returns `None` when Analyze is not available: no image, already
    /// analyzing, or the session is in any stage other than `ImageSelected`.
    pub fn begin_analysis(&mut self) -> Option<AnalysisJob> {
        let image = self.session.image().cloned()?;
        if !self.apply(SessionEvent::AnalyzeRequested) {
            return None;
        }
        Some(AnalysisJob::new(
            image,
            Arc::clone(&self.reader),
            Arc::clone(&self.captioner),
            Arc::clone(&self.conversation),
        ))
    }

    /// Apply a finished job. Returns `false` if the result was stale.
    pub fn complete(&mut self, outcome: AnalysisOutcome) -> bool {
        let read_error = match &outcome {
            AnalysisOutcome::ReadFailed { error, .. } => Some(error.to_string()),
            AnalysisOutcome::Completed { .. } => None,
        };

        let image_id = outcome.image_id().clone();
        let accepted = self.apply(outcome.into_event());
        if !accepted {
            if self.session.is_current(&image_id) && self.stage() == Stage::Analyzing {
                warn!(image = %image_id, "analysis result rejected, session left analyzing");
            } else {
                debug!(image = %image_id, "discarding stale analysis result");
            }
            return false;
        }

        if let Some(reason) = read_error {
            warn!(%reason, "image could not be read");
            self.notifications
                .push(Notification::error("Couldn't read image", reason));
        }
        true
    }

    /// Run the whole analysis for the current image.
    pub async fn analyze(&mut self) -> bool {
        let Some(job) = self.begin_analysis() else {
            return false;
        };
        let outcome = job.run().await;
        self.complete(outcome)
    }

    pub fn edit_response(&mut self, text: impl Into<String>) -> bool {
        self.apply(SessionEvent::ResponseEdited(text.into()))
    }

    /// Accept the reply, acknowledge it and start a fresh session.
    pub fn save(&mut self) -> Option<SavedResponse> {
        let saved = recorder::record(&self.session)?;
        if !self.apply(SessionEvent::Saved) {
            return None;
        }
        info!(image = %saved.image.id(), chars = saved.response.chars().count(), "response saved");
        self.notifications.push(saved.acknowledgement());
        Some(saved)
    }

    pub fn clear(&mut self) {
        self.apply(SessionEvent::Cleared);
    }
}

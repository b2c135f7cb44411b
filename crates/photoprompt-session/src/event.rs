use photoprompt_common::{ImageError, ImageId, ImageRef};

/// Everything that can happen to a session.
///
/// Completion events carry the id of the image their work was started for.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    ImageSelected(ImageRef),
    AnalyzeRequested,
    AnalysisCompleted {
        image_id: ImageId,
        caption: String,
        prompt: String,
    },
    ImageReadFailed {
        image_id: ImageId,
        error: ImageError,
    },
    ResponseEdited(String),
    Saved,
    Cleared,
}

impl SessionEvent {
    pub fn name(&self) -> &'static str {
        match self {
            SessionEvent::ImageSelected(_) => "image_selected",
            SessionEvent::AnalyzeRequested => "analyze_requested",
            SessionEvent::AnalysisCompleted { .. } => "analysis_completed",
            SessionEvent::ImageReadFailed { .. } => "image_read_failed",
            SessionEvent::ResponseEdited(_) => "response_edited",
            SessionEvent::Saved => "saved",
            SessionEvent::Cleared => "cleared",
        }
    }
}

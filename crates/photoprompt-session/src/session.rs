//! The single session aggregate.

use photoprompt_common::{ImageError, ImageId, ImageRef};

use crate::stage::Stage;

/// Everything known about the image currently moving through the pipeline.
///
/// Fields are only changed by [`crate::transition`], which keeps the
/// invariants: a caption implies an image, an opener implies a caption.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub(crate) image: Option<ImageRef>,
    pub(crate) caption: Option<String>,
    pub(crate) prompt: Option<String>,
    pub(crate) response: String,
    pub(crate) stage: Stage,
    pub(crate) last_error: Option<ImageError>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn image(&self) -> Option<&ImageRef> {
        self.image.as_ref()
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    /// The conversational opener derived from the caption.
    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn last_error(&self) -> Option<&ImageError> {
        self.last_error.as_ref()
    }

    /// True when `id` names the image this session is working on.
    pub fn is_current(&self, id: &ImageId) -> bool {
        self.image.as_ref().is_some_and(|image| image.id() == id)
    }

    /// Whether the Save affordance should be enabled.
    pub fn can_save(&self) -> bool {
        self.stage == Stage::AnalysisReady
            && self.image.is_some()
            && self.caption.is_some()
            && self.prompt.is_some()
            && !self.response.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_idle_and_empty() {
        let session = Session::new();
        assert_eq!(session.stage(), Stage::Idle);
        assert!(session.image().is_none());
        assert!(session.caption().is_none());
        assert!(session.prompt().is_none());
        assert!(session.response().is_empty());
        assert!(session.last_error().is_none());
        assert!(!session.can_save());
    }

    #[test]
    fn is_current_matches_by_identity() {
        let image = ImageRef::from_gallery("/photos/a.png");
        let other = ImageRef::from_gallery("/photos/a.png");
        let session = Session {
            image: Some(image.clone()),
            stage: Stage::ImageSelected,
            ..Session::default()
        };
        assert!(session.is_current(image.id()));
        assert!(!session.is_current(other.id()));
        assert!(!Session::default().is_current(image.id()));
    }

    #[test]
    fn can_save_requires_trimmed_response() {
        let mut session = Session {
            image: Some(ImageRef::from_gallery("/photos/a.png")),
            caption: Some("a cat".into()),
            prompt: Some("Tell me about your cat.".into()),
            response: "   \n".into(),
            stage: Stage::AnalysisReady,
            last_error: None,
        };
        assert!(!session.can_save());
        session.response = " Her name is Miso ".into();
        assert!(session.can_save());
    }
}

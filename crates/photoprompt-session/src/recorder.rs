//! Accepting the user's reply.
//!
//! Nothing is persisted: a save is acknowledged to the user and the session
//! starts over.

use photoprompt_common::{ImageRef, Notification};

use crate::session::Session;

/// What the user saved, handed back to the caller for display.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedResponse {
    pub image: ImageRef,
    pub caption: String,
    pub prompt: String,
    pub response: String,
}

impl SavedResponse {
    pub fn acknowledgement(&self) -> Notification {
        Notification::info("Response saved", "Thanks for sharing!")
    }
}

/// Validate the session and build the receipt for a save.
///
/// Returns `None` when Save is not available: wrong stage, missing caption
/// or opener, or a reply that is blank after trimming.
pub fn record(session: &Session) -> Option<SavedResponse> {
    if !session.can_save() {
        return None;
    }
    Some(SavedResponse {
        image: session.image()?.clone(),
        caption: session.caption()?.to_string(),
        prompt: session.prompt()?.to_string(),
        response: session.response().trim().to_string(),
    })
}

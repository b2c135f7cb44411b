//! Pure session transitions.
//!
//! `transition(&session, event)` never mutates its input. Illegal events
//! return the session unchanged with `accepted = false`; callers treat that
//! as a no-op rather than an error.

use crate::event::SessionEvent;
use crate::session::Session;
use crate::stage::Stage;

/// Result of applying one event.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub session: Session,
    pub accepted: bool,
}

impl Transition {
    fn accept(session: Session) -> Self {
        Self {
            session,
            accepted: true,
        }
    }

    fn reject(session: &Session) -> Self {
        Self {
            session: session.clone(),
            accepted: false,
        }
    }
}

pub fn transition(session: &Session, event: SessionEvent) -> Transition {
    match event {
        // A new selection replaces everything, from any stage. A pending
        // analysis for the old image becomes stale.
        SessionEvent::ImageSelected(image) => Transition::accept(Session {
            image: Some(image),
            stage: Stage::ImageSelected,
            ..Session::default()
        }),

        SessionEvent::AnalyzeRequested => {
            if session.stage.can_analyze() && session.image.is_some() {
                Transition::accept(Session {
                    stage: Stage::Analyzing,
                    ..session.clone()
                })
            } else {
                Transition::reject(session)
            }
        }

        SessionEvent::AnalysisCompleted {
            image_id,
            caption,
            prompt,
        } => {
            let fresh = session.stage == Stage::Analyzing && session.is_current(&image_id);
            if !fresh || caption.trim().is_empty() || prompt.trim().is_empty() {
                return Transition::reject(session);
            }
            Transition::accept(Session {
                caption: Some(caption),
                prompt: Some(prompt),
                response: String::new(),
                stage: Stage::AnalysisReady,
                last_error: None,
                ..session.clone()
            })
        }

        SessionEvent::ImageReadFailed { image_id, error } => {
            if session.stage != Stage::Analyzing || !session.is_current(&image_id) {
                return Transition::reject(session);
            }
            Transition::accept(Session {
                stage: Stage::Error,
                last_error: Some(error),
                ..session.clone()
            })
        }

        SessionEvent::ResponseEdited(text) => {
            if session.stage != Stage::AnalysisReady {
                return Transition::reject(session);
            }
            Transition::accept(Session {
                response: text,
                ..session.clone()
            })
        }

        SessionEvent::Saved => {
            if session.can_save() {
                Transition::accept(Session::default())
            } else {
                Transition::reject(session)
            }
        }

        SessionEvent::Cleared => Transition::accept(Session::default()),
    }
}

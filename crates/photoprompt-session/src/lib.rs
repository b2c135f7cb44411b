//! Photo-to-conversation session for photoprompt.
//!
//! A [`Session`] tracks one selected image through captioning, opener
//! generation and the user's reply. [`transition`] is the single authority
//! on which events are legal in which [`Stage`]; [`PipelineController`]
//! owns the live session and runs the remote stages as tagged
//! [`AnalysisJob`]s so late results for a replaced image are dropped.

pub mod controller;
pub mod event;
pub mod recorder;
pub mod session;
pub mod source;
pub mod stage;
pub mod transition;

pub use controller::{AcquireOutcome, AnalysisJob, AnalysisOutcome, PipelineController};
pub use event::SessionEvent;
pub use recorder::SavedResponse;
pub use session::Session;
pub use source::{FileImageReader, ImageReader, ImageSource};
pub use stage::Stage;
pub use transition::{transition, Transition};

//! Image captioning.
//!
//! Primary path: a hosted vision-captioning model behind a bearer token
//! (Hugging Face inference style). Fallback: a caption synthesized from
//! the image's file extension and the current local time.

mod api;
mod client;
mod config;
pub mod fallback;

pub use client::CaptionClient;
pub use config::CaptionConfig;

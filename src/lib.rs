//! Caption segmentation and layout engine.
//!
//! Turns word-level speech timestamps into a karaoke-style render plan:
//! words are grouped into caption lines, laid out inside a band of the video
//! frame, and each word gets a highlight overlay for its own speech window.

pub mod cli;
pub mod config;
pub mod error;
pub mod highlight;
pub mod layout;
pub mod pipeline;
pub mod plan;
pub mod segmentation;
pub mod transcript;
pub mod types;

pub use error::{CaptionError, Result};
pub use pipeline::CaptionPipeline;

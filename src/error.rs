//! Error types shared by every caption pipeline stage.

use thiserror::Error;

/// Convenient alias for results returned by caption modules.
pub type Result<T> = std::result::Result<T, CaptionError>;

#[derive(Error, Debug)]
pub enum CaptionError {
    /// Malformed, unsorted or negative-duration word entry.
    #[error("invalid word at index {index}: {reason}")]
    Input { index: usize, reason: String },

    /// The font metrics capability failed while laying out a line.
    #[error("failed to measure {text:?} on line {line}: {reason}")]
    Measurement {
        line: usize,
        text: String,
        reason: String,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl CaptionError {
    pub(crate) fn input(index: usize, reason: impl Into<String>) -> Self {
        Self::Input {
            index,
            reason: reason.into(),
        }
    }

    pub(crate) fn config(reason: impl Into<String>) -> Self {
        Self::Config(reason.into())
    }
}

//! Core types for the captioneer caption pipeline

use serde::{Deserialize, Serialize};

use crate::error::{CaptionError, Result};

/// A recognized word with its speech interval in seconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    #[serde(rename = "word")]
    pub text: String,
    pub start: f64, // seconds
    pub end: f64,   // seconds
}

impl Word {
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// A contiguous group of words displayed together as one caption
///
/// Always holds at least one word; `start`, `end` and `text` are derived from
/// the words when the line is built and never change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    words: Vec<Word>,
    start: f64,
    end: f64,
    text: String,
}

impl Line {
    /// Build a line from its words, or `None` when there are no words
    pub fn from_words(words: Vec<Word>) -> Option<Self> {
        let start = words.first()?.start;
        let end = words.last()?.end;
        let text = join_words(&words);
        Some(Self {
            words,
            start,
            end,
            text,
        })
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Words joined by single spaces, the way a caption line reads on screen
pub fn join_words(words: &[Word]) -> String {
    words
        .iter()
        .map(|word| word.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Target video frame dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSize {
    pub width: u32,
    pub height: u32,
}

impl FrameSize {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(CaptionError::config(format!(
                "frame dimensions must be non-zero, got {}x{}",
                width, height
            )));
        }
        Ok(Self { width, height })
    }
}

/// Where the first caption row sits vertically within the frame
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum VerticalAnchor {
    /// Two thirds down the frame (captions over a blurred background)
    #[default]
    TwoThirds,
    /// Halfway down the frame (captions stacked above a retention clip)
    Half,
}

impl VerticalAnchor {
    pub fn fraction(self) -> f64 {
        match self {
            Self::TwoThirds => 2.0 / 3.0,
            Self::Half => 1.0 / 2.0,
        }
    }
}

/// Rendered size of a piece of text in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextSize {
    pub width: f64,
    pub height: f64,
}

impl TextSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Base draw geometry for one word of a line
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionedWord {
    pub word: Word,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// The space glyph drawn right after a word
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceToken {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Overlay draw of a word, active only while that word is spoken
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightEvent {
    pub word: Word,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub active_from: f64,
    pub active_to: f64,
}

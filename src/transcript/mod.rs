//! Transcript module - validates word-level timestamps before segmentation
//!
//! Accepts the flat `[{word, start, end}]` array written by the transcription
//! tooling, or a Whisper-style result whose segments carry the words.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{CaptionError, Result};
use crate::types::Word;

/// A word-timestamp entry exactly as produced by speech recognition
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawWord {
    #[serde(alias = "text")]
    pub word: String,
    pub start: f64,
    pub end: f64,
}

impl RawWord {
    pub fn new(word: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            word: word.into(),
            start,
            end,
        }
    }
}

/// Parse transcript JSON into raw entries, flattening Whisper segments in order
///
/// Each word entry is decoded on its own so a malformed one is reported with
/// its position in the flattened sequence.
pub fn parse_transcript(raw: &str) -> Result<Vec<RawWord>> {
    let document: Value = serde_json::from_str(raw)?;
    let entries = word_entries(document)?;
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            serde_json::from_value(entry)
                .map_err(|err| CaptionError::input(index, err.to_string()))
        })
        .collect()
}

fn word_entries(document: Value) -> Result<Vec<Value>> {
    match document {
        Value::Array(entries) => Ok(entries),
        Value::Object(mut object) => {
            let segments = match object.remove("segments") {
                Some(Value::Array(segments)) => segments,
                _ => {
                    return Err(CaptionError::input(
                        0,
                        "expected a word array or an object with a \"segments\" array",
                    ))
                }
            };
            let mut entries = Vec::new();
            for segment in segments {
                match segment {
                    Value::Object(mut segment) => match segment.remove("words") {
                        Some(Value::Array(words)) => entries.extend(words),
                        None | Some(Value::Null) => {}
                        Some(other) => {
                            return Err(CaptionError::input(
                                entries.len(),
                                format!("segment words must be an array, got {}", other),
                            ))
                        }
                    },
                    other => {
                        return Err(CaptionError::input(
                            entries.len(),
                            format!("segment must be an object, got {}", other),
                        ))
                    }
                }
            }
            Ok(entries)
        }
        other => Err(CaptionError::input(
            0,
            format!("expected a word array or a transcription result, got {}", other),
        )),
    }
}

pub fn load_transcript(path: &Path) -> Result<Vec<RawWord>> {
    let raw = std::fs::read_to_string(path)?;
    parse_transcript(&raw)
}

/// Pure function to validate raw entries into the canonical word sequence
///
/// Text is trimmed. Entries are never reordered: an out-of-order start is an
/// error so upstream timestamp bugs stay visible.
pub fn normalize_words(raw: &[RawWord]) -> Result<Vec<Word>> {
    let mut words = Vec::with_capacity(raw.len());
    let mut previous_start: Option<f64> = None;

    for (index, entry) in raw.iter().enumerate() {
        if !entry.start.is_finite() || !entry.end.is_finite() {
            return Err(CaptionError::input(
                index,
                format!(
                    "timestamps must be finite (start {}, end {})",
                    entry.start, entry.end
                ),
            ));
        }
        if entry.end < entry.start {
            return Err(CaptionError::input(
                index,
                format!("end {} precedes start {}", entry.end, entry.start),
            ));
        }
        if let Some(previous) = previous_start {
            if entry.start < previous {
                return Err(CaptionError::input(
                    index,
                    format!(
                        "start {} is earlier than the previous word's start {}",
                        entry.start, previous
                    ),
                ));
            }
        }
        previous_start = Some(entry.start);
        words.push(Word::new(entry.word.trim(), entry.start, entry.end));
    }

    debug!(words = words.len(), "normalized transcript");
    Ok(words)
}

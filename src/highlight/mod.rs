//! Karaoke-style highlight overlays.
//!
//! Each positioned word gets one overlay with the exact same geometry, active
//! only while the word itself is spoken. Overlays never influence layout.

use crate::types::{HighlightEvent, PositionedWord};

pub fn schedule_highlights(words: &[PositionedWord]) -> Vec<HighlightEvent> {
    words.iter().map(highlight_for).collect()
}

fn highlight_for(positioned: &PositionedWord) -> HighlightEvent {
    HighlightEvent {
        word: positioned.word.clone(),
        x: positioned.x,
        y: positioned.y,
        width: positioned.width,
        height: positioned.height,
        active_from: positioned.word.start,
        active_to: positioned.word.end,
    }
}

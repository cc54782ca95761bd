mod accumulator;
mod records;

#[cfg(test)]
mod tests;

pub use records::{line_records, LineRecord};

use tracing::info;

use crate::config::SegmentationConfig;
use crate::types::{Line, Word};

use accumulator::LineAccumulator;

/// Pure function to greedily partition words into caption lines
///
/// Single left-to-right pass. Each word is appended first and the thresholds
/// are checked afterwards, so a flushed line may overshoot a limit by the word
/// that triggered the flush. The gap is measured against the previous word of
/// the whole sequence; the first word never has a gap.
pub fn split_into_lines(words: &[Word], config: SegmentationConfig) -> Vec<Line> {
    let mut accumulator = LineAccumulator::new();
    for (idx, word) in words.iter().enumerate() {
        let gap = match idx.checked_sub(1) {
            Some(prev) => word.start - words[prev].end,
            None => 0.0,
        };
        accumulator.handle_word(word, gap, config);
    }
    accumulator.finish_line();
    let lines = accumulator.into_lines();
    info!(words = words.len(), lines = lines.len(), "segmented transcript");
    lines
}

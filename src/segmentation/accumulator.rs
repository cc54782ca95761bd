use tracing::debug;

use crate::config::SegmentationConfig;
use crate::types::{Line, Word};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum FlushReason {
    Chars,
    Duration,
    Gap,
}

pub(super) struct LineAccumulator {
    lines: Vec<Line>,
    open_words: Vec<Word>,
    open_chars: usize,
    running_duration: f64,
}

impl LineAccumulator {
    pub(super) fn new() -> Self {
        Self {
            lines: Vec::new(),
            open_words: Vec::new(),
            open_chars: 0,
            running_duration: 0.0,
        }
    }

    /// Append the word, then flush if any threshold is now exceeded
    ///
    /// The word that trips a threshold stays in the flushed line.
    pub(super) fn handle_word(&mut self, word: &Word, gap: f64, config: SegmentationConfig) {
        self.attach_word(word);
        if let Some(reason) = self.exceeded(gap, config) {
            debug!(
                ?reason,
                words = self.open_words.len(),
                chars = self.open_chars,
                duration = self.running_duration,
                gap,
                "flushing caption line"
            );
            self.finish_line();
        }
    }

    pub(super) fn finish_line(&mut self) {
        let words = std::mem::take(&mut self.open_words);
        if let Some(line) = Line::from_words(words) {
            self.lines.push(line);
        }
        self.open_chars = 0;
        self.running_duration = 0.0;
    }

    pub(super) fn into_lines(self) -> Vec<Line> {
        self.lines
    }

    fn attach_word(&mut self, word: &Word) {
        if !self.open_words.is_empty() {
            self.open_chars += 1;
        }
        self.open_chars += word.text.chars().count();
        self.running_duration += word.duration();
        self.open_words.push(word.clone());
    }

    fn exceeded(&self, gap: f64, config: SegmentationConfig) -> Option<FlushReason> {
        if self.open_chars > config.max_chars {
            Some(FlushReason::Chars)
        } else if self.running_duration > config.max_duration_seconds {
            Some(FlushReason::Duration)
        } else if gap > config.max_gap_seconds {
            Some(FlushReason::Gap)
        } else {
            None
        }
    }
}

pub mod metrics;

#[cfg(test)]
mod tests;

pub use metrics::{CachedMetrics, FontMetrics, FontSpec, MeasureError, MonospaceMetrics};

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::LayoutConfig;
use crate::error::{CaptionError, Result};
use crate::types::{FrameSize, Line, PositionedWord, SpaceToken, TextSize};

/// Word and space geometry for one caption line
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineLayout {
    pub words: Vec<PositionedWord>,
    /// `spaces[i]` is drawn right after `words[i]`
    pub spaces: Vec<SpaceToken>,
}

/// Places the words of a line inside the caption band of a frame
pub struct LayoutEngine<'a, M: ?Sized> {
    metrics: &'a M,
    font: FontSpec,
    config: LayoutConfig,
    frame: FrameSize,
}

impl<'a, M: FontMetrics + ?Sized> LayoutEngine<'a, M> {
    /// Fails with a config error when either frame dimension is zero
    pub fn new(
        metrics: &'a M,
        font: FontSpec,
        config: LayoutConfig,
        frame: FrameSize,
    ) -> Result<Self> {
        let frame = FrameSize::new(frame.width, frame.height)?;
        Ok(Self {
            metrics,
            font,
            config,
            frame,
        })
    }

    pub fn frame(&self) -> FrameSize {
        self.frame
    }

    pub fn font(&self) -> &FontSpec {
        &self.font
    }

    pub fn subtitle_width(&self) -> f64 {
        self.frame.width as f64 * self.config.subtitle_width_fraction
    }

    /// Left margin that centres the caption band horizontally
    pub fn x_buffer(&self) -> f64 {
        (self.frame.width as f64 - self.subtitle_width()) / 2.0
    }

    /// Top of the first caption row
    pub fn y_buffer(&self) -> f64 {
        self.frame.height as f64 * self.config.vertical_anchor.fraction()
    }

    /// Lay out one line, wrapping words onto new rows when the band is full
    ///
    /// Cursors restart at the origin for every line. A word whose width plus
    /// the trailing space exceeds the band still wraps, then overflows the
    /// band on its row without being split or shrunk.
    pub fn layout_line(&self, line_index: usize, line: &Line) -> Result<LineLayout> {
        let subtitle_width = self.subtitle_width();
        let x_buffer = self.x_buffer();
        let y_buffer = self.y_buffer();

        let mut words = Vec::with_capacity(line.words().len());
        let mut spaces = Vec::with_capacity(line.words().len());
        let mut x_cursor = 0.0;
        let mut y_cursor = 0.0;

        for word in line.words() {
            let word_size = self.measure(line_index, &word.text)?;
            let space_size = self.measure(line_index, " ")?;

            if x_cursor + word_size.width + space_size.width > subtitle_width {
                x_cursor = 0.0;
                y_cursor += word_size.height + self.config.row_spacing_px;
                debug!(line = line_index, word = %word.text, y_cursor, "wrapped caption row");
                if word_size.width + space_size.width > subtitle_width {
                    warn!(
                        line = line_index,
                        word = %word.text,
                        width = word_size.width,
                        subtitle_width,
                        "word is wider than the caption band"
                    );
                }
            }

            words.push(PositionedWord {
                word: word.clone(),
                x: x_cursor + x_buffer,
                y: y_cursor + y_buffer,
                width: word_size.width,
                height: word_size.height,
            });
            spaces.push(SpaceToken {
                x: x_cursor + word_size.width + x_buffer,
                y: y_cursor + y_buffer,
                width: space_size.width,
                height: space_size.height,
            });
            x_cursor += word_size.width + space_size.width;
        }

        Ok(LineLayout { words, spaces })
    }

    fn measure(&self, line_index: usize, text: &str) -> Result<TextSize> {
        self.metrics
            .measure(text, &self.font)
            .map_err(|err| CaptionError::Measurement {
                line: line_index,
                text: text.to_string(),
                reason: err.to_string(),
            })
    }
}

//! Text measurement capability used by the layout engine.

use std::collections::HashMap;
use std::sync::Mutex;

use serde::Serialize;
use thiserror::Error;

use crate::config::CaptionStyle;
use crate::types::TextSize;

/// Font selection passed to the measurement backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FontSpec {
    pub family: String,
    pub size_px: u32,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size_px: u32) -> Self {
        Self {
            family: family.into(),
            size_px,
        }
    }
}

impl From<&CaptionStyle> for FontSpec {
    fn from(style: &CaptionStyle) -> Self {
        Self::new(style.font_family.clone(), style.font_size_px)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{0}")]
pub struct MeasureError(pub String);

/// Measures rendered text, e.g. through a rendering toolkit or remote service
///
/// Implementations must be pure functions of their inputs; the layout engine
/// never substitutes a fallback size when measurement fails.
pub trait FontMetrics: Send + Sync {
    fn measure(&self, text: &str, font: &FontSpec) -> Result<TextSize, MeasureError>;
}

impl<M: FontMetrics + ?Sized> FontMetrics for &M {
    fn measure(&self, text: &str, font: &FontSpec) -> Result<TextSize, MeasureError> {
        (**self).measure(text, font)
    }
}

impl<M: FontMetrics + ?Sized> FontMetrics for Box<M> {
    fn measure(&self, text: &str, font: &FontSpec) -> Result<TextSize, MeasureError> {
        (**self).measure(text, font)
    }
}

/// Fixed-advance approximation of a font
///
/// Every character advances `advance_ratio * size`; the height is
/// `height_ratio * size`. The stroke pads both sides of each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMetrics {
    pub advance_ratio: f64,
    pub height_ratio: f64,
    pub stroke_px: f64,
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self {
            advance_ratio: 0.6,
            height_ratio: 1.2,
            stroke_px: 0.0,
        }
    }
}

impl MonospaceMetrics {
    pub fn with_stroke(mut self, stroke_px: f64) -> Self {
        self.stroke_px = stroke_px;
        self
    }
}

impl FontMetrics for MonospaceMetrics {
    fn measure(&self, text: &str, font: &FontSpec) -> Result<TextSize, MeasureError> {
        if font.size_px == 0 {
            return Err(MeasureError("font size must be positive".to_string()));
        }
        let size = font.size_px as f64;
        let chars = text.chars().count() as f64;
        let padding = 2.0 * self.stroke_px;
        Ok(TextSize::new(
            chars * self.advance_ratio * size + padding,
            self.height_ratio * size + padding,
        ))
    }
}

type CacheKey = (String, FontSpec);

/// Memoizes another backend, keyed by text and font
pub struct CachedMetrics<M> {
    inner: M,
    cache: Mutex<HashMap<CacheKey, TextSize>>,
}

impl<M: FontMetrics> CachedMetrics<M> {
    pub fn new(inner: M) -> Self {
        Self {
            inner,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Number of distinct measurements held
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<CacheKey, TextSize>> {
        self.cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<M: FontMetrics> FontMetrics for CachedMetrics<M> {
    fn measure(&self, text: &str, font: &FontSpec) -> Result<TextSize, MeasureError> {
        let key = (text.to_string(), font.clone());
        if let Some(size) = self.lock().get(&key) {
            return Ok(*size);
        }
        // Failures are not cached so a flaky backend can succeed on retry
        let size = self.inner.measure(text, font)?;
        self.lock().insert(key, size);
        Ok(size)
    }
}

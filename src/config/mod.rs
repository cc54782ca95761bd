use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::CaptionError;
use crate::types::VerticalAnchor;

/// Thresholds for the greedy line segmenter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SegmentationConfig {
    /// Maximum joined characters before a line is flushed
    pub max_chars: usize,
    /// Maximum summed word duration (seconds) before a line is flushed
    #[serde(alias = "maxDuration")]
    pub max_duration_seconds: f64,
    /// Maximum silence (seconds) between consecutive words before a flush
    #[serde(alias = "maxGap")]
    pub max_gap_seconds: f64,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            max_chars: 25,
            max_duration_seconds: 3.0,
            max_gap_seconds: 1.5,
        }
    }
}

impl SegmentationConfig {
    pub fn validate(&self) -> crate::Result<()> {
        if self.max_chars == 0 {
            return Err(CaptionError::config("maxChars must be positive"));
        }
        if !(self.max_duration_seconds > 0.0) {
            return Err(CaptionError::config(format!(
                "maxDurationSeconds must be positive, got {}",
                self.max_duration_seconds
            )));
        }
        if !(self.max_gap_seconds > 0.0) {
            return Err(CaptionError::config(format!(
                "maxGapSeconds must be positive, got {}",
                self.max_gap_seconds
            )));
        }
        Ok(())
    }
}

/// Geometry parameters for placing words within the frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Share of the frame width available to a caption row
    pub subtitle_width_fraction: f64,
    pub vertical_anchor: VerticalAnchor,
    /// Extra pixels between wrapped rows, on top of the word height
    pub row_spacing_px: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            subtitle_width_fraction: 0.9,
            vertical_anchor: VerticalAnchor::TwoThirds,
            row_spacing_px: 10.0,
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> crate::Result<()> {
        if !(self.subtitle_width_fraction > 0.0 && self.subtitle_width_fraction <= 1.0) {
            return Err(CaptionError::config(format!(
                "subtitleWidthFraction must be within (0, 1], got {}",
                self.subtitle_width_fraction
            )));
        }
        if !(self.row_spacing_px >= 0.0) {
            return Err(CaptionError::config(format!(
                "rowSpacingPx must be non-negative, got {}",
                self.row_spacing_px
            )));
        }
        Ok(())
    }
}

/// Font and colours handed to the compositor along with the plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CaptionStyle {
    pub font_family: String,
    pub font_size_px: u32,
    pub text_color: String,
    pub highlight_background_color: String,
    pub stroke_color: String,
    pub stroke_width_px: u32,
}

impl Default for CaptionStyle {
    fn default() -> Self {
        Self {
            font_family: "font.ttf".to_string(),
            font_size_px: 55,
            text_color: "white".to_string(),
            highlight_background_color: "red".to_string(),
            stroke_color: "black".to_string(),
            stroke_width_px: 3,
        }
    }
}

impl CaptionStyle {
    pub fn validate(&self) -> crate::Result<()> {
        if self.font_size_px == 0 {
            return Err(CaptionError::config("fontSizePx must be positive"));
        }
        if self.font_family.trim().is_empty() {
            return Err(CaptionError::config("fontFamily must not be empty"));
        }
        Ok(())
    }
}

/// Complete caption pipeline configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CaptionConfig {
    pub segmentation: SegmentationConfig,
    pub layout: LayoutConfig,
    pub style: CaptionStyle,
}

impl CaptionConfig {
    /// Load from a JSON file when given, otherwise start from defaults
    pub fn from_override(path: Option<PathBuf>) -> Result<Self> {
        match path {
            Some(custom) => load_config_file(&custom),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> crate::Result<()> {
        self.segmentation.validate()?;
        self.layout.validate()?;
        self.style.validate()
    }
}

fn load_config_file(path: &Path) -> Result<CaptionConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file at {:?}", path))?;
    let config: CaptionConfig = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse config file at {:?}", path))?;
    Ok(config)
}

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::CaptionConfig;
use crate::types::VerticalAnchor;

/// Captioneer - karaoke caption planner
///
/// Groups word-level speech timestamps into caption lines and lays them out
/// as a timed render plan for a video compositor.
#[derive(Parser, Debug)]
#[command(name = "captioneer", version, about = "Word-timed caption planner", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Segment a transcript and write the line-level JSON artifact.
    Lines(LinesArgs),
    /// Segment and lay out a transcript, writing the render plan as JSON.
    Plan(PlanArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// JSON config file; flags below override its values.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Maximum characters per caption line.
    #[arg(long = "max-chars")]
    pub max_chars: Option<usize>,
    /// Maximum summed word duration per line, in seconds.
    #[arg(long = "max-duration")]
    pub max_duration: Option<f64>,
    /// Silence in seconds that forces a line break.
    #[arg(long = "max-gap")]
    pub max_gap: Option<f64>,
}

impl ConfigArgs {
    pub fn apply(&self, config: &mut CaptionConfig) {
        if let Some(max_chars) = self.max_chars {
            config.segmentation.max_chars = max_chars;
        }
        if let Some(max_duration) = self.max_duration {
            config.segmentation.max_duration_seconds = max_duration;
        }
        if let Some(max_gap) = self.max_gap {
            config.segmentation.max_gap_seconds = max_gap;
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct LinesArgs {
    /// Word timestamps: a `[{word, start, end}]` array or a Whisper result.
    #[arg(value_name = "TRANSCRIPT")]
    pub transcript: PathBuf,
    /// Output file; JSON goes to stdout when omitted.
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,
    #[command(flatten)]
    pub config: ConfigArgs,
}

#[derive(Args, Debug, Clone)]
pub struct PlanArgs {
    #[command(flatten)]
    pub lines: LinesArgs,
    /// Frame width in pixels.
    #[arg(long)]
    pub width: u32,
    /// Frame height in pixels.
    #[arg(long)]
    pub height: u32,
    /// Font size in pixels.
    #[arg(long = "font-size")]
    pub font_size: Option<u32>,
    /// Vertical position of the first caption row.
    #[arg(long, value_enum)]
    pub anchor: Option<VerticalAnchor>,
    /// Worker threads used for line layout.
    #[arg(long, default_value_t = 1)]
    pub jobs: usize,
    /// Write the flattened draw list instead of the structured plan.
    #[arg(long)]
    pub draws: bool,
}

impl PlanArgs {
    pub fn apply(&self, config: &mut CaptionConfig) {
        self.lines.config.apply(config);
        if let Some(font_size) = self.font_size {
            config.style.font_size_px = font_size;
        }
        if let Some(anchor) = self.anchor {
            config.layout.vertical_anchor = anchor;
        }
    }
}

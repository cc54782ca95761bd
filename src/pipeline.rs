//! End-to-end caption pipeline: normalize, segment, lay out, emit.

use tracing::info;

use crate::config::CaptionConfig;
use crate::error::Result;
use crate::layout::{FontMetrics, FontSpec, LayoutEngine};
use crate::plan::{emit_render_plan_parallel, RenderPlan};
use crate::segmentation::split_into_lines;
use crate::transcript::{normalize_words, RawWord};
use crate::types::{FrameSize, Line};

pub struct CaptionPipeline<'a, M: ?Sized> {
    config: CaptionConfig,
    frame: FrameSize,
    metrics: &'a M,
    workers: usize,
}

impl<'a, M: FontMetrics + ?Sized> CaptionPipeline<'a, M> {
    pub fn new(config: CaptionConfig, frame: FrameSize, metrics: &'a M) -> Result<Self> {
        config.validate()?;
        let frame = FrameSize::new(frame.width, frame.height)?;
        Ok(Self {
            config,
            frame,
            metrics,
            workers: 1,
        })
    }

    /// Number of threads used for per-line layout
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    pub fn config(&self) -> &CaptionConfig {
        &self.config
    }

    /// Normalize and segment without laying anything out
    pub fn segment(&self, raw: &[RawWord]) -> Result<Vec<Line>> {
        let words = normalize_words(raw)?;
        Ok(split_into_lines(&words, self.config.segmentation))
    }

    /// Run every stage; any error aborts the whole transcript
    pub fn run(&self, raw: &[RawWord]) -> Result<RenderPlan> {
        let lines = self.segment(raw)?;
        let engine = LayoutEngine::new(
            self.metrics,
            FontSpec::from(&self.config.style),
            self.config.layout,
            self.frame,
        )?;
        let plan = emit_render_plan_parallel(&lines, &engine, &self.config.style, self.workers)?;
        info!(
            words = raw.len(),
            lines = plan.lines.len(),
            frame_width = self.frame.width,
            frame_height = self.frame.height,
            "caption pipeline finished"
        );
        Ok(plan)
    }
}

//! Render plan assembly - lays out every line and stacks its draws
//!
//! Lines are independent after segmentation, so layout can be spread over
//! worker threads; the plan always keeps segmentation order.

mod draws;


pub use draws::{DrawCommand, DrawLayer};

use std::thread;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::CaptionStyle;
use crate::error::Result;
use crate::highlight::schedule_highlights;
use crate::layout::{FontMetrics, LayoutEngine};
use crate::types::{FrameSize, HighlightEvent, Line, PositionedWord, SpaceToken};

/// Everything the compositor draws for one caption line
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineRender {
    pub line: Line,
    pub base_words: Vec<PositionedWord>,
    pub spaces: Vec<SpaceToken>,
    pub highlights: Vec<HighlightEvent>,
}

/// Fully positioned and timed captions for one transcript
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderPlan {
    pub frame: FrameSize,
    pub style: CaptionStyle,
    pub lines: Vec<LineRender>,
}

impl RenderPlan {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

pub fn render_line<M: FontMetrics + ?Sized>(
    engine: &LayoutEngine<'_, M>,
    line_index: usize,
    line: &Line,
) -> Result<LineRender> {
    let layout = engine.layout_line(line_index, line)?;
    let highlights = schedule_highlights(&layout.words);
    Ok(LineRender {
        line: line.clone(),
        base_words: layout.words,
        spaces: layout.spaces,
        highlights,
    })
}

/// Lay out every line in order on the calling thread
pub fn emit_render_plan<M: FontMetrics + ?Sized>(
    lines: &[Line],
    engine: &LayoutEngine<'_, M>,
    style: &CaptionStyle,
) -> Result<RenderPlan> {
    let rendered = lines
        .iter()
        .enumerate()
        .map(|(idx, line)| render_line(engine, idx, line))
        .collect::<Result<Vec<_>>>()?;
    Ok(assemble(rendered, engine.frame(), style))
}

/// Lay out lines on up to `workers` scoped threads
///
/// Produces the same plan as [`emit_render_plan`]. When several lines fail to
/// measure, the error of the earliest line is returned.
pub fn emit_render_plan_parallel<M: FontMetrics + ?Sized>(
    lines: &[Line],
    engine: &LayoutEngine<'_, M>,
    style: &CaptionStyle,
    workers: usize,
) -> Result<RenderPlan> {
    let workers = workers.max(1).min(lines.len().max(1));
    if workers == 1 {
        return emit_render_plan(lines, engine, style);
    }

    let chunk_size = lines.len().div_ceil(workers);
    debug!(workers, chunk_size, "laying out lines in parallel");
    let rendered: Vec<Result<LineRender>> = thread::scope(|scope| {
        let handles: Vec<_> = lines
            .chunks(chunk_size)
            .enumerate()
            .map(|(chunk_idx, chunk)| {
                let offset = chunk_idx * chunk_size;
                scope.spawn(move || {
                    chunk
                        .iter()
                        .enumerate()
                        .map(|(idx, line)| render_line(engine, offset + idx, line))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|handle| match handle.join() {
                Ok(results) => results,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect()
    });

    let rendered = rendered.into_iter().collect::<Result<Vec<_>>>()?;
    Ok(assemble(rendered, engine.frame(), style))
}

fn assemble(lines: Vec<LineRender>, frame: FrameSize, style: &CaptionStyle) -> RenderPlan {
    info!(
        lines = lines.len(),
        highlights = lines.iter().map(|line| line.highlights.len()).sum::<usize>(),
        "assembled render plan"
    );
    RenderPlan {
        frame,
        style: style.clone(),
        lines,
    }
}

use serde::Serialize;

use super::RenderPlan;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawLayer {
    /// Line text, visible for the whole line window
    Base,
    /// Per-word overlay, visible while the word is spoken
    Highlight,
}

/// One timed text draw for the compositor, in painting order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawCommand {
    pub layer: DrawLayer,
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub start: f64,
    pub duration: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
}

impl RenderPlan {
    /// Flatten the plan into draws: per line, each word followed by its
    /// space, then every highlight of that line
    pub fn draw_commands(&self) -> Vec<DrawCommand> {
        let mut draws = Vec::new();
        for render in &self.lines {
            let start = render.line.start();
            let duration = render.line.duration();
            for (word, space) in render.base_words.iter().zip(&render.spaces) {
                draws.push(DrawCommand {
                    layer: DrawLayer::Base,
                    text: word.word.text.clone(),
                    x: word.x,
                    y: word.y,
                    width: word.width,
                    height: word.height,
                    start,
                    duration,
                    background: None,
                });
                draws.push(DrawCommand {
                    layer: DrawLayer::Base,
                    text: " ".to_string(),
                    x: space.x,
                    y: space.y,
                    width: space.width,
                    height: space.height,
                    start,
                    duration,
                    background: None,
                });
            }
            for highlight in &render.highlights {
                draws.push(DrawCommand {
                    layer: DrawLayer::Highlight,
                    text: highlight.word.text.clone(),
                    x: highlight.x,
                    y: highlight.y,
                    width: highlight.width,
                    height: highlight.height,
                    start: highlight.active_from,
                    duration: highlight.active_to - highlight.active_from,
                    background: Some(self.style.highlight_background_color.clone()),
                });
            }
        }
        draws
    }
}

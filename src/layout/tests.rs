use std::collections::HashMap;

use approx::assert_relative_eq;

use super::{FontMetrics, FontSpec, LayoutEngine, MeasureError};
use crate::config::LayoutConfig;
use crate::error::CaptionError;
use crate::types::{FrameSize, Line, TextSize, VerticalAnchor, Word};

/// Fixed sizes per text; anything unknown fails to measure
struct TableMetrics {
    sizes: HashMap<&'static str, (f64, f64)>,
}

impl TableMetrics {
    fn new(entries: &[(&'static str, (f64, f64))]) -> Self {
        Self {
            sizes: entries.iter().copied().collect(),
        }
    }
}

impl FontMetrics for TableMetrics {
    fn measure(&self, text: &str, _font: &FontSpec) -> Result<TextSize, MeasureError> {
        self.sizes
            .get(text)
            .map(|&(width, height)| TextSize::new(width, height))
            .ok_or_else(|| MeasureError(format!("no glyphs for {:?}", text)))
    }
}

fn font() -> FontSpec {
    FontSpec::new("font.ttf", 55)
}

fn half_anchor() -> LayoutConfig {
    LayoutConfig {
        vertical_anchor: VerticalAnchor::Half,
        ..LayoutConfig::default()
    }
}

fn line(words: &[(&str, f64, f64)]) -> Line {
    Line::from_words(
        words
            .iter()
            .map(|&(text, start, end)| Word::new(text, start, end))
            .collect(),
    )
    .unwrap()
}

#[test]
fn test_single_word_at_band_origin() {
    let metrics = TableMetrics::new(&[("Hi", (40.0, 50.0)), (" ", (10.0, 50.0))]);
    let frame = FrameSize::new(1000, 1000).unwrap();
    let engine = LayoutEngine::new(&metrics, font(), half_anchor(), frame).unwrap();

    assert_relative_eq!(engine.x_buffer(), 50.0, epsilon = 1e-9);
    assert_relative_eq!(engine.y_buffer(), 500.0, epsilon = 1e-9);

    let layout = engine.layout_line(0, &line(&[("Hi", 0.0, 0.3)])).unwrap();
    assert_eq!(layout.words.len(), 1);
    assert_relative_eq!(layout.words[0].x, 50.0, epsilon = 1e-9);
    assert_relative_eq!(layout.words[0].y, 500.0, epsilon = 1e-9);
    assert_relative_eq!(layout.words[0].width, 40.0, epsilon = 1e-9);
    assert_relative_eq!(layout.spaces[0].x, 90.0, epsilon = 1e-9);
    assert_relative_eq!(layout.spaces[0].y, 500.0, epsilon = 1e-9);
}

#[test]
fn test_two_thirds_anchor() {
    let metrics = TableMetrics::new(&[("Hi", (40.0, 50.0)), (" ", (10.0, 50.0))]);
    let frame = FrameSize::new(1000, 900).unwrap();
    let engine = LayoutEngine::new(&metrics, font(), LayoutConfig::default(), frame).unwrap();

    let layout = engine.layout_line(0, &line(&[("Hi", 0.0, 0.3)])).unwrap();
    assert_relative_eq!(layout.words[0].y, 600.0, epsilon = 1e-9);
}

#[test]
fn test_words_advance_by_word_and_space_width() {
    let metrics = TableMetrics::new(&[
        ("one", (100.0, 50.0)),
        ("two", (120.0, 50.0)),
        (" ", (10.0, 50.0)),
    ]);
    let frame = FrameSize::new(1000, 1000).unwrap();
    let engine = LayoutEngine::new(&metrics, font(), half_anchor(), frame).unwrap();

    let layout = engine
        .layout_line(0, &line(&[("one", 0.0, 0.2), ("two", 0.2, 0.4)]))
        .unwrap();
    assert_relative_eq!(layout.words[1].x, 50.0 + 110.0, epsilon = 1e-9);
    assert_relative_eq!(layout.spaces[1].x, 50.0 + 110.0 + 120.0, epsilon = 1e-9);
    assert_relative_eq!(layout.words[1].y, 500.0, epsilon = 1e-9);
}

#[test]
fn test_wraps_when_word_and_space_exceed_band() {
    // Band is 900px wide; 400 + 10 twice fits, a third word does not
    let metrics = TableMetrics::new(&[("wide", (400.0, 60.0)), (" ", (10.0, 60.0))]);
    let frame = FrameSize::new(1000, 1000).unwrap();
    let engine = LayoutEngine::new(&metrics, font(), half_anchor(), frame).unwrap();

    let layout = engine
        .layout_line(
            0,
            &line(&[("wide", 0.0, 0.1), ("wide", 0.1, 0.2), ("wide", 0.2, 0.3)]),
        )
        .unwrap();
    assert_relative_eq!(layout.words[1].x, 460.0, epsilon = 1e-9);
    assert_relative_eq!(layout.words[2].x, 50.0, epsilon = 1e-9);
    assert_relative_eq!(layout.words[2].y, 500.0 + 60.0 + 10.0, epsilon = 1e-9);
    assert_relative_eq!(layout.spaces[2].y, layout.words[2].y, epsilon = 1e-9);
}

#[test]
fn test_oversized_word_overflows_after_wrapping() {
    let metrics = TableMetrics::new(&[("enormous", (1200.0, 60.0)), (" ", (10.0, 60.0))]);
    let frame = FrameSize::new(1000, 1000).unwrap();
    let engine = LayoutEngine::new(&metrics, font(), half_anchor(), frame).unwrap();

    let layout = engine
        .layout_line(0, &line(&[("enormous", 0.0, 0.5)]))
        .unwrap();
    let word = &layout.words[0];
    assert_relative_eq!(word.x, 50.0, epsilon = 1e-9);
    assert_relative_eq!(word.width, 1200.0, epsilon = 1e-9);
    // Even as the first word the wrap check advances one row
    assert_relative_eq!(word.y, 570.0, epsilon = 1e-9);
}

#[test]
fn test_rows_restart_for_every_line() {
    let metrics = TableMetrics::new(&[("wide", (500.0, 60.0)), (" ", (10.0, 60.0))]);
    let frame = FrameSize::new(1000, 1000).unwrap();
    let engine = LayoutEngine::new(&metrics, font(), half_anchor(), frame).unwrap();

    let first = engine
        .layout_line(0, &line(&[("wide", 0.0, 0.1), ("wide", 0.1, 0.2)]))
        .unwrap();
    let second = engine.layout_line(1, &line(&[("wide", 1.0, 1.1)])).unwrap();
    assert!(first.words[1].y > first.words[0].y);
    assert_relative_eq!(second.words[0].y, 500.0, epsilon = 1e-9);
}

#[test]
fn test_measurement_failure_names_line_and_text() {
    let metrics = TableMetrics::new(&[(" ", (10.0, 50.0))]);
    let frame = FrameSize::new(1000, 1000).unwrap();
    let engine = LayoutEngine::new(&metrics, font(), half_anchor(), frame).unwrap();

    match engine.layout_line(4, &line(&[("missing", 0.0, 0.1)])) {
        Err(CaptionError::Measurement { line, text, .. }) => {
            assert_eq!(line, 4);
            assert_eq!(text, "missing");
        }
        other => panic!("expected measurement error, got {:?}", other),
    }
}

#[test]
fn test_rejects_zero_width_frame() {
    let metrics = TableMetrics::new(&[("Hi", (40.0, 50.0)), (" ", (10.0, 50.0))]);
    let frame = FrameSize {
        width: 0,
        height: 1000,
    };

    assert!(matches!(
        LayoutEngine::new(&metrics, font(), half_anchor(), frame),
        Err(CaptionError::Config(_))
    ));
}

use super::{line_records, split_into_lines};
use crate::config::SegmentationConfig;
use crate::types::Word;

fn texts(lines: &[crate::types::Line]) -> Vec<&str> {
    lines.iter().map(|line| line.text()).collect()
}

#[test]
fn test_short_phrase_stays_on_one_line() {
    let words = vec![Word::new("Hello", 0.0, 0.3), Word::new("world", 0.3, 0.6)];
    let lines = split_into_lines(&words, SegmentationConfig::default());

    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].text(), "Hello world");
    assert_eq!(lines[0].start(), 0.0);
    assert_eq!(lines[0].end(), 0.6);
}

#[test]
fn test_empty_input_produces_no_lines() {
    assert!(split_into_lines(&[], SegmentationConfig::default()).is_empty());
}

#[test]
fn test_oversized_word_is_flushed_alone() {
    let long = "a".repeat(30);
    let words = vec![
        Word::new(long.clone(), 0.0, 0.2),
        Word::new("next", 0.2, 0.4),
    ];
    let lines = split_into_lines(&words, SegmentationConfig::default());

    assert_eq!(texts(&lines), vec![long.as_str(), "next"]);
}

#[test]
fn test_char_limit_includes_triggering_word() {
    let words = vec![
        Word::new("abcdefghij", 0.0, 0.1),
        Word::new("abcdefghij", 0.1, 0.2),
        Word::new("abcdefghij", 0.2, 0.3),
        Word::new("tail", 0.3, 0.4),
    ];
    let lines = split_into_lines(&words, SegmentationConfig::default());

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].words().len(), 3);
    assert_eq!(lines[0].text().chars().count(), 32);
    assert_eq!(texts(&lines)[1], "tail");
}

#[test]
fn test_duration_limit_uses_summed_word_durations() {
    let words: Vec<Word> = (0..5)
        .map(|i| Word::new(format!("w{}", i), i as f64, i as f64 + 1.0))
        .collect();
    let lines = split_into_lines(&words, SegmentationConfig::default());

    // 1 + 1 + 1 is not above 3.0; the fourth second is
    assert_eq!(texts(&lines), vec!["w0 w1 w2 w3", "w4"]);
}

#[test]
fn test_duration_ignores_silence_between_words() {
    let words = vec![
        Word::new("one", 0.0, 0.5),
        Word::new("two", 1.5, 2.0),
        Word::new("three", 3.0, 3.5),
        Word::new("four", 4.5, 5.0),
    ];
    let lines = split_into_lines(&words, SegmentationConfig::default());

    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].end(), 5.0);
}

#[test]
fn test_gap_flush_keeps_the_word_after_the_gap() {
    let words = vec![
        Word::new("Hi", 0.0, 0.2),
        Word::new("there", 2.0, 2.2),
        Word::new("again", 2.3, 2.5),
    ];
    let lines = split_into_lines(&words, SegmentationConfig::default());

    assert_eq!(texts(&lines), vec!["Hi there", "again"]);
}

#[test]
fn test_gap_is_measured_across_line_boundaries() {
    let config = SegmentationConfig {
        max_chars: 3,
        ..SegmentationConfig::default()
    };
    let words = vec![
        Word::new("abcd", 0.0, 0.1),
        Word::new("x", 5.0, 5.1),
        Word::new("y", 5.2, 5.3),
    ];
    let lines = split_into_lines(&words, config);

    // "x" opens a fresh line, but its gap to "abcd" still flushes it at once
    assert_eq!(texts(&lines), vec!["abcd", "x", "y"]);
}

#[test]
fn test_first_word_never_has_a_gap() {
    let words = vec![Word::new("late", 100.0, 100.2)];
    let lines = split_into_lines(&words, SegmentationConfig::default());

    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].start(), 100.0);
}

#[test]
fn test_empty_text_words_still_count_separators() {
    let words: Vec<Word> = (0..30)
        .map(|i| Word::new("", i as f64 * 0.1, i as f64 * 0.1))
        .collect();
    let lines = split_into_lines(&words, SegmentationConfig::default());

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].words().len(), 27);
    assert_eq!(lines[1].words().len(), 3);
}

#[test]
fn test_line_records_use_reference_shape() {
    let words = vec![Word::new("Hello", 0.0, 0.3), Word::new("world", 0.3, 0.6)];
    let lines = split_into_lines(&words, SegmentationConfig::default());
    let json = serde_json::to_value(line_records(&lines)).unwrap();

    assert_eq!(json[0]["word"], "Hello world");
    assert_eq!(json[0]["start"], 0.0);
    assert_eq!(json[0]["end"], 0.6);
    assert_eq!(json[0]["textcontents"][1]["word"], "world");
    assert_eq!(json[0]["textcontents"][1]["start"], 0.3);
}

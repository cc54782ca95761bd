use serde::{Deserialize, Serialize};

use crate::types::{Line, Word};

/// Line-level artifact in the shape the caption tooling writes to disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineRecord {
    /// Joined line text
    pub word: String,
    pub start: f64,
    pub end: f64,
    pub textcontents: Vec<Word>,
}

impl From<&Line> for LineRecord {
    fn from(line: &Line) -> Self {
        Self {
            word: line.text().to_string(),
            start: line.start(),
            end: line.end(),
            textcontents: line.words().to_vec(),
        }
    }
}

pub fn line_records(lines: &[Line]) -> Vec<LineRecord> {
    lines.iter().map(LineRecord::from).collect()
}

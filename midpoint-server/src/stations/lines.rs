//! Line metadata.

use serde::{Deserialize, Serialize};

use crate::domain::LineId;

/// Display metadata for a transit line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubwayLine {
    pub id: LineId,
    pub name: String,
    /// Hex colour used when drawing the line.
    pub color: String,
}

impl SubwayLine {
    pub fn new(id: &str, name: &str, color: &str) -> Self {
        Self {
            id: LineId::from(id),
            name: name.to_string(),
            color: color.to_string(),
        }
    }
}

/// The Seoul metropolitan subway lines 1 to 9.
pub fn seoul_lines() -> Vec<SubwayLine> {
    vec![
        SubwayLine::new("1", "1호선", "#0052A4"),
        SubwayLine::new("2", "2호선", "#00A84D"),
        SubwayLine::new("3", "3호선", "#EF7C1C"),
        SubwayLine::new("4", "4호선", "#00A5DE"),
        SubwayLine::new("5", "5호선", "#996CAC"),
        SubwayLine::new("6", "6호선", "#CD7C2F"),
        SubwayLine::new("7", "7호선", "#747F00"),
        SubwayLine::new("8", "8호선", "#E6186C"),
        SubwayLine::new("9", "9호선", "#BDB092"),
    ]
}

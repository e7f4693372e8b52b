//! Graph edges.

use serde::Serialize;

use crate::domain::StationId;

/// Hop cost of travelling between adjacent stations on one line.
pub const LINE_WEIGHT: u32 = 1;

/// Hop cost of changing lines at a shared station.
pub const TRANSFER_WEIGHT: u32 = 1;

/// Why two station records are connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EdgeKind {
    /// Physically adjacent stations on the same line.
    Line,
    /// Same-named stations on different lines.
    Transfer,
}

impl EdgeKind {
    /// The hop cost for this kind of edge.
    pub fn weight(self) -> u32 {
        match self {
            EdgeKind::Line => LINE_WEIGHT,
            EdgeKind::Transfer => TRANSFER_WEIGHT,
        }
    }
}

/// A directed edge out of a node's adjacency list.
///
/// The graph always inserts edges in both directions, so every `Edge` has a
/// mirror image in the target's adjacency list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub to: StationId,
    pub weight: u32,
    pub kind: EdgeKind,
}

impl Edge {
    /// Create an edge of the given kind with that kind's weight.
    pub fn new(to: StationId, kind: EdgeKind) -> Self {
        Self {
            to,
            weight: kind.weight(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_are_one_hop() {
        assert_eq!(EdgeKind::Line.weight(), 1);
        assert_eq!(EdgeKind::Transfer.weight(), 1);
    }

    #[test]
    fn kind_serializes_upper_case() {
        assert_eq!(serde_json::to_string(&EdgeKind::Line).unwrap(), "\"LINE\"");
        assert_eq!(
            serde_json::to_string(&EdgeKind::Transfer).unwrap(),
            "\"TRANSFER\""
        );
    }
}

//! Graph construction from raw station records.

use indexmap::IndexMap;
use tracing::debug;

use crate::domain::{LineId, StationId, StationRecord};

use super::TransitGraph;
use super::edge::{Edge, EdgeKind};

impl TransitGraph {
    /// Build a graph from station records.
    ///
    /// Records sharing a line id must already be in physical line order:
    /// consecutive records on a line are linked with `Line` edges in the
    /// order given, and nothing here checks that order. Records whose
    /// whitespace-stripped names match but whose lines differ are linked
    /// pairwise with `Transfer` edges.
    ///
    /// If an id repeats, the last record's data wins.
    pub fn build(stations: &[StationRecord]) -> Self {
        let mut graph = TransitGraph::default();

        for station in stations {
            graph.nodes.insert(station.id.clone(), station.clone());
            graph.adjacency.entry(station.id.clone()).or_default();
        }

        let line_edges = graph.link_lines(stations);
        let transfer_edges = graph.link_transfers(stations);

        debug!(
            nodes = graph.node_count(),
            line_edges, transfer_edges, "Built transit graph"
        );

        graph
    }

    /// Connect consecutive records of every line. Returns directed edges added.
    fn link_lines(&mut self, stations: &[StationRecord]) -> usize {
        let mut by_line: IndexMap<&LineId, Vec<&StationId>> = IndexMap::new();
        for station in stations {
            by_line.entry(&station.line_id).or_default().push(&station.id);
        }

        let mut added = 0;
        for ids in by_line.values() {
            for pair in ids.windows(2) {
                added += self.connect(pair[0], pair[1], EdgeKind::Line);
            }
        }
        added
    }

    /// Connect same-named records on different lines. Returns directed edges added.
    fn link_transfers(&mut self, stations: &[StationRecord]) -> usize {
        let mut by_name: IndexMap<String, Vec<&StationRecord>> = IndexMap::new();
        for station in stations {
            by_name.entry(station.name_key()).or_default().push(station);
        }

        let mut added = 0;
        for same in by_name.values().filter(|group| group.len() > 1) {
            for (i, a) in same.iter().enumerate() {
                for b in &same[i + 1..] {
                    if a.line_id == b.line_id {
                        continue;
                    }
                    added += self.connect(&a.id, &b.id, EdgeKind::Transfer);
                }
            }
        }
        added
    }

    /// Insert an edge in both directions, skipping duplicates and self-loops.
    fn connect(&mut self, a: &StationId, b: &StationId, kind: EdgeKind) -> usize {
        if a == b {
            return 0;
        }
        usize::from(self.insert_edge(a, Edge::new(b.clone(), kind)))
            + usize::from(self.insert_edge(b, Edge::new(a.clone(), kind)))
    }

    fn insert_edge(&mut self, from: &StationId, edge: Edge) -> bool {
        let edges = self.adjacency.entry(from.clone()).or_default();
        if edges.iter().any(|e| e.to == edge.to && e.kind == edge.kind) {
            return false;
        }
        edges.push(edge);
        true
    }
}

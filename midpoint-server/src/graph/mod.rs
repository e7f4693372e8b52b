//! Routable transit graph.
//!
//! One node per station record, with undirected (mirrored) edges for
//! line adjacency and same-name transfers. The graph is read-only once
//! built and can be shared freely between concurrent queries.

mod builder;
mod edge;

use indexmap::IndexMap;

use crate::domain::{LatLng, StationId, StationRecord};

pub use edge::{Edge, EdgeKind, LINE_WEIGHT, TRANSFER_WEIGHT};

/// A transit network keyed by station id.
///
/// Nodes iterate in the order their ids were first inserted. Midpoint
/// tie-breaking relies on this order.
#[derive(Debug, Clone, Default)]
pub struct TransitGraph {
    nodes: IndexMap<StationId, StationRecord>,
    adjacency: IndexMap<StationId, Vec<Edge>>,
}

impl TransitGraph {
    /// Look up a node by id.
    pub fn node(&self, id: &StationId) -> Option<&StationRecord> {
        self.nodes.get(id)
    }

    /// Check whether the graph has a node with this id.
    pub fn contains(&self, id: &StationId) -> bool {
        self.nodes.contains_key(id)
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &StationRecord> {
        self.nodes.values()
    }

    /// All node ids in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = &StationId> {
        self.nodes.keys()
    }

    /// Position of a node in iteration order.
    pub fn index_of(&self, id: &StationId) -> Option<usize> {
        self.nodes.get_index_of(id)
    }

    /// The node id at a position in iteration order.
    pub fn id_at(&self, index: usize) -> Option<&StationId> {
        self.nodes.get_index(index).map(|(id, _)| id)
    }

    /// Outgoing edges of a node. Unknown ids have no edges.
    pub fn edges_from(&self, id: &StationId) -> &[Edge] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Check for a directed edge of the given kind.
    pub fn has_edge(&self, from: &StationId, to: &StationId, kind: EdgeKind) -> bool {
        self.edges_from(from)
            .iter()
            .any(|e| &e.to == to && e.kind == kind)
    }

    /// Check whether two nodes are adjacent by any kind of edge.
    pub fn is_adjacent(&self, from: &StationId, to: &StationId) -> bool {
        self.edges_from(from).iter().any(|e| &e.to == to)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of directed edges (each connection counts twice).
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Returns true if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Map a path of station ids to coordinates for drawing.
    ///
    /// Ids missing from the graph are skipped.
    pub fn path_coordinates(&self, path: &[StationId]) -> Vec<LatLng> {
        path.iter()
            .filter_map(|id| self.node(id))
            .map(StationRecord::position)
            .collect()
    }
}

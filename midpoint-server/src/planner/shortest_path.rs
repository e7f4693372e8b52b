//! Single-source shortest paths over hop counts.
//!
//! Two interchangeable strategies are provided: a plain O(V²) scan that picks
//! the closest unvisited node on every step, and a binary-heap Dijkstra. Both
//! yield the same distances; when several shortest paths exist they may pick
//! different (equally short) predecessors.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::domain::StationId;
use crate::graph::TransitGraph;

use super::error::PlannerError;
use super::path::restore_path;

/// How the next node to settle is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathStrategy {
    /// Linear scan over all unvisited nodes. Ties go to the earliest node in
    /// graph order.
    Scan,
    /// Priority queue keyed by (distance, graph order).
    #[default]
    BinaryHeap,
}

/// Distances and back-pointers from one source station.
///
/// Nodes that cannot be reached have no distance and no predecessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    source: StationId,
    distance: HashMap<StationId, u32>,
    predecessor: HashMap<StationId, StationId>,
}

impl ShortestPaths {
    /// The station these paths start from.
    pub fn source(&self) -> &StationId {
        &self.source
    }

    /// Hop distance to a station, or `None` if it is unreachable.
    pub fn distance_to(&self, id: &StationId) -> Option<u32> {
        self.distance.get(id).copied()
    }

    /// Check whether a station is reachable from the source.
    pub fn is_reachable(&self, id: &StationId) -> bool {
        self.distance.contains_key(id)
    }

    /// The station visited just before `id` on a shortest path.
    pub fn predecessor_of(&self, id: &StationId) -> Option<&StationId> {
        self.predecessor.get(id)
    }

    /// Number of reachable stations, including the source.
    pub fn reachable_count(&self) -> usize {
        self.distance.len()
    }

    /// Reconstruct the path from the source to `target`.
    ///
    /// Empty if `target` is unreachable.
    pub fn path_to(&self, target: &StationId) -> Vec<StationId> {
        restore_path(&self.predecessor, &self.source, target)
    }
}

/// Compute hop distances from `source` to every node of the graph.
pub fn shortest_paths(
    graph: &TransitGraph,
    source: &StationId,
    strategy: PathStrategy,
) -> Result<ShortestPaths, PlannerError> {
    let Some(start) = graph.index_of(source) else {
        return Err(PlannerError::InvalidSource(source.clone()));
    };

    let (distance, predecessor) = match strategy {
        PathStrategy::Scan => scan_search(graph, start),
        PathStrategy::BinaryHeap => heap_search(graph, start),
    };

    let result = collect(graph, source.clone(), &distance, &predecessor);

    trace!(
        source = %source,
        ?strategy,
        reachable = result.reachable_count(),
        "Shortest paths computed"
    );

    Ok(result)
}

/// Per-node state indexed by graph position.
type Distances = Vec<Option<u32>>;
type Predecessors = Vec<Option<usize>>;

fn scan_search(graph: &TransitGraph, start: usize) -> (Distances, Predecessors) {
    let n = graph.node_count();
    let mut distance: Distances = vec![None; n];
    let mut predecessor: Predecessors = vec![None; n];
    let mut visited = vec![false; n];
    distance[start] = Some(0);

    loop {
        let mut next: Option<(usize, u32)> = None;
        for (idx, d) in distance.iter().enumerate() {
            if visited[idx] {
                continue;
            }
            if let Some(d) = *d
                && next.is_none_or(|(_, best)| d < best)
            {
                next = Some((idx, d));
            }
        }

        // Everything left is unreachable.
        let Some((current, current_distance)) = next else {
            break;
        };
        visited[current] = true;

        relax(graph, current, current_distance, &visited, |neighbor, alt| {
            if distance[neighbor].is_none_or(|d| alt < d) {
                distance[neighbor] = Some(alt);
                predecessor[neighbor] = Some(current);
            }
        });
    }

    (distance, predecessor)
}

fn heap_search(graph: &TransitGraph, start: usize) -> (Distances, Predecessors) {
    let n = graph.node_count();
    let mut distance: Distances = vec![None; n];
    let mut predecessor: Predecessors = vec![None; n];
    let mut visited = vec![false; n];
    let mut heap = BinaryHeap::new();

    distance[start] = Some(0);
    heap.push(Reverse((0u32, start)));

    while let Some(Reverse((current_distance, current))) = heap.pop() {
        // Stale entry
        if visited[current] {
            continue;
        }
        visited[current] = true;

        relax(graph, current, current_distance, &visited, |neighbor, alt| {
            if distance[neighbor].is_none_or(|d| alt < d) {
                distance[neighbor] = Some(alt);
                predecessor[neighbor] = Some(current);
                heap.push(Reverse((alt, neighbor)));
            }
        });
    }

    (distance, predecessor)
}

/// Offer `current_distance + weight` to every unvisited neighbour of `current`.
fn relax(
    graph: &TransitGraph,
    current: usize,
    current_distance: u32,
    visited: &[bool],
    mut offer: impl FnMut(usize, u32),
) {
    let Some(current_id) = graph.id_at(current) else {
        return;
    };
    for edge in graph.edges_from(current_id) {
        let Some(neighbor) = graph.index_of(&edge.to) else {
            continue;
        };
        if visited[neighbor] {
            continue;
        }
        offer(neighbor, current_distance.saturating_add(edge.weight));
    }
}

fn collect(
    graph: &TransitGraph,
    source: StationId,
    distance: &[Option<u32>],
    predecessor: &[Option<usize>],
) -> ShortestPaths {
    let id = |idx: usize| graph.id_at(idx).cloned();

    let distance = distance
        .iter()
        .enumerate()
        .filter_map(|(idx, d)| Some((id(idx)?, (*d)?)))
        .collect();
    let predecessor = predecessor
        .iter()
        .enumerate()
        .filter_map(|(idx, p)| Some((id(idx)?, id((*p)?)?)))
        .collect();

    ShortestPaths {
        source,
        distance,
        predecessor,
    }
}

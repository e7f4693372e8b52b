//! Minimax midpoint selection.
//!
//! Runs one shortest-path search per source, scores every station by the
//! longest ride any source would need to reach it, and picks the station with
//! the lowest score. Only stations reachable from every source are scored.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, trace};

use crate::domain::StationId;
use crate::graph::TransitGraph;

use super::error::PlannerError;
use super::shortest_path::{PathStrategy, ShortestPaths, shortest_paths};

/// Source of shortest-path trees for the midpoint selector.
///
/// This abstraction lets the selector run against fresh computations or a
/// shared cache. A provider owns the graph its trees are computed over, so
/// trees and the nodes they are scored against always come from one graph.
pub trait ShortestPathProvider {
    /// The graph trees are computed over.
    fn graph(&self) -> &TransitGraph;

    /// Shortest paths from `source` over [`graph`](Self::graph).
    fn shortest_paths(&self, source: &StationId) -> Result<Arc<ShortestPaths>, PlannerError>;
}

/// Computes every tree on demand.
#[derive(Debug, Clone, Copy)]
pub struct DirectPathProvider<'a> {
    graph: &'a TransitGraph,
    strategy: PathStrategy,
}

impl<'a> DirectPathProvider<'a> {
    pub fn new(graph: &'a TransitGraph, strategy: PathStrategy) -> Self {
        Self { graph, strategy }
    }
}

impl ShortestPathProvider for DirectPathProvider<'_> {
    fn graph(&self) -> &TransitGraph {
        self.graph
    }

    fn shortest_paths(&self, source: &StationId) -> Result<Arc<ShortestPaths>, PlannerError> {
        shortest_paths(self.graph, source, self.strategy).map(Arc::new)
    }
}

/// Outcome of a midpoint query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MidpointResult {
    /// The chosen station, or `None` if no station is reachable from every
    /// source.
    pub midpoint: Option<StationId>,

    /// Worst-case hop count for every station reachable from all sources,
    /// in graph order.
    pub scores: IndexMap<StationId, u32>,

    /// Route from each distinct source to the midpoint. A route is empty
    /// when there is no midpoint or the source cannot reach it.
    pub paths: IndexMap<StationId, Vec<StationId>>,
}

impl MidpointResult {
    /// Returns true if a common midpoint was found.
    pub fn is_found(&self) -> bool {
        self.midpoint.is_some()
    }

    /// Worst-case hop count to the chosen midpoint.
    pub fn score(&self) -> Option<u32> {
        self.midpoint
            .as_ref()
            .and_then(|m| self.scores.get(m).copied())
    }

    /// Route from one source, if that source was part of the query.
    pub fn path_from(&self, source: &StationId) -> Option<&[StationId]> {
        self.paths.get(source).map(Vec::as_slice)
    }
}

/// Find the midpoint of `sources`, computing shortest paths directly.
pub fn find_midpoint(
    graph: &TransitGraph,
    sources: &[StationId],
) -> Result<MidpointResult, PlannerError> {
    let provider = DirectPathProvider::new(graph, PathStrategy::default());
    find_midpoint_with(sources, &provider)
}

/// Find the midpoint of `sources` over the provider's graph.
///
/// Repeated sources are searched once. Ties between equally scored stations
/// go to the station that comes first in graph order.
pub fn find_midpoint_with<P: ShortestPathProvider>(
    sources: &[StationId],
    provider: &P,
) -> Result<MidpointResult, PlannerError> {
    let graph = provider.graph();
    if sources.is_empty() {
        return Err(PlannerError::NoSources);
    }

    let mut trees: IndexMap<StationId, Arc<ShortestPaths>> = IndexMap::new();
    for source in sources {
        if trees.contains_key(source) {
            continue;
        }
        trees.insert(source.clone(), provider.shortest_paths(source)?);
    }

    let mut scores = IndexMap::new();
    let mut best: Option<(&StationId, u32)> = None;

    for target in graph.node_ids() {
        let Some(score) = worst_distance(trees.values(), target) else {
            continue;
        };
        scores.insert(target.clone(), score);

        if best.is_none_or(|(_, best_score)| score < best_score) {
            best = Some((target, score));
        }
    }

    let midpoint = best.map(|(id, _)| id.clone());

    let paths = trees
        .iter()
        .map(|(source, tree)| {
            let path = match &midpoint {
                Some(m) => tree.path_to(m),
                None => Vec::new(),
            };
            if path.is_empty() && midpoint.is_some() {
                trace!(source = %source, "No route from source to midpoint");
            }
            (source.clone(), path)
        })
        .collect();

    debug!(
        sources = trees.len(),
        candidates = scores.len(),
        midpoint = ?midpoint,
        score = best.map(|(_, s)| s),
        "Midpoint selected"
    );

    Ok(MidpointResult {
        midpoint,
        scores,
        paths,
    })
}

/// The longest distance any tree needs to reach `target`, or `None` if some
/// tree cannot reach it at all.
fn worst_distance<'a>(
    trees: impl Iterator<Item = &'a Arc<ShortestPaths>>,
    target: &StationId,
) -> Option<u32> {
    trees
        .map(|tree| tree.distance_to(target))
        .try_fold(0, |worst, d| d.map(|d| worst.max(d)))
}

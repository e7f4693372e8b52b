//! Planner configuration.

use super::shortest_path::PathStrategy;

/// Configuration parameters for midpoint queries.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// How shortest-path searches select the next node.
    pub strategy: PathStrategy,

    /// Minimum number of distinct stations a midpoint request must name.
    /// The engine accepts a single source; this is a product rule applied
    /// at the request boundary.
    pub min_distinct_sources: usize,

    /// Upper bound on station search results per request.
    pub max_search_results: usize,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        strategy: PathStrategy,
        min_distinct_sources: usize,
        max_search_results: usize,
    ) -> Self {
        Self {
            strategy,
            min_distinct_sources,
            max_search_results,
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            strategy: PathStrategy::BinaryHeap,
            min_distinct_sources: 2,
            max_search_results: 20,
        }
    }
}

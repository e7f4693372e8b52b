//! Caching layer for shortest-path trees.
//!
//! A tree depends only on the graph and its source station, so repeated
//! midpoint queries that share riders can reuse earlier searches. Entries are
//! keyed by source id and bound to the one graph the cache was built for.

use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache as MokaCache;
use tracing::trace;

use crate::domain::StationId;
use crate::graph::TransitGraph;
use crate::planner::{PathStrategy, PlannerError, ShortestPathProvider, ShortestPaths, shortest_paths};

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached trees.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(10 * 60),
            max_capacity: 1000,
        }
    }
}

/// Shortest-path provider that memoizes trees per source station.
///
/// Failed searches (unknown sources) are never cached.
pub struct CachedPathProvider {
    graph: Arc<TransitGraph>,
    strategy: PathStrategy,
    trees: MokaCache<StationId, Arc<ShortestPaths>>,
}

impl CachedPathProvider {
    /// Create a new cache over `graph`.
    pub fn new(graph: Arc<TransitGraph>, strategy: PathStrategy, config: &CacheConfig) -> Self {
        let trees = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self {
            graph,
            strategy,
            trees,
        }
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.trees.run_pending_tasks();
        self.trees.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.trees.invalidate_all();
    }
}

impl ShortestPathProvider for CachedPathProvider {
    fn graph(&self) -> &TransitGraph {
        &self.graph
    }

    fn shortest_paths(&self, source: &StationId) -> Result<Arc<ShortestPaths>, PlannerError> {
        self.trees
            .try_get_with(source.clone(), || {
                trace!(source = %source, "Shortest-path cache miss");
                shortest_paths(&self.graph, source, self.strategy).map(Arc::new)
            })
            .map_err(|e| (*e).clone())
    }
}

//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::{CacheConfig, CachedPathProvider};
use crate::domain::StationRecord;
use crate::graph::TransitGraph;
use crate::planner::PlannerConfig;
use crate::stations::{StationCatalog, SubwayLine};

/// Shared application state.
///
/// The graph is built once from the dataset and only read afterwards.
#[derive(Clone)]
pub struct AppState {
    /// Transit graph built from the dataset
    pub graph: Arc<TransitGraph>,

    /// Memoized shortest-path trees over `graph`
    pub paths: Arc<CachedPathProvider>,

    /// Station search backing the station picker
    pub catalog: Arc<StationCatalog>,

    /// Planner configuration
    pub config: Arc<PlannerConfig>,
}

impl AppState {
    /// Create a new app state from a station dataset.
    pub fn new(
        stations: Vec<StationRecord>,
        lines: Vec<SubwayLine>,
        config: PlannerConfig,
        cache_config: &CacheConfig,
    ) -> Self {
        let graph = Arc::new(TransitGraph::build(&stations));
        let paths = CachedPathProvider::new(graph.clone(), config.strategy, cache_config);
        let catalog = StationCatalog::new(stations, lines);

        Self {
            graph,
            paths: Arc::new(paths),
            catalog: Arc::new(catalog),
            config: Arc::new(config),
        }
    }
}

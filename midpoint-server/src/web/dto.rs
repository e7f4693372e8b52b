//! Data transfer objects for web requests and responses.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::domain::{LatLng, LineId, StationId, StationRecord};
use crate::graph::TransitGraph;
use crate::planner::MidpointResult;
use crate::stations::{StationCatalog, StationMatch, SubwayLine};

/// Query for station search.
#[derive(Debug, Deserialize)]
pub struct StationSearchRequest {
    /// Keyword to match against station names
    pub q: String,

    /// Maximum number of results
    pub limit: Option<usize>,
}

/// Response for station search.
#[derive(Debug, Serialize)]
pub struct StationSearchResponse {
    /// Matching (station, line) records
    pub stations: Vec<StationMatch>,
}

/// Response listing known lines.
#[derive(Debug, Serialize)]
pub struct LinesResponse {
    pub lines: Vec<SubwayLine>,
}

/// Request to find a meeting point.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MidpointRequest {
    /// Stations the riders start from
    pub station_ids: Vec<StationId>,
}

/// A station for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationView {
    pub id: StationId,
    pub name: String,
    pub line_id: LineId,

    /// Line name, empty when the line is unknown
    pub line_name: String,

    /// Marker position
    pub position: LatLng,
}

/// One rider's route to the meeting point.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteView {
    /// Where the rider starts
    pub source: StationId,

    /// Stations visited, starting station first
    pub station_ids: Vec<StationId>,

    /// Coordinates of `station_ids`, for drawing the route
    pub coordinates: Vec<LatLng>,

    /// Number of hops (stations travelled or lines changed)
    pub hops: usize,

    /// False when no route to the meeting point exists
    pub available: bool,
}

/// Response for a midpoint request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MidpointResponse {
    /// Whether any station is reachable from every rider
    pub found: bool,

    /// The meeting point
    pub midpoint: Option<StationView>,

    /// Longest ride (in hops) any rider needs to reach the meeting point
    pub score: Option<u32>,

    /// Worst-case hops for every station all riders can reach
    pub scores: IndexMap<StationId, u32>,

    /// One route per distinct starting station
    pub routes: Vec<RouteView>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl StationView {
    /// Create from a station record, looking up its line name.
    pub fn from_record(record: &StationRecord, catalog: &StationCatalog) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            line_id: record.line_id.clone(),
            line_name: catalog
                .line(&record.line_id)
                .map(|l| l.name.clone())
                .unwrap_or_default(),
            position: record.position(),
        }
    }
}

impl RouteView {
    /// Create from a station id path.
    pub fn from_path(source: StationId, path: Vec<StationId>, graph: &TransitGraph) -> Self {
        let coordinates = graph.path_coordinates(&path);
        Self {
            source,
            hops: path.len().saturating_sub(1),
            available: !path.is_empty(),
            coordinates,
            station_ids: path,
        }
    }
}

impl MidpointResponse {
    /// Create from a planner result.
    pub fn from_result(
        result: MidpointResult,
        graph: &TransitGraph,
        catalog: &StationCatalog,
    ) -> Self {
        let score = result.score();
        let midpoint = result
            .midpoint
            .as_ref()
            .and_then(|id| graph.node(id))
            .map(|record| StationView::from_record(record, catalog));

        let routes = result
            .paths
            .into_iter()
            .map(|(source, path)| RouteView::from_path(source, path, graph))
            .collect();

        Self {
            found: midpoint.is_some(),
            midpoint,
            score,
            scores: result.scores,
            routes,
        }
    }
}

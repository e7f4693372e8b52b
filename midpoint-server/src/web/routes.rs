//! HTTP route handlers.

use std::collections::HashSet;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use crate::planner::{PlannerError, find_midpoint_with};

use super::dto::*;
use super::state::AppState;

/// Default number of station search results.
const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/stations/search", get(search_stations))
        .route("/api/lines", get(list_lines))
        .route("/api/midpoint", post(plan_midpoint))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Search stations by name.
async fn search_stations(
    State(state): State<AppState>,
    Query(req): Query<StationSearchRequest>,
) -> Json<StationSearchResponse> {
    let limit = req
        .limit
        .unwrap_or(DEFAULT_SEARCH_LIMIT)
        .min(state.config.max_search_results);
    let stations = state.catalog.search(&req.q, limit);

    debug!(keyword = %req.q, results = stations.len(), "Station search");

    Json(StationSearchResponse { stations })
}

/// List known lines.
async fn list_lines(State(state): State<AppState>) -> Json<LinesResponse> {
    Json(LinesResponse {
        lines: state.catalog.lines().cloned().collect(),
    })
}

/// Find the fairest meeting station for the requested riders.
async fn plan_midpoint(
    State(state): State<AppState>,
    Json(req): Json<MidpointRequest>,
) -> Result<Json<MidpointResponse>, AppError> {
    let distinct: HashSet<_> = req.station_ids.iter().collect();
    if distinct.len() < state.config.min_distinct_sources {
        return Err(AppError::BadRequest {
            message: format!(
                "at least {} different stations are required, got {}",
                state.config.min_distinct_sources,
                distinct.len()
            ),
        });
    }

    let result = find_midpoint_with(&req.station_ids, state.paths.as_ref())?;

    if !result.is_found() {
        debug!(sources = ?req.station_ids, "No common midpoint");
    }

    Ok(Json(MidpointResponse::from_result(
        result,
        &state.graph,
        &state.catalog,
    )))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl From<PlannerError> for AppError {
    fn from(e: PlannerError) -> Self {
        match e {
            PlannerError::InvalidSource(_) => AppError::NotFound {
                message: e.to_string(),
            },
            PlannerError::NoSources => AppError::BadRequest {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message.clone()),
        };

        warn!(%status, %message, "Request rejected");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheConfig;
    use crate::domain::StationId;
    use crate::planner::PlannerConfig;
    use crate::stations::{sample_stations, seoul_lines};

    fn state() -> AppState {
        AppState::new(
            sample_stations().unwrap(),
            seoul_lines(),
            PlannerConfig::default(),
            &CacheConfig::default(),
        )
    }

    fn request(ids: &[&str]) -> Json<MidpointRequest> {
        Json(MidpointRequest {
            station_ids: ids.iter().map(|s| StationId::from(*s)).collect(),
        })
    }

    fn id(s: &str) -> StationId {
        StationId::from(s)
    }

    #[tokio::test]
    async fn health_is_ok() {
        assert_eq!(health().await, "ok");
    }

    #[tokio::test]
    async fn midpoint_between_gangnam_and_hongdae() {
        // Line 2 runs gangnam - sadang_2 - sindorim - hongdae; both middle
        // stations score 2 and sadang_2 comes first.
        let Json(response) = plan_midpoint(State(state()), request(&["gangnam", "hongdae"]))
            .await
            .unwrap();

        assert!(response.found);
        assert_eq!(response.midpoint.unwrap().id, id("sadang_2"));
        assert_eq!(response.score, Some(2));
        assert_eq!(response.routes[0].station_ids, vec![id("gangnam"), id("sadang_2")]);
        assert_eq!(
            response.routes[1].station_ids,
            vec![id("hongdae"), id("sindorim"), id("sadang_2")]
        );
    }

    #[tokio::test]
    async fn disconnected_line_has_no_midpoint() {
        // Line 8 shares no station name with any other line in the sample.
        let Json(response) = plan_midpoint(State(state()), request(&["gangnam", "jamsil_8"]))
            .await
            .unwrap();

        assert!(!response.found);
        assert!(response.midpoint.is_none());
        assert!(response.routes.iter().all(|r| !r.available));
    }

    #[tokio::test]
    async fn repeated_station_counts_once() {
        let err = plan_midpoint(State(state()), request(&["gangnam", "gangnam"]))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_station_is_not_found() {
        let err = plan_midpoint(State(state()), request(&["gangnam", "atlantis"]))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn repeated_queries_share_cached_trees() {
        let state = state();
        plan_midpoint(State(state.clone()), request(&["gangnam", "hongdae"]))
            .await
            .unwrap();
        plan_midpoint(State(state.clone()), request(&["hongdae", "jongno3_1"]))
            .await
            .unwrap();

        assert_eq!(state.paths.entry_count(), 3);
    }

    #[tokio::test]
    async fn search_strips_station_suffix() {
        let Json(response) = search_stations(
            State(state()),
            Query(StationSearchRequest {
                q: "고속터미널역".to_string(),
                limit: None,
            }),
        )
        .await;

        let ids: Vec<_> = response.stations.iter().map(|s| s.station.id.as_str()).collect();
        assert_eq!(ids, vec!["expressBus_3", "expressBus_7", "expressBus_9"]);
    }

    #[tokio::test]
    async fn search_limit_is_capped() {
        let state = state();
        let max = state.config.max_search_results;
        let Json(response) = search_stations(
            State(state),
            Query(StationSearchRequest {
                // Several sample names contain "대" (대방, 광운대, 홍대입구, ...)
                q: "대".to_string(),
                limit: Some(1000),
            }),
        )
        .await;

        assert!(response.stations.len() <= max);
        assert!(!response.stations.is_empty());
    }

    #[tokio::test]
    async fn lines_are_listed() {
        let Json(response) = list_lines(State(state())).await;
        assert_eq!(response.lines.len(), 9);
    }

    #[test]
    fn planner_errors_map_to_status() {
        let not_found = AppError::from(PlannerError::InvalidSource(id("x")));
        assert_eq!(not_found.into_response().status(), StatusCode::NOT_FOUND);

        let bad = AppError::from(PlannerError::NoSources);
        assert_eq!(bad.into_response().status(), StatusCode::BAD_REQUEST);
    }
}

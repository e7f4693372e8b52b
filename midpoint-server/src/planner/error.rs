//! Planner error types.

use crate::domain::StationId;

/// Errors from shortest-path and midpoint queries.
///
/// An unreachable midpoint is not an error; it is reported through
/// [`MidpointResult`](super::MidpointResult) with no midpoint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlannerError {
    /// A requested source station is not a node of the graph
    #[error("unknown source station: {0}")]
    InvalidSource(StationId),

    /// A midpoint query named no source stations
    #[error("at least one source station is required")]
    NoSources,
}

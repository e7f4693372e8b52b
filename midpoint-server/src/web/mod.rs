//! Web layer for the midpoint finder.
//!
//! Provides HTTP endpoints for station search and midpoint queries. The
//! responses carry coordinates so a map client can place the meeting-point
//! marker and draw each rider's route without knowing about the graph.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;

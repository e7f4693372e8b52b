//! Midpoint planner.
//!
//! This module answers: "given the stations each rider starts from, which
//! station is fairest to meet at?" Fairness is minimax: the chosen station
//! minimises the longest ride (in hops) any single rider has to take.
//!
//! Distances come from one shortest-path search per rider over the
//! [`TransitGraph`](crate::graph::TransitGraph); each rider's route is then
//! rebuilt from that search's back-pointers.

mod config;
mod error;
mod midpoint;
mod path;
mod shortest_path;

pub use config::PlannerConfig;
pub use error::PlannerError;
pub use midpoint::{
    DirectPathProvider, MidpointResult, ShortestPathProvider, find_midpoint, find_midpoint_with,
};
pub use path::restore_path;
pub use shortest_path::{PathStrategy, ShortestPaths, shortest_paths};

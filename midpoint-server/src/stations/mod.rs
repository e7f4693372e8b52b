//! Station datasets, line metadata and station search.
//!
//! Supplies the records the transit graph is built from, and the search
//! lookup riders use to pick their starting stations.

mod catalog;
mod dataset;
mod error;
mod lines;

pub use catalog::{StationCatalog, StationMatch};
pub use dataset::{load_stations, parse_stations, sample_stations};
pub use error::StationError;
pub use lines::{SubwayLine, seoul_lines};

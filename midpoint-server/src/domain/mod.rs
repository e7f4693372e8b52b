//! Domain types for the midpoint finder.
//!
//! Stations are identified per (station, line) pair. Ids are opaque strings
//! supplied by the dataset; nothing here validates their format.

mod station;

pub use station::{LatLng, LineId, StationId, StationRecord, normalize_name};

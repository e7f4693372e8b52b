//! Station datasets.
//!
//! A dataset is a JSON array of station records. Records on the same line
//! must be listed in physical order, since the graph links them as given.

use std::path::Path;

use tracing::debug;

use crate::domain::StationRecord;

use super::error::StationError;

/// The bundled Seoul subway sample, in line order.
const SAMPLE_DATASET: &str = include_str!("../../data/seoul_subway.json");

/// Parse a dataset from JSON text.
pub fn parse_stations(json: &str) -> Result<Vec<StationRecord>, StationError> {
    Ok(serde_json::from_str(json)?)
}

/// Load a dataset from a JSON file.
pub fn load_stations(path: impl AsRef<Path>) -> Result<Vec<StationRecord>, StationError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| StationError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let stations = parse_stations(&contents)?;
    debug!(path = %path.display(), stations = stations.len(), "Loaded station dataset");
    Ok(stations)
}

/// The bundled sample dataset.
pub fn sample_stations() -> Result<Vec<StationRecord>, StationError> {
    parse_stations(SAMPLE_DATASET)
}

//! Station dataset error types.

/// Errors that can occur when loading a station dataset.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// Dataset file could not be read
    #[error("failed to read station dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Dataset is not a JSON array of station records
    #[error("invalid station dataset: {0}")]
    Json(#[from] serde_json::Error),
}

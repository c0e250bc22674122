//! Station dataset error types.

use crate::domain::GraphError;

/// Errors that can occur while loading the station dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// Dataset file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse dataset JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// A record is structurally fine but unusable
    #[error("invalid station {id}: {reason}")]
    InvalidRecord { id: String, reason: &'static str },

    /// The records do not form a valid graph
    #[error("invalid station graph: {0}")]
    Graph(#[from] GraphError),
}

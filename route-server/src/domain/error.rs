//! Domain error types.
//!
//! These errors describe datasets that violate the station graph's
//! integrity rules. They are raised once, at load time, and never while
//! answering a request.

use super::StationId;

/// Integrity failures found while building a [`StationGraph`](super::StationGraph).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// Two stations use the same id
    #[error("duplicate station id {0}")]
    DuplicateStation(StationId),

    /// A station belongs to no line
    #[error("station {0} has no lines")]
    NoLines(StationId),

    /// Latitude/longitude missing, non-finite or out of range
    #[error("station {station} has invalid coordinates ({lat}, {lon})")]
    InvalidCoordinates { station: StationId, lat: f64, lon: f64 },

    /// A connection names a station that is not in the dataset
    #[error("station {from} connects to unknown station {to}")]
    UnknownConnection { from: StationId, to: StationId },

    /// A station lists itself as a neighbour
    #[error("station {0} connects to itself")]
    SelfConnection(StationId),

    /// Two connected stations have no line in common
    #[error("stations {from} and {to} are connected but share no line")]
    NoSharedLine { from: StationId, to: StationId },
}

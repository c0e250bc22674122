//! Route planning error types.

use crate::domain::StationId;
use crate::geocode::GeocodeError;

/// Why a route request produced no itinerary.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// The request itself is unusable (e.g. a blank address)
    #[error("invalid route request: {0}")]
    InvalidRequest(String),

    /// One or both addresses could not be resolved to coordinates
    #[error("unable to geocode: {}", addresses.join(", "))]
    Unresolved { addresses: Vec<String> },

    /// The geocoding provider failed (network, rate limit, bad response)
    #[error("geocoding failed: {0}")]
    Geocoder(#[from] GeocodeError),

    /// No evaluated candidate pair is connected
    #[error("no route found between the candidate stations")]
    NoRouteFound,

    /// A station id missing from the graph reached the planner
    #[error("unknown station {0}")]
    UnknownStation(StationId),
}

impl PlanError {
    /// True for failures that indicate a fault rather than a bad request
    /// or an unreachable destination.
    pub fn is_internal(&self) -> bool {
        matches!(self, PlanError::UnknownStation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = PlanError::Unresolved {
            addresses: vec!["nowhere".into(), "elsewhere".into()],
        };
        assert_eq!(err.to_string(), "unable to geocode: nowhere, elsewhere");

        let err = PlanError::NoRouteFound;
        assert_eq!(
            err.to_string(),
            "no route found between the candidate stations"
        );

        let err = PlanError::UnknownStation(StationId::new("X9"));
        assert_eq!(err.to_string(), "unknown station X9");
        assert!(err.is_internal());
        assert!(!PlanError::NoRouteFound.is_internal());
    }
}

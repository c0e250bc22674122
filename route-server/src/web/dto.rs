//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Coordinates, Station};
use crate::planner::{Candidate, ResolvedAddress, RoutePlan, Segment, Step};

/// Response for the root endpoint.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub message: String,
}

/// Request to plan a route between two addresses.
#[derive(Debug, Deserialize)]
pub struct PlanRouteRequest {
    /// Free-form origin address
    pub from: String,

    /// Free-form destination address
    pub to: String,
}

/// An address and where it resolved to.
#[derive(Debug, Serialize)]
pub struct AddressResult {
    pub address: String,
    pub coordinates: Coordinates,
}

impl AddressResult {
    pub fn from_resolved(resolved: &ResolvedAddress) -> Self {
        Self {
            address: resolved.address.clone(),
            coordinates: resolved.coordinates,
        }
    }
}

/// A station on the route.
#[derive(Debug, Serialize)]
pub struct RouteStation {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub lines: Vec<String>,
}

impl RouteStation {
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id.to_string(),
            name: station.name.clone(),
            lat: station.coordinates.lat,
            lon: station.coordinates.lon,
            lines: station.lines.iter().map(|l| l.to_string()).collect(),
        }
    }
}

/// Entry or exit station and the walk to or from it.
#[derive(Debug, Serialize)]
pub struct EndpointResult {
    pub id: String,
    pub name: String,
    pub coordinates: Coordinates,

    /// Straight-line walking distance from the address
    pub walk_km: f64,
}

impl EndpointResult {
    pub fn from_candidate(candidate: &Candidate<'_>) -> Self {
        Self {
            id: candidate.station.id.to_string(),
            name: candidate.station.name.clone(),
            coordinates: candidate.station.coordinates,
            walk_km: candidate.distance_km,
        }
    }
}

/// A segment endpoint.
#[derive(Debug, Serialize)]
pub struct SegmentStop {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl SegmentStop {
    fn from_station(station: &Station) -> Self {
        Self {
            name: station.name.clone(),
            lat: station.coordinates.lat,
            lon: station.coordinates.lon,
        }
    }
}

/// One hop of the route.
#[derive(Debug, Serialize)]
pub struct SegmentResult {
    pub from: SegmentStop,
    pub to: SegmentStop,

    /// Line shared by both stations; null when they share none
    pub line: Option<String>,
}

impl SegmentResult {
    pub fn from_segment(segment: &Segment<'_>) -> Self {
        Self {
            from: SegmentStop::from_station(segment.from),
            to: SegmentStop::from_station(segment.to),
            line: segment.line.map(|l| l.to_string()),
        }
    }
}

/// One itinerary instruction.
#[derive(Debug, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StepResult {
    Walk {
        to: String,
    },
    Metro {
        line: Option<String>,
        from: String,
        to: String,
    },
    Transfer {
        at: String,
    },
    Exit {
        at: String,
    },
}

impl StepResult {
    pub fn from_step(step: &Step<'_>) -> Self {
        match step {
            Step::Walk { to } => StepResult::Walk {
                to: to.name.clone(),
            },
            Step::Metro { line, from, to } => StepResult::Metro {
                line: line.map(|l| l.to_string()),
                from: from.name.clone(),
                to: to.name.clone(),
            },
            Step::Transfer { at } => StepResult::Transfer {
                at: at.name.clone(),
            },
            Step::Exit { at } => StepResult::Exit {
                at: at.name.clone(),
            },
        }
    }
}

/// Response for a planned route.
#[derive(Debug, Serialize)]
pub struct PlanRouteResponse {
    pub success: bool,
    pub from: AddressResult,
    pub to: AddressResult,
    pub origin_station: EndpointResult,
    pub destination_station: EndpointResult,

    /// Every station ridden through, in order
    pub route: Vec<RouteStation>,

    pub segments: Vec<SegmentResult>,
    pub steps: Vec<StepResult>,
    pub line_changes: usize,
    pub score: f64,
}

impl PlanRouteResponse {
    pub fn from_plan(plan: &RoutePlan<'_>) -> Self {
        Self {
            success: true,
            from: AddressResult::from_resolved(&plan.from),
            to: AddressResult::from_resolved(&plan.to),
            origin_station: EndpointResult::from_candidate(&plan.route.origin),
            destination_station: EndpointResult::from_candidate(&plan.route.destination),
            route: plan
                .route
                .path
                .stations()
                .iter()
                .map(|s| RouteStation::from_station(s))
                .collect(),
            segments: plan
                .itinerary
                .segments
                .iter()
                .map(SegmentResult::from_segment)
                .collect(),
            steps: plan.itinerary.steps.iter().map(StepResult::from_step).collect(),
            line_changes: plan.route.line_changes,
            score: plan.route.score,
        }
    }
}

/// A station in the network listing.
#[derive(Debug, Serialize)]
pub struct StationResult {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub lines: Vec<String>,
    pub connections: Vec<String>,
}

impl StationResult {
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id.to_string(),
            name: station.name.clone(),
            lat: station.coordinates.lat,
            lon: station.coordinates.lon,
            lines: station.lines.iter().map(|l| l.to_string()).collect(),
            connections: station.connections.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LineId, StationId};

    fn station(id: &str, name: &str, lines: &[&str]) -> Station {
        Station::new(
            StationId::new(id),
            name,
            Coordinates::new(12.97, 77.57),
            lines.iter().map(|l| LineId::new(*l)).collect(),
            vec![],
        )
    }

    #[test]
    fn steps_are_tagged_by_type() {
        let majestic = station("MJS", "Majestic", &["purple", "green"]);
        let chickpete = station("CKP", "Chickpete", &["green"]);
        let green = LineId::new("green");

        let walk = serde_json::to_value(StepResult::from_step(&Step::Walk { to: &majestic })).unwrap();
        assert_eq!(walk, serde_json::json!({"type": "walk", "to": "Majestic"}));

        let metro = serde_json::to_value(StepResult::from_step(&Step::Metro {
            line: Some(&green),
            from: &majestic,
            to: &chickpete,
        }))
        .unwrap();
        assert_eq!(
            metro,
            serde_json::json!({"type": "metro", "line": "green", "from": "Majestic", "to": "Chickpete"})
        );

        let exit = serde_json::to_value(StepResult::from_step(&Step::Exit { at: &chickpete })).unwrap();
        assert_eq!(exit, serde_json::json!({"type": "exit", "at": "Chickpete"}));
    }

    #[test]
    fn unshared_segment_line_is_null() {
        let a = station("A", "Alpha", &["L1"]);
        let b = station("B", "Bravo", &["L2"]);
        let segment = Segment {
            from: &a,
            to: &b,
            line: None,
        };

        let json = serde_json::to_value(SegmentResult::from_segment(&segment)).unwrap();
        assert!(json["line"].is_null());
        assert_eq!(json["from"]["name"], "Alpha");
        assert_eq!(json["to"]["lat"], 12.97);
    }

    #[test]
    fn station_listing_keeps_connections() {
        let mut s = station("MJS", "Majestic", &["purple", "green"]);
        s.connections = vec![StationId::new("CRS"), StationId::new("CKP")];

        let json = serde_json::to_value(StationResult::from_station(&s)).unwrap();
        assert_eq!(json["lines"], serde_json::json!(["purple", "green"]));
        assert_eq!(json["connections"], serde_json::json!(["CRS", "CKP"]));
    }
}

//! Small graphs shared by the planner tests.

use crate::domain::{Coordinates, GraphOptions, LineId, Station, StationGraph, StationId};

pub fn id(s: &str) -> StationId {
    StationId::new(s)
}

pub fn station(name: &str, lat: f64, lon: f64, lines: &[&str], connections: &[&str]) -> Station {
    Station::new(
        id(name),
        name.to_string(),
        Coordinates::new(lat, lon),
        lines.iter().map(|l| LineId::new(*l)).collect(),
        connections.iter().map(|c| id(c)).collect(),
    )
}

pub fn graph(stations: Vec<Station>) -> StationGraph {
    StationGraph::build(stations, &GraphOptions::default()).unwrap()
}

/// A(L1) - B(L1, L2) - C(L2), laid out west to east about 13 km apart.
pub fn abc() -> StationGraph {
    graph(vec![
        station("A", 12.97, 77.45, &["L1"], &["B"]),
        station("B", 12.97, 77.57, &["L1", "L2"], &["A", "C"]),
        station("C", 12.97, 77.69, &["L2"], &["B"]),
    ])
}

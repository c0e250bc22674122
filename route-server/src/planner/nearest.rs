//! Nearest-station candidate generation.

use crate::domain::{Coordinates, Station, StationGraph};

use super::distance::distance_km;

/// A station considered as a walking entry or exit point.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'g> {
    pub station: &'g Station,
    /// Walking distance from the address, always >= 0.
    pub distance_km: f64,
}

/// The `k` stations closest to `coords`, nearest first.
///
/// Equal distances keep the graph's dataset order (the sort is stable).
/// Returns every station if the graph has fewer than `k`, and nothing for
/// an empty graph.
pub fn nearest_stations(graph: &StationGraph, coords: Coordinates, k: usize) -> Vec<Candidate<'_>> {
    let mut ranked: Vec<Candidate<'_>> = graph
        .stations()
        .iter()
        .map(|station| Candidate {
            station,
            distance_km: distance_km(coords, station.coordinates),
        })
        .collect();

    ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    ranked.truncate(k);
    ranked
}

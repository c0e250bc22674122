//! Choosing the best entry and exit stations.
//!
//! The nearest station is not always the best one: a slightly longer walk
//! to a station on the right line beats an interchange. We therefore try
//! every pairing of the `k` nearest stations at each end and keep the one
//! with the lowest score (see [`PlannerConfig::score`]).

use tracing::{debug, trace};

use crate::domain::{Coordinates, StationGraph};

use super::bfs::{StationPath, shortest_path};
use super::config::PlannerConfig;
use super::error::PlanError;
use super::lines::count_line_changes;
use super::nearest::{Candidate, nearest_stations};

/// The winning candidate pair and the path between them.
#[derive(Debug, Clone)]
pub struct SelectedRoute<'g> {
    pub origin: Candidate<'g>,
    pub destination: Candidate<'g>,
    pub path: StationPath<'g>,
    pub line_changes: usize,
    pub score: f64,
}

/// Evaluate the candidate cross product and return the best-scoring pair.
///
/// Pairs without a connecting path are skipped. On equal scores the pair
/// evaluated first wins (origin candidates outer, nearest first).
pub fn select_route<'g>(
    graph: &'g StationGraph,
    origin: Coordinates,
    destination: Coordinates,
    config: &PlannerConfig,
) -> Result<SelectedRoute<'g>, PlanError> {
    let origins = nearest_stations(graph, origin, config.candidates);
    let destinations = nearest_stations(graph, destination, config.candidates);

    let mut best: Option<SelectedRoute<'g>> = None;
    let mut evaluated = 0;

    for from in &origins {
        for to in &destinations {
            let Some(path) = shortest_path(graph, &from.station.id, &to.station.id)? else {
                trace!(from = %from.station.id, to = %to.station.id, "candidate pair unreachable");
                continue;
            };
            evaluated += 1;

            let line_changes = count_line_changes(path.stations());
            let score = config.score(
                from.distance_km,
                to.distance_km,
                path.hops(),
                line_changes,
            );

            trace!(
                from = %from.station.id,
                to = %to.station.id,
                hops = path.hops(),
                line_changes,
                score,
                "scored candidate pair"
            );

            if best.as_ref().is_none_or(|b| score < b.score) {
                best = Some(SelectedRoute {
                    origin: *from,
                    destination: *to,
                    path,
                    line_changes,
                    score,
                });
            }
        }
    }

    let best = best.ok_or(PlanError::NoRouteFound)?;

    debug!(
        origin = %best.origin.station.id,
        destination = %best.destination.station.id,
        pairs = origins.len() * destinations.len(),
        reachable = evaluated,
        score = best.score,
        "selected route"
    );

    Ok(best)
}

#[cfg(test)]
#[path = "select_tests.rs"]
mod tests;

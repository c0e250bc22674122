//! Route planner over the station graph.
//!
//! This module implements the core planning pipeline that answers:
//! "I'm at this address - which stations and lines get me to that one?"
//!
//! 1. Rank stations by walking distance from each address ([`nearest_stations`]).
//! 2. Find the fewest-hop path for every candidate pair ([`shortest_path`]).
//! 3. Score each path on walking, hops and line changes ([`select_route`]).
//! 4. Render the winner as steps and segments ([`build_itinerary`]).

mod bfs;
mod config;
mod distance;
mod error;
mod itinerary;
mod lines;
mod nearest;
mod plan;
mod select;

#[cfg(test)]
mod fixtures;

pub use bfs::{StationPath, shortest_path};
pub use config::PlannerConfig;
pub use distance::distance_km;
pub use error::PlanError;
pub use itinerary::{Itinerary, Segment, Step, build_itinerary};
pub use lines::{LineRun, count_line_changes, hop_lines, line_runs};
pub use nearest::{Candidate, nearest_stations};
pub use plan::{ResolvedAddress, RoutePlan, plan_route};
pub use select::{SelectedRoute, select_route};

//! Domain types for the metro route planner.
//!
//! This module contains the validated network model. All types enforce
//! their invariants at construction time, so code that receives a
//! [`StationGraph`] can trust that every connection points at a real
//! station.

mod error;
mod graph;
mod station;

pub use error::GraphError;
pub use graph::{GraphOptions, StationGraph, UnsharedLinePolicy};
pub use station::{Coordinates, LineId, Station, StationId};

//! Station dataset loading.
//!
//! The network is read once at startup from a JSON file, validated into
//! a [`StationGraph`](crate::domain::StationGraph) and never touched again.

mod dataset;
mod error;

pub use dataset::{load_stations, parse_stations};
pub use error::DatasetError;

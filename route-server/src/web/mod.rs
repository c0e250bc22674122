//! Web layer for the metro route planner.
//!
//! Provides HTTP endpoints for planning routes and listing the network.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::{AppGeocoder, AppState};

//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedGeocoder;
use crate::domain::StationGraph;
use crate::geocode::{GeocodeBackend, Paced};
use crate::planner::PlannerConfig;

/// The geocoder stack used by the server: cache, then pacing, then the
/// selected backend.
pub type AppGeocoder = CachedGeocoder<Paced<GeocodeBackend>>;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Station network, loaded once at startup
    pub graph: Arc<StationGraph>,

    /// Cached, paced geocoder
    pub geocoder: Arc<AppGeocoder>,

    /// Route planner configuration
    pub config: Arc<PlannerConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(graph: StationGraph, geocoder: AppGeocoder, config: PlannerConfig) -> Self {
        Self {
            graph: Arc::new(graph),
            geocoder: Arc::new(geocoder),
            config: Arc::new(config),
        }
    }
}

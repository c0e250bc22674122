//! End-to-end planning: addresses in, itinerary out.

use tracing::{debug, info};

use crate::domain::{Coordinates, StationGraph};
use crate::geocode::Geocoder;

use super::config::PlannerConfig;
use super::error::PlanError;
use super::itinerary::{Itinerary, build_itinerary};
use super::select::{SelectedRoute, select_route};

/// A free-form address and the coordinates it resolved to.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAddress {
    pub address: String,
    pub coordinates: Coordinates,
}

/// A successfully planned trip.
#[derive(Debug, Clone)]
pub struct RoutePlan<'g> {
    pub from: ResolvedAddress,
    pub to: ResolvedAddress,
    pub route: SelectedRoute<'g>,
    pub itinerary: Itinerary<'g>,
}

/// Plan a trip between two addresses.
///
/// Both addresses are geocoded one after the other, never concurrently;
/// pacing between the two lookups is the geocoder's job (see
/// [`Paced`](crate::geocode::Paced)). Everything after geocoding is
/// synchronous and bounded.
pub async fn plan_route<'g, G: Geocoder>(
    geocoder: &G,
    graph: &'g StationGraph,
    config: &PlannerConfig,
    from: &str,
    to: &str,
) -> Result<RoutePlan<'g>, PlanError> {
    let from = from.trim();
    let to = to.trim();
    if from.is_empty() || to.is_empty() {
        return Err(PlanError::InvalidRequest(
            "both 'from' and 'to' addresses are required".to_string(),
        ));
    }

    let from_coords = geocoder.geocode(from).await?;
    let to_coords = geocoder.geocode(to).await?;

    let (origin, destination) = match (from_coords, to_coords) {
        (Some(origin), Some(destination)) => (origin, destination),
        (origin, destination) => {
            let mut addresses = Vec::new();
            if origin.is_none() {
                addresses.push(from.to_string());
            }
            if destination.is_none() {
                addresses.push(to.to_string());
            }
            debug!(?addresses, "addresses did not resolve");
            return Err(PlanError::Unresolved { addresses });
        }
    };

    let route = select_route(graph, origin, destination, config)?;
    let itinerary = build_itinerary(&route.path);

    info!(
        from,
        to,
        origin_station = %route.origin.station.name,
        destination_station = %route.destination.station.name,
        hops = route.path.hops(),
        line_changes = route.line_changes,
        "planned route"
    );

    Ok(RoutePlan {
        from: ResolvedAddress {
            address: from.to_string(),
            coordinates: origin,
        },
        to: ResolvedAddress {
            address: to.to_string(),
            coordinates: destination,
        },
        route,
        itinerary,
    })
}

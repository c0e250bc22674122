//! Address geocoding.
//!
//! The planner only sees the [`Geocoder`] trait. Production uses the
//! OpenStreetMap Nominatim API, which permits at most one request per
//! second and requires an identifying User-Agent, so the client is
//! always wrapped in [`Paced`].

mod error;
mod mock;
mod nominatim;
mod paced;

use std::future::Future;

use crate::domain::Coordinates;

pub use error::GeocodeError;
pub use mock::MockGeocoder;
pub use nominatim::{NominatimClient, NominatimConfig};
pub use paced::{DEFAULT_MIN_INTERVAL, Paced};

/// Resolves a free-form address to coordinates.
///
/// `Ok(None)` means the provider answered but found nothing.
pub trait Geocoder: Send + Sync {
    fn geocode(
        &self,
        address: &str,
    ) -> impl Future<Output = Result<Option<Coordinates>, GeocodeError>> + Send;
}

/// The geocoder selected at startup.
#[derive(Debug, Clone)]
pub enum GeocodeBackend {
    Nominatim(NominatimClient),
    Mock(MockGeocoder),
}

impl Geocoder for GeocodeBackend {
    async fn geocode(&self, address: &str) -> Result<Option<Coordinates>, GeocodeError> {
        match self {
            GeocodeBackend::Nominatim(client) => client.geocode(address).await,
            GeocodeBackend::Mock(mock) => mock.geocode(address).await,
        }
    }
}

/// Canonical form of an address for lookups and cache keys: trimmed,
/// lower-cased, inner whitespace collapsed.
pub(crate) fn normalize_address(address: &str) -> String {
    address
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

//! Caching layer for geocoding results.
//!
//! Geocoding is the only slow, rate-limited step of a route request, and
//! people ask for the same handful of places over and over. Successful
//! lookups are cached by normalised address; misses are not, so a place
//! added to the map upstream shows up without a restart.

use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::trace;

use crate::domain::Coordinates;
use crate::geocode::{GeocodeError, Geocoder, normalize_address};

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(24 * 60 * 60),
            max_capacity: 10_000,
        }
    }
}

/// A geocoder with a result cache in front of it.
///
/// Cache hits never reach the inner geocoder, so they are not paced.
pub struct CachedGeocoder<G> {
    inner: G,
    resolved: MokaCache<String, Coordinates>,
}

impl<G> CachedGeocoder<G> {
    /// Create a new cached geocoder with the given configuration.
    pub fn new(inner: G, config: &CacheConfig) -> Self {
        let resolved = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { inner, resolved }
    }

    pub fn inner(&self) -> &G {
        &self.inner
    }
}

impl<G: Geocoder> Geocoder for CachedGeocoder<G> {
    async fn geocode(&self, address: &str) -> Result<Option<Coordinates>, GeocodeError> {
        let key = normalize_address(address);

        if let Some(hit) = self.resolved.get(&key).await {
            trace!(address, "geocode cache hit");
            return Ok(Some(hit));
        }

        let result = self.inner.geocode(address).await?;
        if let Some(coordinates) = result {
            self.resolved.insert(key, coordinates).await;
        }
        Ok(result)
    }
}

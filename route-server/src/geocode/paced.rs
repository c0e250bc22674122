//! Request pacing for geocoding providers.

use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::trace;

use crate::domain::Coordinates;

use super::Geocoder;
use super::error::GeocodeError;

/// Default gap between provider calls (Nominatim allows one per second).
pub const DEFAULT_MIN_INTERVAL: Duration = Duration::from_secs(1);

/// Wraps a geocoder so that calls run one at a time with at least
/// `min_interval` between the end of one call and the start of the next.
///
/// Pacing is process-wide: concurrent route requests queue on the same
/// lock.
#[derive(Debug)]
pub struct Paced<G> {
    inner: G,
    min_interval: Duration,
    last_call: Mutex<Option<Instant>>,
}

impl<G> Paced<G> {
    pub fn new(inner: G, min_interval: Duration) -> Self {
        Self {
            inner,
            min_interval,
            last_call: Mutex::new(None),
        }
    }

    pub fn inner(&self) -> &G {
        &self.inner
    }
}

impl<G: Geocoder> Geocoder for Paced<G> {
    async fn geocode(&self, address: &str) -> Result<Option<Coordinates>, GeocodeError> {
        let mut last_call = self.last_call.lock().await;

        if let Some(previous) = *last_call {
            let ready_at = previous + self.min_interval;
            if ready_at > Instant::now() {
                trace!(wait_ms = (ready_at - Instant::now()).as_millis() as u64, "pacing geocoder");
                tokio::time::sleep_until(ready_at).await;
            }
        }

        let result = self.inner.geocode(address).await;
        *last_call = Some(Instant::now());
        result
    }
}

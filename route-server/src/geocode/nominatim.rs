//! Nominatim (OpenStreetMap) geocoding client.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::domain::Coordinates;

use super::Geocoder;
use super::error::GeocodeError;

/// Default base URL for the public Nominatim instance.
const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Default User-Agent; Nominatim's usage policy requires one that
/// identifies the application.
const DEFAULT_USER_AGENT: &str = "route-server/0.1 (metro route planner)";

/// One hit of a `/search?format=json` response. Nominatim sends
/// coordinates as strings.
#[derive(Debug, Deserialize)]
struct Place {
    lat: String,
    lon: String,
}

/// Configuration for the Nominatim client.
#[derive(Debug, Clone)]
pub struct NominatimConfig {
    /// Base URL for the API
    pub base_url: String,
    /// User-Agent header sent with every request
    pub user_agent: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl NominatimConfig {
    /// Create a config for the public instance with the given User-Agent.
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: user_agent.into(),
            timeout_secs: 10,
        }
    }

    /// Set a custom base URL (self-hosted instance or testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self::new(DEFAULT_USER_AGENT)
    }
}

/// Client for the Nominatim search API.
///
/// Does no pacing of its own; wrap it in [`Paced`](super::Paced) to
/// respect the provider's one-request-per-second policy.
#[derive(Debug, Clone)]
pub struct NominatimClient {
    http: reqwest::Client,
    base_url: String,
}

impl NominatimClient {
    /// Create a new Nominatim client.
    pub fn new(config: NominatimConfig) -> Result<Self, GeocodeError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl Geocoder for NominatimClient {
    async fn geocode(&self, address: &str) -> Result<Option<Coordinates>, GeocodeError> {
        let url = format!("{}/search", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[("q", address), ("format", "json"), ("limit", "1")])
            .send()
            .await?;
        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GeocodeError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeocodeError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let result = parse_search_response(&body)?;
        debug!(address, found = result.is_some(), "nominatim lookup");
        Ok(result)
    }
}

/// Extract the first hit's coordinates from a search response body.
fn parse_search_response(body: &str) -> Result<Option<Coordinates>, GeocodeError> {
    let places: Vec<Place> = serde_json::from_str(body).map_err(|e| GeocodeError::Json {
        message: e.to_string(),
    })?;

    let Some(place) = places.into_iter().next() else {
        return Ok(None);
    };

    let coordinates = match (place.lat.trim().parse(), place.lon.trim().parse()) {
        (Ok(lat), Ok(lon)) => Coordinates::new(lat, lon),
        _ => {
            return Err(GeocodeError::InvalidCoordinates {
                lat: place.lat,
                lon: place.lon,
            });
        }
    };

    if !coordinates.is_valid() {
        return Err(GeocodeError::InvalidCoordinates {
            lat: place.lat,
            lon: place.lon,
        });
    }

    Ok(Some(coordinates))
}

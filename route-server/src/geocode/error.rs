//! Geocoding error types.

/// Errors that can occur when talking to a geocoding provider.
///
/// An address that simply does not resolve is not an error; providers
/// return `Ok(None)` for that.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider refused the request under its usage policy
    #[error("rate limited by geocoding provider")]
    RateLimited,

    /// Provider returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Provider returned coordinates that are not numbers in range
    #[error("invalid coordinates in response: ({lat}, {lon})")]
    InvalidCoordinates { lat: String, lon: String },

    /// Mock address table could not be loaded
    #[error("mock geocoder data error: {message}")]
    MockData { message: String },
}

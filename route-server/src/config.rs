//! Server configuration from environment variables.
//!
//! | Variable                  | Default                              |
//! |---------------------------|--------------------------------------|
//! | `BIND_ADDR`               | `0.0.0.0:4000`                       |
//! | `STATIONS_PATH`           | bundled `data/metro_stations.json`   |
//! | `GEOCODER_URL`            | public Nominatim                     |
//! | `GEOCODER_USER_AGENT`     | `route-server/0.1 (...)`             |
//! | `GEOCODE_MIN_INTERVAL_MS` | `1000`                               |
//! | `MOCK_GEOCODE_FILE`       | unset (use Nominatim)                |
//! | `REJECT_UNSHARED_LINES`   | `false`                              |
//!
//! The bundled dataset path is absolute (resolved against the crate
//! directory at build time), so the server starts from any working
//! directory.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::cache::CacheConfig;
use crate::domain::{GraphOptions, UnsharedLinePolicy};
use crate::geocode::{DEFAULT_MIN_INTERVAL, NominatimConfig};
use crate::planner::PlannerConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:4000";
const DEFAULT_STATIONS_PATH: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/data/metro_stations.json");

/// Errors in the environment configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}={value:?}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Where addresses are resolved.
#[derive(Debug, Clone)]
pub enum GeocoderSource {
    Nominatim(NominatimConfig),
    /// Fixed address table loaded from a JSON file
    MockFile(PathBuf),
}

/// Everything `main` needs to start the server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub stations_path: PathBuf,
    pub graph: GraphOptions,
    pub geocoder: GeocoderSource,
    pub geocode_min_interval: Duration,
    pub cache: CacheConfig,
    pub planner: PlannerConfig,
}

impl ServerConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read the configuration through `lookup`, treating blank values as
    /// unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let bind_addr_raw = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr_raw
            .trim()
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                var: "BIND_ADDR",
                value: bind_addr_raw.clone(),
                reason: e.to_string(),
            })?;

        let stations_path = get("STATIONS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIONS_PATH));

        let geocode_min_interval = match get("GEOCODE_MIN_INTERVAL_MS") {
            Some(raw) => {
                let ms: u64 = raw.trim().parse().map_err(|e: std::num::ParseIntError| {
                    ConfigError::Invalid {
                        var: "GEOCODE_MIN_INTERVAL_MS",
                        value: raw.clone(),
                        reason: e.to_string(),
                    }
                })?;
                Duration::from_millis(ms)
            }
            None => DEFAULT_MIN_INTERVAL,
        };

        let reject_unshared = match get("REJECT_UNSHARED_LINES") {
            Some(raw) => parse_flag("REJECT_UNSHARED_LINES", &raw)?,
            None => false,
        };
        let graph = GraphOptions::default().with_unshared_lines(if reject_unshared {
            UnsharedLinePolicy::Reject
        } else {
            UnsharedLinePolicy::Allow
        });

        let geocoder = match get("MOCK_GEOCODE_FILE") {
            Some(path) => GeocoderSource::MockFile(PathBuf::from(path)),
            None => {
                let mut nominatim = match get("GEOCODER_USER_AGENT") {
                    Some(agent) => NominatimConfig::new(agent),
                    None => NominatimConfig::default(),
                };
                if let Some(url) = get("GEOCODER_URL") {
                    nominatim = nominatim.with_base_url(url);
                }
                GeocoderSource::Nominatim(nominatim)
            }
        };

        Ok(Self {
            bind_addr,
            stations_path,
            graph,
            geocoder,
            geocode_min_interval,
            cache: CacheConfig::default(),
            planner: PlannerConfig::default(),
        })
    }
}

fn parse_flag(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            var,
            value: raw.to_string(),
            reason: "expected true or false".to_string(),
        }),
    }
}

use std::error::Error;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use route_server::cache::CachedGeocoder;
use route_server::config::{GeocoderSource, ServerConfig};
use route_server::geocode::{GeocodeBackend, MockGeocoder, NominatimClient, Paced};
use route_server::stations::load_stations;
use route_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "server failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let config = ServerConfig::from_env()?;

    // A bad dataset is fatal; there is nothing useful to serve without it.
    let graph = load_stations(&config.stations_path, &config.graph)?;

    let backend = match &config.geocoder {
        GeocoderSource::Nominatim(nominatim) => {
            info!(base_url = %nominatim.base_url, "using Nominatim geocoder");
            GeocodeBackend::Nominatim(NominatimClient::new(nominatim.clone())?)
        }
        GeocoderSource::MockFile(path) => {
            let mock = MockGeocoder::from_file(path)?;
            info!(path = %path.display(), addresses = mock.len(), "using mock geocoder");
            GeocodeBackend::Mock(mock)
        }
    };
    let geocoder = CachedGeocoder::new(
        Paced::new(backend, config.geocode_min_interval),
        &config.cache,
    );

    let state = AppState::new(graph, geocoder, config.planner.clone());
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "metro route planner listening");
    info!("  GET  /                - Status");
    info!("  GET  /health          - Health check");
    info!("  POST /route           - Plan a route between two addresses");
    info!("  GET  /metro-stations  - Station network");

    axum::serve(listener, app).await?;
    Ok(())
}

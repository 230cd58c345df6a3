use std::error::Error;
use std::net::SocketAddr;

use fuel_server::fuelcheck::{ApiConnector, FuelCheckClient, FuelCheckConfig, MockFuelApi};
use fuel_server::query::QueryService;
use fuel_server::web::{AppState, create_router};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let addr: SocketAddr = env_var("BIND_ADDR")
        .as_deref()
        .unwrap_or(DEFAULT_BIND_ADDR)
        .parse()?;

    // Serve fixtures instead of the live API
    if let Some(dir) = env_var("FUEL_MOCK_DIR") {
        let mock = MockFuelApi::from_dir(&dir)?;
        info!(dir = %dir, stations = mock.station_count(), "using mock FuelCheck data");
        return serve(mock, addr).await;
    }

    let client = FuelCheckClient::new(fuelcheck_config()?)?;
    info!(base_url = %client.base_url(), "using live FuelCheck API");
    serve(client, addr).await
}

fn fuelcheck_config() -> Result<FuelCheckConfig, Box<dyn Error>> {
    let mut config = FuelCheckConfig::new();

    if let Some(url) = env_var("FUELCHECK_BASE_URL") {
        config = config.with_base_url(url);
    }
    match env_var("FUELCHECK_API_KEY") {
        Some(key) => config = config.with_api_key(key),
        None => warn!("FUELCHECK_API_KEY not set; requests are sent without an API key"),
    }
    if let Some(secs) = env_var("FUELCHECK_TIMEOUT_SECS") {
        config = config.with_timeout(secs.parse()?);
    }

    Ok(config)
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

async fn serve<C>(connector: C, addr: SocketAddr) -> Result<(), Box<dyn Error>>
where
    C: ApiConnector + Send + Sync + 'static,
{
    let app = create_router(AppState::new(QueryService::new(connector)));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "fuel station server listening");
    info!("  GET  /health           - Health check");
    info!("  POST /stations         - Stations for a query configuration");
    info!("  POST /config/validate  - Validate a query configuration");

    axum::serve(listener, app).await?;
    Ok(())
}

use std::net::SocketAddr;

use midpoint_server::cache::CacheConfig;
use midpoint_server::planner::PlannerConfig;
use midpoint_server::stations::{load_stations, sample_stations, seoul_lines};
use midpoint_server::web::{AppState, create_router};
use tracing::{error, info};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Address used when `MIDPOINT_ADDR` is not set.
const DEFAULT_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 3000);

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with(fmt::layer())
        .init();

    // Station dataset: a JSON file if given, otherwise the bundled sample
    let stations = match std::env::var("MIDPOINT_STATIONS") {
        Ok(path) => load_stations(&path),
        Err(_) => sample_stations(),
    };
    let stations = match stations {
        Ok(stations) => stations,
        Err(e) => {
            error!(error = %e, "Failed to load stations");
            std::process::exit(1);
        }
    };
    info!(count = stations.len(), "Loaded stations");

    let state = AppState::new(
        stations,
        seoul_lines(),
        PlannerConfig::default(),
        &CacheConfig::default(),
    );
    info!(
        nodes = state.graph.node_count(),
        edges = state.graph.edge_count(),
        "Built transit graph"
    );

    let app = create_router(state);

    let addr = match std::env::var("MIDPOINT_ADDR") {
        Ok(raw) => match raw.parse::<SocketAddr>() {
            Ok(addr) => addr,
            Err(e) => {
                error!(addr = %raw, error = %e, "Invalid MIDPOINT_ADDR");
                std::process::exit(1);
            }
        },
        Err(_) => SocketAddr::from(DEFAULT_ADDR),
    };

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(%addr, error = %e, "Failed to bind");
            std::process::exit(1);
        }
    };

    info!("Subway midpoint server listening on http://{addr}");
    info!("  GET  /health              - Health check");
    info!("  GET  /api/stations/search - Search stations by name");
    info!("  GET  /api/lines           - List subway lines");
    info!("  POST /api/midpoint        - Find a meeting station");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

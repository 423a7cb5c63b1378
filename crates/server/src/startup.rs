use std::net::SocketAddr;

use axum::Router;
use common::utils::logging::init_logging_from_env;
use configs::AppConfig;
use dotenvy::dotenv;
use models::PizzaContext;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Connect, ensure schema and seed data, and build the router.
/// Called once before the listener accepts any request.
pub async fn build_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    common::env::ensure_db_dir(&cfg.database.url).await?;

    let ctx = PizzaContext::connect(&cfg.database)
        .await
        .map_err(|e| StartupError::Runtime(e.to_string()))?;
    let seeded = service::seed::initialize(&ctx)
        .await
        .map_err(|e| StartupError::Runtime(e.to_string()))?;
    info!(seeded, "database initialized");

    Ok(routes::build_router(ServerState::new(ctx), build_cors()))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl_c");
        std::future::pending::<()>().await;
    }
    info!(service = "server", event = "shutdown_signal", "received Ctrl+C, draining connections");
}

/// Serve the application until Ctrl+C or a listener failure.
pub async fn serve(cfg: AppConfig) -> Result<(), StartupError> {
    let app = build_app(&cfg).await?;

    let addr: SocketAddr = cfg
        .server
        .bind_addr()
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address: {e}")))?;
    info!(%addr, "starting pizza server");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| StartupError::Runtime(format!("bind {addr}: {e}")))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| StartupError::Runtime(e.to_string()))?;
    Ok(())
}

/// Public entry: load configuration and run the HTTP server
pub async fn run() -> Result<(), StartupError> {
    dotenv().ok();
    init_logging_from_env();

    let cfg = AppConfig::load_or_env().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    serve(cfg).await
}

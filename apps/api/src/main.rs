mod analysis;
mod config;
mod errors;
mod insights;
mod routes;
mod state;
mod taxonomy;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::taxonomy::load_taxonomy;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Skill Bridge v{}", env!("CARGO_PKG_VERSION"));

    // Build the taxonomy once, before serving. An unparseable snapshot aborts startup.
    let specs = config.snapshot_specs();
    let taxonomy = tokio::task::spawn_blocking(move || load_taxonomy(&specs))
        .await
        .context("taxonomy build task failed")??;

    let state = AppState::new(taxonomy, config.clone())?;
    if state.detector.is_empty() {
        warn!("No detectable skill labels; every analysis will come back empty");
    } else {
        info!("{} skill labels detectable", state.detector.len());
    }

    let app = build_router(state)
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

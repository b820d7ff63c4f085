mod auth;
mod config;
mod errors;
mod extract;
mod jobs;
mod models;
mod resume;
mod routes;
mod state;
mod storage;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::FileSlots;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Job Tracker API v{}", env!("CARGO_PKG_VERSION"));

    // Durable slots live as files under DATA_DIR
    let slots = FileSlots::open(&config.data_dir)
        .with_context(|| format!("Cannot open data directory {}", config.data_dir.display()))?;
    info!("Data directory: {}", slots.dir().display());

    info!(
        "Transition policy: {:?}, demo seed: {}",
        config.transition_policy, config.seed_demo_data
    );

    // Build app state (loads or seeds the job collection)
    let state = AppState::build(config.clone(), Arc::new(slots))
        .context("Failed to load saved applications")?;

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // the dashboard is served from another local origin

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

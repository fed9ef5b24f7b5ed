mod config;
mod error;
mod graph;
mod router;
mod search;
mod state;

use crate::config::ServerConfig;
use crate::router::create_router;
use crate::state::AppState;
use axum::serve;
use std::sync::Arc;
use tracing::{Level, info};
use wayfarer_core::wayfarer::Wayfarer;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::from_filename("./.env.local").ok();
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = ServerConfig::from_env()?;

    let wayfarer = match &config.graph_path {
        Some(path) => Wayfarer::from_json_file(path)?,
        None => Wayfarer::addis_ababa()?,
    };

    info!(
        "Serving graph with {} nodes and {} edges",
        wayfarer.graph().node_count(),
        wayfarer.graph().edge_count()
    );

    let state = Arc::new(AppState { wayfarer });
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!("Listening on {}", config.addr);

    serve(listener, app).await?;

    Ok(())
}

use std::sync::Arc;

use axum::Router;
use axum::http::Method;
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::graph::get_graph::get_graph;
use crate::search::search_handler::search_handler;
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any)
        .allow_headers(Any);

    Router::new()
        .route("/search", post(search_handler))
        .route("/graph", get(get_graph))
        .route("/health", get(|| async { "ok" }))
        .layer(ServiceBuilder::new().layer(cors_layer))
        .with_state(state)
}

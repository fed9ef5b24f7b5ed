use crate::error::ApiError;
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;
use tracing::info;
use wayfarer_core::query::route_request::RouteRequest;
use wayfarer_core::query::route_response::RouteResponse;

pub struct SearchResponse(RouteResponse);

impl IntoResponse for SearchResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self.0)).into_response()
    }
}

pub async fn search_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RouteRequest>, JsonRejection>,
) -> Result<SearchResponse, ApiError> {
    let Json(body) = payload?;

    info!(
        "Search {} -> {} with {} (blocked: {:?})",
        body.start, body.goal, body.algorithm, body.blocked
    );

    let response = state.wayfarer.route(&body)?;

    Ok(SearchResponse(response))
}

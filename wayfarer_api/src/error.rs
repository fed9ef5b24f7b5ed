use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::{error, warn};
use wayfarer_core::error::QueryError;

pub const UNKNOWN_NODE_MESSAGE: &str = "Unknown start or goal state. Please check the map nodes.";
pub const UNKNOWN_ALGORITHM_MESSAGE: &str = "Unknown algorithm selected.";
pub const NO_PATH_MESSAGE: &str = "No path found. The destination is unreachable or blocked.";

pub enum ApiError {
    BadRequest(String),
    InternalServerError(String),
    /// Valid query without a route, still reports what the search explored
    NotFound {
        message: String,
        explored: Vec<String>,
    },
}

impl From<QueryError> for ApiError {
    fn from(error: QueryError) -> Self {
        match error {
            QueryError::UnknownNode(_) => ApiError::BadRequest(UNKNOWN_NODE_MESSAGE.to_owned()),
            QueryError::UnknownAlgorithm(_) => {
                ApiError::BadRequest(UNKNOWN_ALGORITHM_MESSAGE.to_owned())
            }
            QueryError::NoPathFound { explored, .. } => ApiError::NotFound {
                message: NO_PATH_MESSAGE.to_owned(),
                explored,
            },
            QueryError::BrokenPathEdge(_) | QueryError::MissingCoordinate(_) => {
                error!("Graph data error: {}", error);
                ApiError::InternalServerError(error.to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!("Rejected search body: {}", rejection.body_text());
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InternalServerError(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": message })),
            )
                .into_response(),
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            ApiError::NotFound { message, explored } => (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "error": message,
                    "explored": explored,
                    "path_length": 0,
                    "path_cost": 0,
                })),
            )
                .into_response(),
        }
    }
}

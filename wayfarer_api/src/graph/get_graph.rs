use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
pub struct GraphNode {
    id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    y: Option<f64>,
}

#[derive(Serialize)]
pub struct GraphEdge {
    from: String,
    to: String,
    weight: f64,
}

#[derive(Serialize)]
pub struct GraphResponse {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
}

impl IntoResponse for GraphResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub async fn get_graph(State(state): State<Arc<AppState>>) -> GraphResponse {
    let graph = state.wayfarer.graph();

    let nodes = graph
        .nodes()
        .map(|node| {
            let coordinate = graph.coordinate(node).ok();
            GraphNode {
                id: graph.label(node).to_owned(),
                x: coordinate.map(|coordinate| coordinate.x()),
                y: coordinate.map(|coordinate| coordinate.y()),
            }
        })
        .collect();

    let edges = graph
        .edges()
        .map(|(from, to, weight)| GraphEdge {
            from: graph.label(from).to_owned(),
            to: graph.label(to).to_owned(),
            weight,
        })
        .collect();

    GraphResponse { nodes, edges }
}

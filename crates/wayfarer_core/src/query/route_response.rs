use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RouteResponse {
    pub path: Vec<String>,
    pub explored: Vec<String>,

    /// Number of edges in `path`
    pub path_length: usize,

    /// Sum of edge weights, rounded to two decimals
    pub path_cost: f64,

    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

pub(crate) fn round_cost(cost: f64) -> f64 {
    (cost * 100.0).round() / 100.0
}

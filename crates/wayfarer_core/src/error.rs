use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Edge {from} -> {to} has an invalid weight {weight}")]
    InvalidWeight { from: String, to: String, weight: f64 },
    #[error("Node {node} references undeclared neighbor {neighbor}")]
    DanglingNeighbor { node: String, neighbor: String },
    #[error("Edge {from} -> {to} has no reverse edge with the same weight")]
    AsymmetricEdge { from: String, to: String },
    #[error("Edge {from} -> {to} is declared more than once")]
    DuplicateEdge { from: String, to: String },
    #[error("Coordinate given for unknown node {0}")]
    UnknownCoordinateNode(String),
    #[error("Failed to read graph file")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse graph file: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("No coordinate for node {0}")]
    MissingCoordinate(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Edge {from} -> {to} not found in graph")]
pub struct BrokenPathEdge {
    pub from: String,
    pub to: String,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    #[error("Unknown node {0}")]
    UnknownNode(String),
    #[error("Unknown algorithm {0}")]
    UnknownAlgorithm(String),
    #[error("No path found from {start} to {goal}")]
    NoPathFound {
        start: String,
        goal: String,
        explored: Vec<String>,
    },
    #[error(transparent)]
    BrokenPathEdge(#[from] BrokenPathEdge),
    #[error("No coordinate for node {0}")]
    MissingCoordinate(String),
}

impl From<SearchError> for QueryError {
    fn from(error: SearchError) -> Self {
        match error {
            SearchError::MissingCoordinate(node) => QueryError::MissingCoordinate(node),
        }
    }
}

impl QueryError {
    /// Client input errors, as opposed to negative results or corrupt graph data.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            QueryError::UnknownNode(_) | QueryError::UnknownAlgorithm(_)
        )
    }
}

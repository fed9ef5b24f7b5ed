use crate::{
    error::SearchError,
    graph_store::{GraphStore, Weight},
    node_id::NodeId,
};

pub trait Heuristic {
    fn estimate(&self, graph: &GraphStore, from: NodeId, to: NodeId) -> Result<Weight, SearchError>;
}

/// Straight-line distance between the coordinates of two nodes.
pub struct EuclideanHeuristic;

impl Heuristic for EuclideanHeuristic {
    fn estimate(&self, graph: &GraphStore, from: NodeId, to: NodeId) -> Result<Weight, SearchError> {
        let from_coordinate = graph.coordinate(from)?;
        let to_coordinate = graph.coordinate(to)?;
        Ok(from_coordinate.euclidean_distance(&to_coordinate))
    }
}

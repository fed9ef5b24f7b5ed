use tracing::warn;

use crate::{
    error::BrokenPathEdge,
    graph_store::{GraphStore, Weight},
    node_id::NodeId,
};

/// Sums the edge weights along `path`, re-reading every weight from the graph.
///
/// Paths with fewer than two nodes cost nothing. A consecutive pair without an edge is an
/// error, never a sentinel cost.
pub fn path_cost(graph: &GraphStore, path: &[NodeId]) -> Result<Weight, BrokenPathEdge> {
    path.windows(2).try_fold(0.0, |cost, pair| {
        let (from, to) = (pair[0], pair[1]);

        match graph.edge_weight(from, to) {
            Some(weight) => Ok(cost + weight),
            None => {
                warn!(
                    "Edge {} -> {} not found in graph",
                    graph.label(from),
                    graph.label(to)
                );
                Err(BrokenPathEdge {
                    from: graph.label(from).to_owned(),
                    to: graph.label(to).to_owned(),
                })
            }
        }
    })
}

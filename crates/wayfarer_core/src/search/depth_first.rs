use fxhash::FxHashSet;
use tracing::debug;

use crate::{error::SearchError, graph_store::GraphStore, node_id::NodeId};

use super::search_algorithm::{
    BlockedSet, SearchAlgorithm, SearchResult, extend_path, unblocked_neighbors,
};

/// Depth-first search over whole partial paths.
///
/// Neighbors are pushed in reverse adjacency order so the first neighbor is popped first.
/// Visited checks and the goal check both happen on pop. The path found is not optimal in
/// any sense.
pub struct DepthFirstSearch;

impl SearchAlgorithm for DepthFirstSearch {
    fn search(
        &self,
        graph: &GraphStore,
        start: NodeId,
        goal: NodeId,
        blocked: &BlockedSet,
    ) -> Result<SearchResult, SearchError> {
        let mut stack: Vec<Vec<NodeId>> = vec![vec![start]];
        let mut visited: FxHashSet<NodeId> = FxHashSet::default();
        let mut explored: Vec<NodeId> = Vec::new();

        while let Some(path) = stack.pop() {
            let Some(&node) = path.last() else {
                continue;
            };

            if !visited.insert(node) {
                continue;
            }

            explored.push(node);

            if node == goal {
                debug!(explored = explored.len(), "DFS: reached goal");
                return Ok(SearchResult::found(path, explored));
            }

            for neighbor in unblocked_neighbors(graph, node, blocked).rev() {
                stack.push(extend_path(&path, neighbor));
            }
        }

        debug!(explored = explored.len(), "DFS: stack exhausted");
        Ok(SearchResult::not_found(explored))
    }
}

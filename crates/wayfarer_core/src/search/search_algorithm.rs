use fxhash::FxHashSet;

use crate::{error::SearchError, graph_store::GraphStore, node_id::NodeId};

/// Nodes that may not be chosen as a neighbor during one search.
pub type BlockedSet = FxHashSet<NodeId>;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// `None` when the frontier was exhausted without reaching the goal.
    pub path: Option<Vec<NodeId>>,

    /// Nodes in the order they were marked visited.
    pub explored: Vec<NodeId>,
}

impl SearchResult {
    pub fn found(path: Vec<NodeId>, explored: Vec<NodeId>) -> Self {
        SearchResult {
            path: Some(path),
            explored,
        }
    }

    pub fn not_found(explored: Vec<NodeId>) -> Self {
        SearchResult {
            path: None,
            explored,
        }
    }
}

pub trait SearchAlgorithm {
    fn search(
        &self,
        graph: &GraphStore,
        start: NodeId,
        goal: NodeId,
        blocked: &BlockedSet,
    ) -> Result<SearchResult, SearchError>;
}

/// Neighbors of `node` that are not blocked, in adjacency order.
pub(crate) fn unblocked_neighbors<'a>(
    graph: &'a GraphStore,
    node: NodeId,
    blocked: &'a BlockedSet,
) -> impl DoubleEndedIterator<Item = NodeId> + 'a {
    graph
        .neighbors(node)
        .iter()
        .map(|&(neighbor, _)| neighbor)
        .filter(move |neighbor| !blocked.contains(neighbor))
}

pub(crate) fn extend_path(path: &[NodeId], node: NodeId) -> Vec<NodeId> {
    let mut extended = Vec::with_capacity(path.len() + 1);
    extended.extend_from_slice(path);
    extended.push(node);
    extended
}

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use fxhash::FxHashSet;
use tracing::debug;

use crate::{
    error::SearchError,
    graph_store::{GraphStore, Weight},
    heuristic::{EuclideanHeuristic, Heuristic},
    node_id::NodeId,
};

use super::search_algorithm::{
    BlockedSet, SearchAlgorithm, SearchResult, extend_path, unblocked_neighbors,
};

// https://en.wikipedia.org/wiki/Best-first_search#Greedy_BFS

#[derive(Debug)]
struct HeapItem {
    /// Heuristic estimate from the last node of `path` to the goal
    priority: Weight,

    /// Insertion order, breaks ties between equal priorities (first pushed, first popped)
    sequence: usize,

    path: Vec<NodeId>,
}

impl PartialEq for HeapItem {
    fn eq(&self, other: &HeapItem) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapItem {}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &HeapItem) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flip priority and sequence to make this a min-heap
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Greedy best-first search ordered purely by the heuristic distance to the goal.
///
/// The goal check happens as soon as an entry is popped, before the visited check, so the
/// goal never appears in the explored order and the first popped goal entry wins. Neither
/// the cheapest nor the shortest path is guaranteed.
pub struct GreedyBestFirstSearch<H: Heuristic> {
    heuristic: H,
}

impl GreedyBestFirstSearch<EuclideanHeuristic> {
    pub fn new() -> Self {
        GreedyBestFirstSearch::with_heuristic(EuclideanHeuristic)
    }
}

impl Default for GreedyBestFirstSearch<EuclideanHeuristic> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Heuristic> GreedyBestFirstSearch<H> {
    pub fn with_heuristic(heuristic: H) -> Self {
        GreedyBestFirstSearch { heuristic }
    }
}

impl<H: Heuristic> SearchAlgorithm for GreedyBestFirstSearch<H> {
    fn search(
        &self,
        graph: &GraphStore,
        start: NodeId,
        goal: NodeId,
        blocked: &BlockedSet,
    ) -> Result<SearchResult, SearchError> {
        let mut heap: BinaryHeap<HeapItem> = BinaryHeap::new();
        let mut visited: FxHashSet<NodeId> = FxHashSet::default();
        let mut explored: Vec<NodeId> = Vec::new();
        let mut sequence = 0;

        heap.push(HeapItem {
            priority: self.heuristic.estimate(graph, start, goal)?,
            sequence,
            path: vec![start],
        });

        while let Some(HeapItem { path, .. }) = heap.pop() {
            let Some(&node) = path.last() else {
                continue;
            };

            if node == goal {
                debug!(explored = explored.len(), "Greedy: reached goal");
                return Ok(SearchResult::found(path, explored));
            }

            if !visited.insert(node) {
                continue;
            }

            explored.push(node);

            for neighbor in unblocked_neighbors(graph, node, blocked) {
                sequence += 1;
                heap.push(HeapItem {
                    priority: self.heuristic.estimate(graph, neighbor, goal)?,
                    sequence,
                    path: extend_path(&path, neighbor),
                });
            }
        }

        debug!(explored = explored.len(), "Greedy: heap exhausted");
        Ok(SearchResult::not_found(explored))
    }
}

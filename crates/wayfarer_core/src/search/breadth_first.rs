use std::collections::VecDeque;

use fxhash::FxHashSet;
use tracing::debug;

use crate::{error::SearchError, graph_store::GraphStore, node_id::NodeId};

use super::search_algorithm::{
    BlockedSet, SearchAlgorithm, SearchResult, extend_path, unblocked_neighbors,
};

/// Breadth-first search over whole partial paths.
///
/// Paths are enqueued even when their last node was already visited; they are discarded when
/// dequeued. The goal is only recognised on dequeue, so the returned path has the minimal
/// number of edges, regardless of weights.
pub struct BreadthFirstSearch;

impl SearchAlgorithm for BreadthFirstSearch {
    fn search(
        &self,
        graph: &GraphStore,
        start: NodeId,
        goal: NodeId,
        blocked: &BlockedSet,
    ) -> Result<SearchResult, SearchError> {
        let mut queue: VecDeque<Vec<NodeId>> = VecDeque::from([vec![start]]);
        let mut visited: FxHashSet<NodeId> = FxHashSet::default();
        let mut explored: Vec<NodeId> = Vec::new();

        while let Some(path) = queue.pop_front() {
            let Some(&node) = path.last() else {
                continue;
            };

            if !visited.insert(node) {
                continue;
            }

            explored.push(node);

            if node == goal {
                debug!(explored = explored.len(), "BFS: reached goal");
                return Ok(SearchResult::found(path, explored));
            }

            for neighbor in unblocked_neighbors(graph, node, blocked) {
                queue.push_back(extend_path(&path, neighbor));
            }
        }

        debug!(explored = explored.len(), "BFS: queue exhausted");
        Ok(SearchResult::not_found(explored))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        addis_ababa::{
            BOLE, CMC, FOUR_KILO, GOTERA, KALITY, MEGENAGNA, MESKEL_SQUARE, MEXICO, PIAZZA,
            SARBET, create_addis_ababa_graph,
        },
        path_cost::path_cost,
        test_graph_utils::{
            RomaniaCity, blocked, create_chains, create_romania_graph, node, nodes,
        },
    };

    #[test]
    fn test_minimum_hop_route() {
        let graph = create_addis_ababa_graph().unwrap();

        let result = BreadthFirstSearch
            .search(
                &graph,
                node(&graph, MESKEL_SQUARE),
                node(&graph, PIAZZA),
                &BlockedSet::default(),
            )
            .unwrap();

        let path = result.path.unwrap();
        assert_eq!(path, nodes(&graph, &[MESKEL_SQUARE, FOUR_KILO, PIAZZA]));
        assert_eq!(path_cost(&graph, &path), Ok(7.0));
        assert_eq!(
            result.explored,
            nodes(
                &graph,
                &[MESKEL_SQUARE, BOLE, MEGENAGNA, FOUR_KILO, MEXICO, GOTERA, CMC, PIAZZA]
            )
        );
    }

    #[test]
    fn test_blocked_node_forces_detour() {
        let graph = create_addis_ababa_graph().unwrap();

        let result = BreadthFirstSearch
            .search(
                &graph,
                node(&graph, MESKEL_SQUARE),
                node(&graph, PIAZZA),
                &blocked(&graph, &[FOUR_KILO]),
            )
            .unwrap();

        let path = result.path.unwrap();
        assert_eq!(path, nodes(&graph, &[MESKEL_SQUARE, MEXICO, PIAZZA]));
        assert!(!result.explored.contains(&node(&graph, FOUR_KILO)));
    }

    #[test]
    fn test_goal_is_checked_on_dequeue() {
        let graph = create_addis_ababa_graph().unwrap();

        let result = BreadthFirstSearch
            .search(
                &graph,
                node(&graph, KALITY),
                node(&graph, CMC),
                &BlockedSet::default(),
            )
            .unwrap();

        assert_eq!(
            result.path.unwrap(),
            nodes(&graph, &[KALITY, GOTERA, BOLE, CMC])
        );
        // Bole enqueues CMC, but every path queued before it is dequeued first.
        assert_eq!(
            result.explored,
            nodes(
                &graph,
                &[
                    KALITY,
                    GOTERA,
                    MESKEL_SQUARE,
                    BOLE,
                    SARBET,
                    MEGENAGNA,
                    FOUR_KILO,
                    MEXICO,
                    CMC
                ]
            )
        );
    }

    #[test]
    fn test_no_path_when_start_is_walled_in() {
        let graph = create_addis_ababa_graph().unwrap();

        let result = BreadthFirstSearch
            .search(
                &graph,
                node(&graph, KALITY),
                node(&graph, PIAZZA),
                &blocked(&graph, &[GOTERA]),
            )
            .unwrap();

        assert_eq!(result.path, None);
        assert_eq!(result.explored, nodes(&graph, &[KALITY]));
    }

    #[test]
    fn test_blocked_start_is_still_expanded() {
        let graph = create_addis_ababa_graph().unwrap();

        let result = BreadthFirstSearch
            .search(
                &graph,
                node(&graph, KALITY),
                node(&graph, GOTERA),
                &blocked(&graph, &[KALITY]),
            )
            .unwrap();

        assert_eq!(result.path.unwrap(), nodes(&graph, &[KALITY, GOTERA]));
    }

    #[test]
    fn test_hop_count_over_weight() {
        let graph = create_romania_graph();

        let result = BreadthFirstSearch
            .search(
                &graph,
                RomaniaCity::Arad.node(&graph),
                RomaniaCity::Bucharest.node(&graph),
                &BlockedSet::default(),
            )
            .unwrap();

        let path = result.path.unwrap();
        assert_eq!(
            path,
            RomaniaCity::nodes(
                &graph,
                &[
                    RomaniaCity::Arad,
                    RomaniaCity::Sibiu,
                    RomaniaCity::Fagaras,
                    RomaniaCity::Bucharest
                ]
            )
        );
        // The 418 km route through Pitesti has one more edge.
        assert_eq!(path_cost(&graph, &path), Ok(450.0));
    }

    #[test]
    fn test_disconnected_goal() {
        let graph = create_chains(&[&["A", "B"], &["C"]]);

        let result = BreadthFirstSearch
            .search(
                &graph,
                node(&graph, "A"),
                node(&graph, "C"),
                &BlockedSet::default(),
            )
            .unwrap();

        assert_eq!(result.path, None);
        assert_eq!(result.explored, nodes(&graph, &["A", "B"]));
    }
}

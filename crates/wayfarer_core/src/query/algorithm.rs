use std::{fmt, str::FromStr};

use crate::{
    error::{QueryError, SearchError},
    graph_store::GraphStore,
    node_id::NodeId,
    search::{
        breadth_first::BreadthFirstSearch,
        depth_first::DepthFirstSearch,
        greedy_best_first::GreedyBestFirstSearch,
        search_algorithm::{BlockedSet, SearchAlgorithm, SearchResult},
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    BreadthFirst,
    DepthFirst,
    Greedy,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::BreadthFirst,
        Algorithm::DepthFirst,
        Algorithm::Greedy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::BreadthFirst => "BFS",
            Algorithm::DepthFirst => "DFS",
            Algorithm::Greedy => "Greedy",
        }
    }

    pub fn search(
        &self,
        graph: &GraphStore,
        start: NodeId,
        goal: NodeId,
        blocked: &BlockedSet,
    ) -> Result<SearchResult, SearchError> {
        match self {
            Algorithm::BreadthFirst => BreadthFirstSearch.search(graph, start, goal, blocked),
            Algorithm::DepthFirst => DepthFirstSearch.search(graph, start, goal, blocked),
            Algorithm::Greedy => GreedyBestFirstSearch::new().search(graph, start, goal, blocked),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = QueryError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.as_str() == name)
            .ok_or_else(|| QueryError::UnknownAlgorithm(name.to_owned()))
    }
}

use std::{path::Path, time::Instant};

use tracing::{debug, instrument};

use crate::addis_ababa::create_addis_ababa_graph;
use crate::error::{GraphError, QueryError};
use crate::graph_store::GraphStore;
use crate::node_id::NodeId;
use crate::path_cost::path_cost;
use crate::query::algorithm::Algorithm;
use crate::query::route_request::RouteRequest;
use crate::query::route_response::{RouteResponse, round_cost};
use crate::search::search_algorithm::BlockedSet;

pub const SAME_START_AND_GOAL_MESSAGE: &str =
    "Initial state and goal state are the same. Zero distance.";
pub const PATH_FOUND_MESSAGE: &str = "Path found successfully.";

/// Answers route queries over one immutable graph.
///
/// Holds no per-query state, so a single instance can serve concurrent callers behind a
/// shared reference.
pub struct Wayfarer {
    graph: GraphStore,
}

impl Wayfarer {
    pub fn new(graph: GraphStore) -> Wayfarer {
        Wayfarer { graph }
    }

    pub fn addis_ababa() -> Result<Wayfarer, GraphError> {
        Ok(Wayfarer::new(create_addis_ababa_graph()?))
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Wayfarer, GraphError> {
        Ok(Wayfarer::new(GraphStore::from_json_file(path)?))
    }

    pub fn graph(&self) -> &GraphStore {
        &self.graph
    }

    #[instrument(skip_all, level = "debug", fields(start = %request.start, goal = %request.goal))]
    pub fn route(&self, request: &RouteRequest) -> Result<RouteResponse, QueryError> {
        let start = self.resolve(&request.start)?;
        let goal = self.resolve(&request.goal)?;

        if start == goal {
            return Ok(RouteResponse {
                path: vec![request.start.clone()],
                explored: vec![request.start.clone()],
                path_length: 0,
                path_cost: 0.0,
                message: String::from(SAME_START_AND_GOAL_MESSAGE),
                note: None,
            });
        }

        let algorithm: Algorithm = request.algorithm.parse()?;

        // Unknown blocked labels can never be chosen as a neighbor, drop them.
        let blocked: BlockedSet = request
            .blocked
            .iter()
            .filter_map(|label| self.graph.node_id(label))
            .collect();

        debug!(%algorithm, blocked = blocked.len(), "route: dispatching search");

        let started = Instant::now();
        let result = algorithm.search(&self.graph, start, goal, &blocked)?;
        debug!(
            %algorithm,
            explored = result.explored.len(),
            found = result.path.is_some(),
            elapsed = ?started.elapsed(),
            "route: search finished"
        );

        let explored = self.graph.labels(&result.explored);

        let Some(path) = result.path else {
            return Err(QueryError::NoPathFound {
                start: request.start.clone(),
                goal: request.goal.clone(),
                explored,
            });
        };

        let cost = path_cost(&self.graph, &path)?;

        Ok(RouteResponse {
            path_length: path.len() - 1,
            path: self.graph.labels(&path),
            path_cost: round_cost(cost),
            message: String::from(PATH_FOUND_MESSAGE),
            note: Some(format!("{} explored {} nodes.", algorithm, explored.len())),
            explored,
        })
    }

    fn resolve(&self, label: &str) -> Result<NodeId, QueryError> {
        self.graph
            .node_id(label)
            .ok_or_else(|| QueryError::UnknownNode(label.to_owned()))
    }
}

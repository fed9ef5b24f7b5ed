use fxhash::FxHashMap;

use crate::{coordinate::Coordinate, error::SearchError, node_id::NodeId};

pub type Weight = f64;

/// Immutable weighted undirected graph with optional node coordinates.
///
/// Adjacency lists keep the order in which edges were declared; every search iterates
/// neighbors in that order. Instances are only created through `GraphBuilder`, which checks
/// that every neighbor is a declared node and that every edge is stored in both directions
/// with the same weight.
pub struct GraphStore {
    labels: Vec<String>,
    index: FxHashMap<String, NodeId>,
    adjacency: Vec<Vec<(NodeId, Weight)>>,
    coordinates: Vec<Option<Coordinate>>,
}

impl GraphStore {
    pub(crate) fn new(
        labels: Vec<String>,
        index: FxHashMap<String, NodeId>,
        adjacency: Vec<Vec<(NodeId, Weight)>>,
        coordinates: Vec<Option<Coordinate>>,
    ) -> Self {
        GraphStore {
            labels,
            index,
            adjacency,
            coordinates,
        }
    }

    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    pub fn node_id(&self, label: &str) -> Option<NodeId> {
        self.index.get(label).copied()
    }

    pub fn label(&self, node: NodeId) -> &str {
        &self.labels[node.get()]
    }

    pub fn labels(&self, nodes: &[NodeId]) -> Vec<String> {
        nodes
            .iter()
            .map(|&node| self.label(node).to_owned())
            .collect()
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.labels.len()).map(NodeId::new)
    }

    /// Neighbors of `node` in declaration order. Unknown nodes have no neighbors.
    pub fn neighbors(&self, node: NodeId) -> &[(NodeId, Weight)] {
        self.adjacency
            .get(node.get())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn edge_weight(&self, from: NodeId, to: NodeId) -> Option<Weight> {
        self.neighbors(from)
            .iter()
            .find(|(neighbor, _)| *neighbor == to)
            .map(|&(_, weight)| weight)
    }

    /// Every undirected edge once, as `(from, to, weight)` with `from <= to`.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, Weight)> + '_ {
        self.nodes().flat_map(move |from| {
            self.neighbors(from)
                .iter()
                .filter(move |(to, _)| from <= *to)
                .map(move |&(to, weight)| (from, to, weight))
        })
    }

    pub fn coordinate(&self, node: NodeId) -> Result<Coordinate, SearchError> {
        self.coordinates
            .get(node.get())
            .copied()
            .flatten()
            .ok_or_else(|| {
                SearchError::MissingCoordinate(
                    self.labels
                        .get(node.get())
                        .cloned()
                        .unwrap_or_else(|| node.to_string()),
                )
            })
    }

    pub fn has_coordinates(&self) -> bool {
        self.coordinates.iter().all(Option::is_some)
    }
}

use fxhash::FxHashMap;
use tracing::debug;

use crate::{
    coordinate::Coordinate,
    error::GraphError,
    graph_store::{GraphStore, Weight},
    node_id::NodeId,
};

/// Collects nodes, directed adjacency entries and coordinates, then validates them into a
/// `GraphStore`.
///
/// Neighbors added with `add_neighbor` are resolved lazily so that a loader can list
/// adjacency before every node is declared; unresolved neighbors fail the build.
#[derive(Default)]
pub struct GraphBuilder {
    labels: Vec<String>,
    index: FxHashMap<String, NodeId>,
    adjacency: Vec<Vec<(String, Weight)>>,
    coordinates: Vec<(String, Coordinate)>,
}

impl GraphBuilder {
    pub fn add_node(&mut self, label: &str) -> NodeId {
        if let Some(&node) = self.index.get(label) {
            return node;
        }

        let node = NodeId::new(self.labels.len());
        self.labels.push(label.to_owned());
        self.index.insert(label.to_owned(), node);
        self.adjacency.push(Vec::new());
        node
    }

    /// Adds the directed entry `from -> to`. `to` must be declared before `build`.
    pub fn add_neighbor(&mut self, from: &str, to: &str, weight: Weight) -> &mut Self {
        let node = self.add_node(from);
        self.adjacency[node.get()].push((to.to_owned(), weight));
        self
    }

    /// Adds an undirected edge, declaring both ends.
    pub fn add_edge(&mut self, a: &str, b: &str, weight: Weight) -> &mut Self {
        self.add_node(a);
        self.add_node(b);
        self.add_neighbor(a, b, weight);
        if a != b {
            self.add_neighbor(b, a, weight);
        }
        self
    }

    pub fn add_coordinate(&mut self, label: &str, x: f64, y: f64) -> &mut Self {
        self.coordinates
            .push((label.to_owned(), Coordinate::new(x, y)));
        self
    }

    pub fn build(self) -> Result<GraphStore, GraphError> {
        let adjacency = self.resolve_adjacency()?;
        self.check_symmetry(&adjacency)?;

        let mut coordinates = vec![None; self.labels.len()];
        for (label, coordinate) in &self.coordinates {
            let node = self
                .index
                .get(label)
                .ok_or_else(|| GraphError::UnknownCoordinateNode(label.clone()))?;
            coordinates[node.get()] = Some(*coordinate);
        }

        debug!(
            nodes = self.labels.len(),
            coordinates = self.coordinates.len(),
            "GraphBuilder: graph validated"
        );

        Ok(GraphStore::new(
            self.labels,
            self.index,
            adjacency,
            coordinates,
        ))
    }

    fn resolve_adjacency(&self) -> Result<Vec<Vec<(NodeId, Weight)>>, GraphError> {
        let mut resolved = Vec::with_capacity(self.adjacency.len());

        for (from, entries) in self.adjacency.iter().enumerate() {
            let from_label = &self.labels[from];
            let mut neighbors: Vec<(NodeId, Weight)> = Vec::with_capacity(entries.len());

            for (to_label, weight) in entries {
                if !weight.is_finite() || *weight < 0.0 {
                    return Err(GraphError::InvalidWeight {
                        from: from_label.clone(),
                        to: to_label.clone(),
                        weight: *weight,
                    });
                }

                let to = *self
                    .index
                    .get(to_label)
                    .ok_or_else(|| GraphError::DanglingNeighbor {
                        node: from_label.clone(),
                        neighbor: to_label.clone(),
                    })?;

                if neighbors.iter().any(|(neighbor, _)| *neighbor == to) {
                    return Err(GraphError::DuplicateEdge {
                        from: from_label.clone(),
                        to: to_label.clone(),
                    });
                }

                neighbors.push((to, *weight));
            }

            resolved.push(neighbors);
        }

        Ok(resolved)
    }

    fn check_symmetry(&self, adjacency: &[Vec<(NodeId, Weight)>]) -> Result<(), GraphError> {
        for (from, neighbors) in adjacency.iter().enumerate() {
            for &(to, weight) in neighbors {
                let reverse = adjacency[to.get()]
                    .iter()
                    .find(|(neighbor, _)| neighbor.get() == from);

                if reverse.is_none_or(|&(_, reverse_weight)| reverse_weight != weight) {
                    return Err(GraphError::AsymmetricEdge {
                        from: self.labels[from].clone(),
                        to: self.labels[to.get()].clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

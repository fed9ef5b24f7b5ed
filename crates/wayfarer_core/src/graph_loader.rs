use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use fxhash::FxBuildHasher;
use indexmap::IndexMap;
use serde::Deserialize;
use tracing::info;

use crate::{error::GraphError, graph_builder::GraphBuilder, graph_store::GraphStore};

// Adjacency order decides the exploration order of every search, so JSON objects are read
// into insertion-ordered maps.
type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// `{ "graph": { node: { neighbor: weight } }, "coordinates": { node: [x, y] } }`
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct JsonGraph {
    graph: FxIndexMap<String, FxIndexMap<String, f64>>,
    #[serde(default)]
    coordinates: FxIndexMap<String, [f64; 2]>,
}

impl JsonGraph {
    fn into_builder(self) -> GraphBuilder {
        let mut builder = GraphBuilder::default();

        // Declare every node first so ids follow the order of the "graph" object.
        for node in self.graph.keys() {
            builder.add_node(node);
        }

        for (node, neighbors) in &self.graph {
            for (neighbor, weight) in neighbors {
                builder.add_neighbor(node, neighbor, *weight);
            }
        }

        for (node, [x, y]) in &self.coordinates {
            builder.add_coordinate(node, *x, *y);
        }

        builder
    }
}

impl GraphStore {
    pub fn from_json_str(json: &str) -> Result<GraphStore, GraphError> {
        let graph: JsonGraph = serde_json::from_str(json)?;
        graph.into_builder().build()
    }

    pub fn from_reader(reader: impl Read) -> Result<GraphStore, GraphError> {
        let graph: JsonGraph = serde_json::from_reader(reader)?;
        graph.into_builder().build()
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<GraphStore, GraphError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let graph = GraphStore::from_reader(BufReader::new(file))?;

        info!(
            "Loaded graph {:?} with {} nodes and {} edges",
            path,
            graph.node_count(),
            graph.edge_count()
        );

        Ok(graph)
    }
}

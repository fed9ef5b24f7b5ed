use tracing::{info, warn};

use crate::graph_source::GraphArgs;

pub fn run(args: GraphArgs) -> Result<(), anyhow::Error> {
    let wayfarer = args.load()?;
    let graph = wayfarer.graph();

    if !graph.has_coordinates() {
        warn!("Some nodes have no coordinates, Greedy search cannot reach them");
    }

    info!(
        "Graph is valid: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    Ok(())
}

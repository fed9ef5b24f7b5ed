use comfy_table::Table;

use crate::graph_source::GraphArgs;

pub fn run(args: GraphArgs) -> Result<(), anyhow::Error> {
    let wayfarer = args.load()?;
    let graph = wayfarer.graph();

    let mut table = Table::new();
    table.set_header(vec!["Node", "x", "y", "Neighbors"]);

    for node in graph.nodes() {
        let (x, y) = match graph.coordinate(node) {
            Ok(coordinate) => (coordinate.x().to_string(), coordinate.y().to_string()),
            Err(_) => (String::from("-"), String::from("-")),
        };

        let neighbors = graph
            .neighbors(node)
            .iter()
            .map(|&(neighbor, weight)| format!("{} ({})", graph.label(neighbor), weight))
            .collect::<Vec<_>>()
            .join(", ");

        table.add_row(vec![graph.label(node).to_owned(), x, y, neighbors]);
    }

    println!("{table}");

    Ok(())
}

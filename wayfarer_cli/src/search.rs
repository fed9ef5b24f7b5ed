use clap::Args;
use comfy_table::Table;
use tracing::info;
use wayfarer_core::{
    error::QueryError,
    query::{route_request::RouteRequest, route_response::RouteResponse},
};

use crate::graph_source::GraphArgs;

#[derive(Args)]
pub struct SearchArgs {
    #[arg(short, long)]
    pub start: String,

    #[arg(short = 'e', long)]
    pub goal: String,

    /// BFS, DFS or Greedy
    #[arg(short, long, default_value = "BFS")]
    pub algorithm: String,

    /// Node to exclude from the search, repeatable
    #[arg(short, long)]
    pub blocked: Vec<String>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub graph: GraphArgs,
}

pub fn run(args: SearchArgs) -> Result<(), anyhow::Error> {
    let wayfarer = args.graph.load()?;

    let request = RouteRequest::new(&args.start, &args.goal, &args.algorithm)
        .with_blocked(args.blocked.iter().cloned());

    let response = match wayfarer.route(&request) {
        Ok(response) => response,
        Err(QueryError::NoPathFound { explored, .. }) => {
            info!("Explored: {}", explored.join(" -> "));
            anyhow::bail!("No path found. The destination is unreachable or blocked.");
        }
        Err(error) => return Err(error.into()),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("{}", response_table(&response));
    }

    Ok(())
}

fn response_table(response: &RouteResponse) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Field", "Value"]);
    table.add_row(vec![String::from("Path"), response.path.join(" -> ")]);
    table.add_row(vec![
        String::from("Explored"),
        response.explored.join(" -> "),
    ]);
    table.add_row(vec![
        String::from("Length"),
        response.path_length.to_string(),
    ]);
    table.add_row(vec![String::from("Cost"), response.path_cost.to_string()]);
    table.add_row(vec![String::from("Message"), response.message.clone()]);

    if let Some(note) = &response.note {
        table.add_row(vec![String::from("Note"), note.clone()]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_table() {
        let response = RouteResponse {
            path: vec![String::from("Meskel Square"), String::from("Mexico")],
            explored: vec![String::from("Meskel Square"), String::from("Mexico")],
            path_length: 1,
            path_cost: 3.0,
            message: String::from("Path found successfully."),
            note: Some(String::from("BFS explored 2 nodes.")),
        };

        let rendered = response_table(&response).to_string();
        assert!(rendered.contains("Meskel Square -> Mexico"));
        assert!(rendered.contains("BFS explored 2 nodes."));
    }
}

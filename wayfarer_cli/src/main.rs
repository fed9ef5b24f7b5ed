use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use crate::{graph_source::GraphArgs, search::SearchArgs};

mod graph_source;
mod nodes;
mod search;
mod validate;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a route between two nodes
    #[command(visible_alias = "s")]
    Search {
        #[command(flatten)]
        args: SearchArgs,
    },
    /// List the nodes of the graph with their coordinates
    Nodes {
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Load a graph file and report whether it is valid
    Validate {
        #[command(flatten)]
        graph: GraphArgs,
    },
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Commands::Search { args } => search::run(args)?,
        Commands::Nodes { graph } => nodes::run(graph)?,
        Commands::Validate { graph } => validate::run(graph)?,
    }

    Ok(())
}

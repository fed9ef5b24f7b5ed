use std::path::PathBuf;

use clap::Args;
use tracing::info;
use wayfarer_core::wayfarer::Wayfarer;

#[derive(Args)]
pub struct GraphArgs {
    /// JSON graph file, defaults to the built-in Addis Ababa graph
    #[arg(short, long)]
    pub graph: Option<PathBuf>,
}

impl GraphArgs {
    pub fn load(&self) -> Result<Wayfarer, anyhow::Error> {
        let wayfarer = match &self.graph {
            Some(path) => Wayfarer::from_json_file(path)?,
            None => {
                info!("Using the built-in Addis Ababa graph");
                Wayfarer::addis_ababa()?
            }
        };

        Ok(wayfarer)
    }
}

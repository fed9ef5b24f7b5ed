pub mod addis_ababa;
pub mod coordinate;
pub mod error;
pub mod graph_builder;
pub mod graph_loader;
pub mod graph_store;
pub mod heuristic;
pub mod node_id;
pub mod path_cost;
pub mod query;
pub mod search;
mod utils;
pub mod wayfarer;

#[cfg(test)]
pub(crate) mod test_graph_utils;

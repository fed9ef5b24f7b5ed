pub mod get_graph;

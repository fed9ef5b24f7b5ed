use crate::{
    graph_builder::GraphBuilder,
    graph_store::{GraphStore, Weight},
    node_id::NodeId,
    search::search_algorithm::BlockedSet,
};

#[derive(Clone, Copy, Debug)]
pub enum RomaniaCity {
    Arad,
    Bucharest,
    Craiova,
    Dobreta,
    Eforie,
    Fagaras,
    Giurgiu,
    Hirsova,
    Iasi,
    Lugoj,
    Mehadia,
    Neamt,
    Oradea,
    Pitesti,
    RimnicuVilcea,
    Sibiu,
    Timisoara,
    Urziceni,
    Vaslui,
    Zerind,
}

impl RomaniaCity {
    pub fn name(self) -> &'static str {
        match self {
            RomaniaCity::Arad => "Arad",
            RomaniaCity::Bucharest => "Bucharest",
            RomaniaCity::Craiova => "Craiova",
            RomaniaCity::Dobreta => "Dobreta",
            RomaniaCity::Eforie => "Eforie",
            RomaniaCity::Fagaras => "Fagaras",
            RomaniaCity::Giurgiu => "Giurgiu",
            RomaniaCity::Hirsova => "Hirsova",
            RomaniaCity::Iasi => "Iasi",
            RomaniaCity::Lugoj => "Lugoj",
            RomaniaCity::Mehadia => "Mehadia",
            RomaniaCity::Neamt => "Neamt",
            RomaniaCity::Oradea => "Oradea",
            RomaniaCity::Pitesti => "Pitesti",
            RomaniaCity::RimnicuVilcea => "Rimnicu Vilcea",
            RomaniaCity::Sibiu => "Sibiu",
            RomaniaCity::Timisoara => "Timisoara",
            RomaniaCity::Urziceni => "Urziceni",
            RomaniaCity::Vaslui => "Vaslui",
            RomaniaCity::Zerind => "Zerind",
        }
    }

    pub fn node(self, graph: &GraphStore) -> NodeId {
        node(graph, self.name())
    }

    pub fn nodes(graph: &GraphStore, cities: &[RomaniaCity]) -> Vec<NodeId> {
        cities.iter().map(|city| city.node(graph)).collect()
    }
}

// https://user-images.githubusercontent.com/43790152/97784960-1a142580-1bc4-11eb-9070-39c03eb16df2.png
fn get_romania_graph_edges() -> Vec<(RomaniaCity, RomaniaCity, Weight)> {
    use RomaniaCity::*;

    vec![
        (Oradea, Zerind, 71.0),
        (Oradea, Sibiu, 151.0),
        (Zerind, Arad, 75.0),
        (Arad, Sibiu, 140.0),
        (Arad, Timisoara, 118.0),
        (Timisoara, Lugoj, 111.0),
        (Lugoj, Mehadia, 70.0),
        (Mehadia, Dobreta, 75.0),
        (Dobreta, Craiova, 120.0),
        (Craiova, RimnicuVilcea, 146.0),
        (Craiova, Pitesti, 138.0),
        (RimnicuVilcea, Pitesti, 97.0),
        (RimnicuVilcea, Sibiu, 80.0),
        (Sibiu, Fagaras, 99.0),
        (Fagaras, Bucharest, 211.0),
        (Pitesti, Bucharest, 101.0),
        (Bucharest, Giurgiu, 90.0),
        (Bucharest, Urziceni, 85.0),
        (Urziceni, Hirsova, 98.0),
        (Hirsova, Eforie, 86.0),
        (Urziceni, Vaslui, 142.0),
        (Vaslui, Iasi, 92.0),
        (Iasi, Neamt, 87.0),
    ]
}

// Map positions from the classic AIMA figure.
fn get_romania_coordinates() -> Vec<(RomaniaCity, f64, f64)> {
    use RomaniaCity::*;

    vec![
        (Arad, 91.0, 492.0),
        (Bucharest, 400.0, 327.0),
        (Craiova, 253.0, 288.0),
        (Dobreta, 165.0, 299.0),
        (Eforie, 562.0, 293.0),
        (Fagaras, 305.0, 449.0),
        (Giurgiu, 375.0, 270.0),
        (Hirsova, 534.0, 350.0),
        (Iasi, 473.0, 506.0),
        (Lugoj, 165.0, 379.0),
        (Mehadia, 168.0, 339.0),
        (Neamt, 406.0, 537.0),
        (Oradea, 131.0, 571.0),
        (Pitesti, 320.0, 368.0),
        (RimnicuVilcea, 233.0, 410.0),
        (Sibiu, 207.0, 457.0),
        (Timisoara, 94.0, 410.0),
        (Urziceni, 456.0, 350.0),
        (Vaslui, 509.0, 444.0),
        (Zerind, 108.0, 531.0),
    ]
}

pub fn create_romania_graph() -> GraphStore {
    let mut builder = GraphBuilder::default();

    for (start, end, distance) in get_romania_graph_edges() {
        builder.add_edge(start.name(), end.name(), distance);
    }

    for (city, x, y) in get_romania_coordinates() {
        builder.add_coordinate(city.name(), x, y);
    }

    builder.build().unwrap()
}

/// Disconnected chains of unit-weight edges, each chain laid out on its own row.
pub fn create_chains(chains: &[&[&str]]) -> GraphStore {
    let mut builder = GraphBuilder::default();

    for (row, chain) in chains.iter().enumerate() {
        for (column, label) in chain.iter().enumerate() {
            builder.add_node(label);
            builder.add_coordinate(label, column as f64, row as f64 * 10.0);
        }

        for pair in chain.windows(2) {
            builder.add_edge(pair[0], pair[1], 1.0);
        }
    }

    builder.build().unwrap()
}

pub fn node(graph: &GraphStore, label: &str) -> NodeId {
    graph
        .node_id(label)
        .unwrap_or_else(|| panic!("{label} is not a node of the test graph"))
}

pub fn nodes(graph: &GraphStore, labels: &[&str]) -> Vec<NodeId> {
    labels.iter().map(|label| node(graph, label)).collect()
}

pub fn blocked(graph: &GraphStore, labels: &[&str]) -> BlockedSet {
    labels.iter().map(|label| node(graph, label)).collect()
}

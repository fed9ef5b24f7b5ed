//! Simplified road network of Addis Ababa. Weights are relative distance units.

use crate::{error::GraphError, graph_builder::GraphBuilder, graph_store::GraphStore};

pub const MESKEL_SQUARE: &str = "Meskel Square";
pub const BOLE: &str = "Bole";
pub const MEGENAGNA: &str = "Megenagna";
pub const FOUR_KILO: &str = "4 Kilo";
pub const SIX_KILO: &str = "6 Kilo";
pub const PIAZZA: &str = "Piazza";
pub const MERKATO: &str = "Merkato";
pub const MEXICO: &str = "Mexico";
pub const SARBET: &str = "Sarbet";
pub const GOTERA: &str = "Gotera";
pub const CMC: &str = "CMC";
pub const KALITY: &str = "Kality";
pub const MEKANISA: &str = "Mekanisa";

const ADJACENCY: [(&str, &[(&str, f64)]); 13] = [
    (
        MESKEL_SQUARE,
        &[
            (BOLE, 5.0),
            (MEGENAGNA, 6.0),
            (FOUR_KILO, 4.0),
            (MEXICO, 3.0),
            (GOTERA, 5.0),
        ],
    ),
    (
        BOLE,
        &[
            (MESKEL_SQUARE, 5.0),
            (MEGENAGNA, 4.0),
            (GOTERA, 6.0),
            (CMC, 7.0),
        ],
    ),
    (
        MEGENAGNA,
        &[
            (BOLE, 4.0),
            (MESKEL_SQUARE, 6.0),
            (FOUR_KILO, 5.0),
            (CMC, 5.0),
        ],
    ),
    (
        FOUR_KILO,
        &[
            (MESKEL_SQUARE, 4.0),
            (MEGENAGNA, 5.0),
            (PIAZZA, 3.0),
            (SIX_KILO, 2.0),
        ],
    ),
    (SIX_KILO, &[(FOUR_KILO, 2.0), (PIAZZA, 3.0)]),
    (
        PIAZZA,
        &[
            (FOUR_KILO, 3.0),
            (SIX_KILO, 3.0),
            (MEXICO, 4.0),
            (MERKATO, 2.0),
        ],
    ),
    (MERKATO, &[(PIAZZA, 2.0), (MEXICO, 3.0)]),
    (
        MEXICO,
        &[
            (MESKEL_SQUARE, 3.0),
            (PIAZZA, 4.0),
            (MERKATO, 3.0),
            (SARBET, 4.0),
        ],
    ),
    (SARBET, &[(MEXICO, 4.0), (GOTERA, 5.0), (MEKANISA, 4.0)]),
    (
        GOTERA,
        &[
            (MESKEL_SQUARE, 5.0),
            (BOLE, 6.0),
            (SARBET, 5.0),
            (KALITY, 6.0),
        ],
    ),
    (CMC, &[(BOLE, 7.0), (MEGENAGNA, 5.0)]),
    (KALITY, &[(GOTERA, 6.0)]),
    (MEKANISA, &[(SARBET, 4.0)]),
];

const COORDINATES: [(&str, f64, f64); 13] = [
    (MESKEL_SQUARE, 0.0, 0.0),
    (BOLE, 5.0, 1.0),
    (MEGENAGNA, 4.0, 4.0),
    (FOUR_KILO, 0.0, 4.0),
    (SIX_KILO, 0.0, 6.0),
    (PIAZZA, -3.0, 4.0),
    (MERKATO, -5.0, 2.0),
    (MEXICO, -3.0, 0.0),
    (SARBET, -3.0, -4.0),
    (GOTERA, 1.0, -5.0),
    (CMC, 9.0, 5.0),
    (KALITY, 2.0, -9.0),
    (MEKANISA, -5.0, -6.0),
];

pub fn create_addis_ababa_graph() -> Result<GraphStore, GraphError> {
    let mut builder = GraphBuilder::default();

    for (node, _) in ADJACENCY {
        builder.add_node(node);
    }

    for (node, neighbors) in ADJACENCY {
        for &(neighbor, weight) in neighbors {
            builder.add_neighbor(node, neighbor, weight);
        }
    }

    for (node, x, y) in COORDINATES {
        builder.add_coordinate(node, x, y);
    }

    builder.build()
}

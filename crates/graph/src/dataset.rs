//! Built-in example network: road distances between 20 Romanian cities,
//! with straight-line distances to Bucharest as the heuristic.

use indexmap::IndexMap;

use crate::graph::Cost;
use crate::network::{EdgeSpec, Network};

const ROADS: [(&str, &str, Cost); 23] = [
    ("Oradea", "Zerind", 71),
    ("Oradea", "Sibiu", 151),
    ("Zerind", "Arad", 75),
    ("Arad", "Sibiu", 140),
    ("Arad", "Timisoara", 118),
    ("Timisoara", "Lugoj", 111),
    ("Lugoj", "Mehadia", 70),
    ("Mehadia", "Dobreta", 75),
    ("Dobreta", "Craiova", 120),
    ("Craiova", "Rimnicu Vilcea", 146),
    ("Craiova", "Pitesti", 138),
    ("Rimnicu Vilcea", "Sibiu", 80),
    ("Rimnicu Vilcea", "Pitesti", 97),
    ("Pitesti", "Bucharest", 101),
    ("Sibiu", "Fagaras", 99),
    ("Fagaras", "Bucharest", 211),
    ("Bucharest", "Giurgiu", 90),
    ("Bucharest", "Urziceni", 85),
    ("Urziceni", "Hirsova", 98),
    ("Urziceni", "Vaslui", 142),
    ("Hirsova", "Eforie", 86),
    ("Vaslui", "Iasi", 92),
    ("Iasi", "Neamt", 87),
];

const STRAIGHT_LINE_TO_BUCHAREST: [(&str, Cost); 20] = [
    ("Arad", 366),
    ("Bucharest", 0),
    ("Craiova", 160),
    ("Dobreta", 242),
    ("Eforie", 161),
    ("Fagaras", 176),
    ("Giurgiu", 77),
    ("Hirsova", 151),
    ("Iasi", 226),
    ("Lugoj", 244),
    ("Mehadia", 241),
    ("Neamt", 234),
    ("Oradea", 380),
    ("Pitesti", 100),
    ("Rimnicu Vilcea", 193),
    ("Sibiu", 253),
    ("Timisoara", 329),
    ("Urziceni", 80),
    ("Vaslui", 199),
    ("Zerind", 374),
];

/// Undirected Romania road map, Arad to Bucharest by default.
pub fn romania() -> Network {
    let edges = ROADS
        .iter()
        .map(|&(from, to, weight)| EdgeSpec {
            from: from.to_string(),
            to: to.to_string(),
            weight,
        })
        .collect();

    let heuristics: IndexMap<String, Cost> = STRAIGHT_LINE_TO_BUCHAREST
        .iter()
        .map(|&(city, distance)| (city.to_string(), distance))
        .collect();

    Network {
        directed: false,
        edges,
        heuristics,
        start: Some("Arad".to_string()),
        goal: Some("Bucharest".to_string()),
    }
}

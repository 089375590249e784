//! Weighted graphs and A* least-cost path search.
//!
//! - [`graph::WeightedGraph`]: adjacency store with optional edge mirroring.
//! - [`astar`]: the search itself.
//! - [`network::Network`]: serde description of a graph plus heuristics,
//!   loadable from YAML, TOML or JSON.
//! - [`dataset::romania`]: the built-in example network.

pub mod astar;
pub mod dataset;
pub mod graph;
pub mod network;

pub use astar::{search, AStar, Heuristic, SearchError, SearchOutcome};
pub use graph::{Cost, WeightedGraph};
pub use network::Network;

//! A* least-cost path search.
//!
//! Expands nodes in ascending `f = g + h` order, where `g` is the cost
//! accumulated from the start and `h` the heuristic estimate to the goal.
//! Ties on `f` go to the record pushed first.
//!
//! # Frontier policy
//!
//! - The open set is a binary heap over arena indices.
//! - A node is closed when popped. Closed nodes are skipped as neighbors and
//!   never reopened.
//! - Open nodes are not deduplicated: a neighbor is pushed every time it is
//!   reached, and stale copies are expanded if they reach the top.
//!
//! With an admissible heuristic and non-negative weights the first policy
//! can still return a costlier path when the heuristic is inconsistent.

mod algorithm;
mod heuristic;
mod node;
mod types;

#[cfg(test)]
mod tests;

pub use algorithm::{search, AStar};
pub use heuristic::Heuristic;
pub use types::{Expansion, NeighborScore, Path, PathStep, SearchError, SearchOutcome};

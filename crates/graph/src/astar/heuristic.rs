//! Heuristic lookup.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use indexmap::IndexMap;

use crate::graph::Cost;

/// Estimated remaining cost from a node to the goal.
///
/// Must never overestimate for the returned path to be optimal. This is
/// not checked.
pub trait Heuristic<N> {
    /// `None` when the table has no entry for `node`.
    fn estimate(&self, node: &N) -> Option<Cost>;
}

impl<N, S> Heuristic<N> for HashMap<N, Cost, S>
where
    N: Eq + Hash,
    S: BuildHasher,
{
    fn estimate(&self, node: &N) -> Option<Cost> {
        self.get(node).copied()
    }
}

impl<N, S> Heuristic<N> for IndexMap<N, Cost, S>
where
    N: Eq + Hash,
    S: BuildHasher,
{
    fn estimate(&self, node: &N) -> Option<Cost> {
        self.get(node).copied()
    }
}

impl<N, H> Heuristic<N> for &H
where
    H: Heuristic<N> + ?Sized,
{
    fn estimate(&self, node: &N) -> Option<Cost> {
        (**self).estimate(node)
    }
}

//! Search records and frontier ordering.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::graph::Cost;

/// Record created each time a node is pushed onto the frontier.
///
/// Records live in an arena owned by the search loop and refer to their
/// parent by arena index; the start record has no parent.
#[derive(Debug, Clone)]
pub(crate) struct SearchNode<N> {
    pub name: N,
    pub parent: Option<usize>,
    pub g: Cost,
    pub h: Cost,
    pub f: Cost,
}

impl<N> SearchNode<N> {
    pub fn root(name: N, h: Cost) -> Self {
        Self {
            name,
            parent: None,
            g: 0,
            h,
            f: h,
        }
    }
}

// Identity is the node name; costs are ignored.
impl<N: PartialEq> PartialEq for SearchNode<N> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<N: Eq> Eq for SearchNode<N> {}

/// Heap entry pointing at an arena record.
///
/// Arena indices grow with every push, so the index doubles as the
/// insertion sequence for tie-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FrontierEntry {
    f: Cost,
    index: usize,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap: lower f first, then earlier insertion.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.index.cmp(&self.index))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Open set: lowest `f` first, earliest-inserted among equal `f`.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
}

impl Frontier {
    pub fn push(&mut self, f: Cost, index: usize) {
        self.heap.push(FrontierEntry { f, index });
    }

    pub fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|entry| entry.index)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

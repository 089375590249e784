//! A* results, trace records and errors.

use std::fmt;

use thiserror::Error;

use crate::graph::Cost;

/// One entry of a found path: a node and the cost accumulated to reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathStep<N> {
    pub node: N,
    pub cost: Cost,
}

impl<N: fmt::Display> fmt::Display for PathStep<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.node, self.cost)
    }
}

/// Path from start to goal, never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<N> {
    steps: Vec<PathStep<N>>,
}

impl<N> Path<N> {
    pub(crate) fn new(steps: Vec<PathStep<N>>) -> Self {
        debug_assert!(!steps.is_empty());
        Self { steps }
    }

    pub fn steps(&self) -> &[PathStep<N>] {
        &self.steps
    }

    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.steps.iter().map(|step| &step.node)
    }

    /// Cumulative cost at the goal.
    pub fn total_cost(&self) -> Cost {
        self.steps.last().map(|step| step.cost).unwrap_or(0)
    }

    /// Number of nodes on the path.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

impl<N: fmt::Display> Path<N> {
    /// `"node: cost"` entries in start-to-goal order.
    pub fn labels(&self) -> Vec<String> {
        self.steps.iter().map(ToString::to_string).collect()
    }
}

/// How a search call ended, when it did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<N> {
    Found { path: Path<N>, expansions: usize },
    /// The frontier emptied without reaching the goal.
    NotFound { expansions: usize },
    /// The expansion budget ran out first.
    Aborted { expansions: usize },
}

impl<N> SearchOutcome<N> {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found { .. })
    }

    pub fn path(&self) -> Option<&Path<N>> {
        match self {
            SearchOutcome::Found { path, .. } => Some(path),
            _ => None,
        }
    }

    pub fn into_path(self) -> Option<Path<N>> {
        match self {
            SearchOutcome::Found { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Number of nodes expanded before the search stopped.
    pub fn expansions(&self) -> usize {
        match self {
            SearchOutcome::Found { expansions, .. }
            | SearchOutcome::NotFound { expansions }
            | SearchOutcome::Aborted { expansions } => *expansions,
        }
    }
}

/// Scores computed for one neighbor during an expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborScore<N> {
    pub node: N,
    pub g: Cost,
    pub h: Cost,
    pub f: Cost,
}

/// Trace record passed to the observer once per expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion<N> {
    /// 1-based expansion counter.
    pub step: usize,
    pub node: N,
    /// Neighbors pushed onto the frontier, closed ones excluded.
    pub neighbors: Vec<NeighborScore<N>>,
}

impl<N: fmt::Display> fmt::Display for Expansion<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {}: {} -->", self.step, self.node)?;
        for (i, n) in self.neighbors.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{}{} g({}) + h({}) = f({})", sep, n.node, n.g, n.h, n.f)?;
        }
        if !self.neighbors.is_empty() {
            write!(f, ".")?;
        }
        Ok(())
    }
}

/// Failures that end a search call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError<N: fmt::Debug> {
    #[error("no heuristic estimate for node {0:?}")]
    MissingHeuristic(N),

    #[error("endpoint {0:?} is not in the graph")]
    InvalidEndpoint(N),

    #[error("path cost overflowed at {from:?} -> {to:?}")]
    CostOverflow { from: N, to: N },
}

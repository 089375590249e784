//! Best-first expansion loop.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use tracing::{debug, info};

use crate::graph::{Cost, WeightedGraph};

use super::heuristic::Heuristic;
use super::node::{Frontier, SearchNode};
use super::types::{Expansion, NeighborScore, Path, PathStep, SearchError, SearchOutcome};

/// A* search over a borrowed graph and heuristic table.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use waypoint_graph::astar::AStar;
/// use waypoint_graph::graph::WeightedGraph;
///
/// let mut graph = WeightedGraph::undirected();
/// graph.connect("a", "b", 2);
/// graph.connect("b", "c", 3);
/// let heuristics: HashMap<&str, u64> = HashMap::from([("a", 4), ("b", 3), ("c", 0)]);
///
/// let outcome = AStar::new(&graph, &heuristics).search(&"a", &"c")?;
/// assert_eq!(outcome.path().unwrap().total_cost(), 5);
/// # Ok::<(), waypoint_graph::astar::SearchError<&str>>(())
/// ```
#[derive(Debug)]
pub struct AStar<'a, N, H>
where
    N: Eq + Hash,
    H: ?Sized,
{
    graph: &'a WeightedGraph<N>,
    heuristics: &'a H,
    max_expansions: Option<usize>,
}

impl<'a, N, H> AStar<'a, N, H>
where
    N: Eq + Hash + Clone + Debug,
    H: Heuristic<N> + ?Sized,
{
    pub fn new(graph: &'a WeightedGraph<N>, heuristics: &'a H) -> Self {
        Self {
            graph,
            heuristics,
            max_expansions: None,
        }
    }

    /// Stop with [`SearchOutcome::Aborted`] once this many nodes were expanded.
    #[must_use]
    pub fn max_expansions(mut self, limit: Option<usize>) -> Self {
        self.max_expansions = limit;
        self
    }

    /// Run the search, logging each expansion at debug level.
    pub fn search(&self, start: &N, goal: &N) -> Result<SearchOutcome<N>, SearchError<N>> {
        self.search_with(start, goal, |expansion| {
            debug!(
                step = expansion.step,
                node = ?expansion.node,
                neighbors = ?expansion.neighbors,
                "expanded node"
            );
        })
    }

    /// Run the search, handing every expansion to `observer`.
    ///
    /// Closed nodes are never reopened, even when a cheaper route to one is
    /// found later, so an inconsistent heuristic can yield a costlier path.
    ///
    /// Nodes already on the frontier are pushed again rather than updated,
    /// and a stale duplicate that reaches the top after its node was closed
    /// is expanded a second time. These duplicates only add expansions; they
    /// never change the cost of the returned path.
    pub fn search_with<F>(
        &self,
        start: &N,
        goal: &N,
        mut observer: F,
    ) -> Result<SearchOutcome<N>, SearchError<N>>
    where
        F: FnMut(&Expansion<N>),
    {
        for endpoint in [start, goal] {
            if !self.graph.contains(endpoint) {
                return Err(SearchError::InvalidEndpoint(endpoint.clone()));
            }
        }

        let mut arena = vec![SearchNode::root(start.clone(), self.estimate(start)?)];
        let mut open = Frontier::default();
        open.push(arena[0].f, 0);
        let mut closed: HashSet<N> = HashSet::new();
        let mut expansions = 0;

        while let Some(index) = open.pop() {
            let (name, g) = {
                let current = &arena[index];
                (current.name.clone(), current.g)
            };
            closed.insert(name.clone());

            if name == *goal {
                let path = reconstruct(&arena, index);
                info!(
                    cost = path.total_cost(),
                    nodes = path.len(),
                    expansions,
                    open = open.len(),
                    "path found"
                );
                return Ok(SearchOutcome::Found { path, expansions });
            }

            if self.max_expansions.is_some_and(|limit| expansions >= limit) {
                info!(expansions, "expansion budget exhausted");
                return Ok(SearchOutcome::Aborted { expansions });
            }
            expansions += 1;

            let mut scored = Vec::new();
            for (neighbor, weight) in self.graph.neighbors(&name) {
                if closed.contains(neighbor) {
                    continue;
                }

                let overflow = || SearchError::CostOverflow {
                    from: name.clone(),
                    to: neighbor.clone(),
                };
                let g = g.checked_add(weight).ok_or_else(overflow)?;
                let h = self.estimate(neighbor)?;
                let f = g.checked_add(h).ok_or_else(overflow)?;

                let child = SearchNode {
                    name: neighbor.clone(),
                    parent: Some(index),
                    g,
                    h,
                    f,
                };
                scored.push(NeighborScore {
                    node: child.name.clone(),
                    g: child.g,
                    h: child.h,
                    f: child.f,
                });
                open.push(f, arena.len());
                arena.push(child);
            }

            observer(&Expansion {
                step: expansions,
                node: name,
                neighbors: scored,
            });
        }

        info!(expansions, "no path found");
        Ok(SearchOutcome::NotFound { expansions })
    }

    fn estimate(&self, node: &N) -> Result<Cost, SearchError<N>> {
        self.heuristics
            .estimate(node)
            .ok_or_else(|| SearchError::MissingHeuristic(node.clone()))
    }
}

/// Search with no expansion budget.
pub fn search<N, H>(
    graph: &WeightedGraph<N>,
    heuristics: &H,
    start: &N,
    goal: &N,
) -> Result<SearchOutcome<N>, SearchError<N>>
where
    N: Eq + Hash + Clone + Debug,
    H: Heuristic<N> + ?Sized,
{
    AStar::new(graph, heuristics).search(start, goal)
}

/// Walk parent indices back from `index` and return the path start-first.
fn reconstruct<N: Clone>(arena: &[SearchNode<N>], index: usize) -> Path<N> {
    let mut steps = Vec::new();
    let mut cursor = Some(index);
    while let Some(i) = cursor {
        let record = &arena[i];
        steps.push(PathStep {
            node: record.name.clone(),
            cost: record.g,
        });
        cursor = record.parent;
    }
    steps.reverse();
    Path::new(steps)
}

use indexmap::{IndexMap, IndexSet};
use std::hash::Hash;

/// Edge weights and accumulated path costs.
///
/// Unsigned, so a negative weight cannot be represented.
pub type Cost = u64;

/// Weight used by [`WeightedGraph::connect_default`].
pub const DEFAULT_WEIGHT: Cost = 1;

/// Adjacency map: source -> (target -> weight).
pub type Adjacency<N> = IndexMap<N, IndexMap<N, Cost>>;

/// Adjacency-based store of weighted edges.
///
/// Nodes and their outgoing edges are kept in insertion order, so neighbor
/// iteration (and therefore search tie-breaking) is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedGraph<N: Eq + Hash = String> {
    adjacency: Adjacency<N>,
    directed: bool,
}

impl<N> WeightedGraph<N>
where
    N: Eq + Hash + Clone,
{
    /// Empty directed graph.
    pub fn new() -> Self {
        Self::with_direction(true)
    }

    /// Empty undirected graph: every `connect` also stores the mirrored edge.
    pub fn undirected() -> Self {
        Self::with_direction(false)
    }

    pub fn with_direction(directed: bool) -> Self {
        Self::from_adjacency(IndexMap::new(), directed)
    }

    /// Wrap an existing adjacency map.
    ///
    /// Targets without an entry of their own get an empty one. When
    /// `directed` is false the map is symmetrized immediately.
    pub fn from_adjacency(adjacency: Adjacency<N>, directed: bool) -> Self {
        let mut graph = Self {
            adjacency,
            directed,
        };

        let targets: Vec<N> = graph
            .adjacency
            .values()
            .flat_map(|links| links.keys().cloned())
            .collect();
        for target in targets {
            graph.adjacency.entry(target).or_default();
        }

        if !directed {
            graph.make_undirected();
        }
        graph
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Insert or overwrite the edge `a -> b`. Undirected graphs also get `b -> a`.
    pub fn connect(&mut self, a: N, b: N, weight: Cost) {
        self.adjacency
            .entry(a.clone())
            .or_default()
            .insert(b.clone(), weight);

        let reverse = self.adjacency.entry(b).or_default();
        if !self.directed {
            reverse.insert(a, weight);
        }
    }

    pub fn connect_default(&mut self, a: N, b: N) {
        self.connect(a, b, DEFAULT_WEIGHT);
    }

    /// Outgoing edges of `node`. Unknown and dead-end nodes yield nothing.
    pub fn neighbors<'a>(&'a self, node: &N) -> impl Iterator<Item = (&'a N, Cost)> + 'a {
        self.adjacency
            .get(node)
            .into_iter()
            .flat_map(|links| links.iter().map(|(target, weight)| (target, *weight)))
    }

    pub fn edge_weight(&self, a: &N, b: &N) -> Option<Cost> {
        self.adjacency.get(a).and_then(|links| links.get(b)).copied()
    }

    pub fn contains(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Every node that appears as an edge source or target.
    pub fn all_nodes(&self) -> IndexSet<&N> {
        self.adjacency
            .iter()
            .flat_map(|(source, links)| std::iter::once(source).chain(links.keys()))
            .collect()
    }

    /// All stored edges as `(source, target, weight)`.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N, Cost)> + '_ {
        self.adjacency.iter().flat_map(|(source, links)| {
            links
                .iter()
                .map(move |(target, weight)| (source, target, *weight))
        })
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(IndexMap::len).sum()
    }

    /// Store `b -> a` with weight `w` for every stored edge `a -> b`.
    ///
    /// Sources are visited in insertion order and each one reads its links
    /// after earlier sources have been mirrored, so when `a -> b` and `b -> a`
    /// disagree the weight of the earlier source wins on both sides. Running
    /// it again changes nothing.
    pub fn make_undirected(&mut self) {
        let sources: Vec<N> = self.adjacency.keys().cloned().collect();
        for source in sources {
            let links: Vec<(N, Cost)> = match self.adjacency.get(&source) {
                Some(links) => links.iter().map(|(t, w)| (t.clone(), *w)).collect(),
                None => continue,
            };
            for (target, weight) in links {
                self.adjacency
                    .entry(target)
                    .or_default()
                    .insert(source.clone(), weight);
            }
        }
    }
}

impl<N> Default for WeightedGraph<N>
where
    N: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(directed: bool, edges: &[(&str, &str, Cost)]) -> WeightedGraph<String> {
        let mut g = WeightedGraph::with_direction(directed);
        for (a, b, w) in edges {
            g.connect(a.to_string(), b.to_string(), *w);
        }
        g
    }

    fn key(s: &str) -> String {
        s.to_string()
    }

    #[test]
    fn test_connect_directed() {
        let g = graph(true, &[("a", "b", 3)]);
        assert_eq!(g.edge_weight(&key("a"), &key("b")), Some(3));
        assert_eq!(g.edge_weight(&key("b"), &key("a")), None);
        assert!(g.contains(&key("b")), "target gets an entry of its own");
        assert_eq!(g.neighbors(&key("b")).count(), 0);
    }

    #[test]
    fn test_connect_undirected_mirrors() {
        let g = graph(false, &[("a", "b", 3)]);
        assert_eq!(g.edge_weight(&key("b"), &key("a")), Some(3));
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn test_connect_overwrites() {
        let mut g = graph(true, &[("a", "b", 3)]);
        g.connect(key("a"), key("b"), 9);
        assert_eq!(g.edge_weight(&key("a"), &key("b")), Some(9));
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_connect_default_weight() {
        let mut g = WeightedGraph::new();
        g.connect_default(key("a"), key("b"));
        assert_eq!(g.edge_weight(&key("a"), &key("b")), Some(DEFAULT_WEIGHT));
    }

    #[test]
    fn test_neighbors_unknown_node_is_empty() {
        let g = graph(true, &[("a", "b", 1)]);
        assert_eq!(g.neighbors(&key("zzz")).count(), 0);
    }

    #[test]
    fn test_neighbors_keep_insertion_order() {
        let g = graph(true, &[("a", "c", 1), ("a", "b", 2), ("a", "d", 3)]);
        let order: Vec<&String> = g.neighbors(&key("a")).map(|(n, _)| n).collect();
        assert_eq!(order, vec!["c", "b", "d"]);
    }

    #[test]
    fn test_all_nodes_includes_sources_and_targets() {
        let g = graph(true, &[("a", "b", 1), ("c", "d", 1)]);
        let nodes = g.all_nodes();
        assert_eq!(nodes.len(), 4);
        for n in ["a", "b", "c", "d"] {
            assert!(nodes.contains(&key(n)));
        }
    }

    #[test]
    fn test_make_undirected_symmetry_and_idempotence() {
        let mut g = graph(true, &[("a", "b", 4), ("b", "c", 2), ("c", "a", 7)]);
        g.make_undirected();

        for (a, b, w) in g.edges() {
            assert_eq!(g.edge_weight(b, a), Some(w), "missing mirror of {a}->{b}");
        }

        let once = g.clone();
        g.make_undirected();
        assert_eq!(g, once);
    }

    #[test]
    fn test_make_undirected_conflicting_weights_resolve_symmetric() {
        let mut g = graph(true, &[("a", "b", 5), ("b", "a", 7)]);
        g.make_undirected();
        assert_eq!(g.edge_weight(&key("a"), &key("b")), Some(5));
        assert_eq!(g.edge_weight(&key("b"), &key("a")), Some(5));
    }

    #[test]
    fn test_from_adjacency_undirected_symmetrizes() {
        let mut adjacency: Adjacency<String> = IndexMap::new();
        adjacency
            .entry(key("x"))
            .or_default()
            .insert(key("y"), 2);

        let g = WeightedGraph::from_adjacency(adjacency, false);
        assert_eq!(g.edge_weight(&key("y"), &key("x")), Some(2));
        assert!(!g.is_directed());
    }
}

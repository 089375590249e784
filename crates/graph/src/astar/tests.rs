//! A* algorithm tests.

use std::collections::HashMap;

use crate::graph::{Cost, WeightedGraph};

use super::{search, AStar, SearchError, SearchOutcome};

/// Directed graph over `&str` ids.
fn directed(edges: &[(&'static str, &'static str, Cost)]) -> WeightedGraph<&'static str> {
    let mut graph = WeightedGraph::new();
    for &(a, b, w) in edges {
        graph.connect(a, b, w);
    }
    graph
}

fn zero_heuristics(graph: &WeightedGraph<&'static str>) -> HashMap<&'static str, Cost> {
    graph.all_nodes().into_iter().map(|n| (*n, 0)).collect()
}

fn labels(outcome: &SearchOutcome<&str>) -> Vec<String> {
    outcome.path().expect("path should be found").labels()
}

/// Collect the formatted trace lines of one search.
fn traced(
    graph: &WeightedGraph<&'static str>,
    heuristics: &HashMap<&'static str, Cost>,
    start: &'static str,
    goal: &'static str,
) -> (SearchOutcome<&'static str>, Vec<String>) {
    let mut lines = Vec::new();
    let outcome = AStar::new(graph, heuristics)
        .search_with(&start, &goal, |e| lines.push(e.to_string()))
        .expect("search failed");
    (outcome, lines)
}

#[test]
fn test_astar_basic_path() {
    let graph = directed(&[("s", "a", 2), ("a", "g", 3), ("s", "g", 10)]);
    let heuristics: HashMap<&str, Cost> = HashMap::from([("s", 4), ("a", 3), ("g", 0)]);

    let outcome = search(&graph, &heuristics, &"s", &"g").expect("A* failed");

    assert_eq!(labels(&outcome), vec!["s: 0", "a: 2", "g: 5"]);
    let path = outcome.path().unwrap();
    assert_eq!(path.total_cost(), 5);
    assert_eq!(path.edge_count(), 2);
    assert_eq!(path.nodes().copied().collect::<Vec<_>>(), vec!["s", "a", "g"]);
}

#[test]
fn test_astar_same_node() {
    let graph = directed(&[("s", "a", 2)]);
    let heuristics = zero_heuristics(&graph);

    let outcome = search(&graph, &heuristics, &"s", &"s").expect("A* failed");

    assert_eq!(labels(&outcome), vec!["s: 0"]);
    assert_eq!(outcome.expansions(), 0);
}

#[test]
fn test_astar_no_path() {
    let graph = directed(&[("s", "a", 1), ("b", "g", 1)]);
    let heuristics = zero_heuristics(&graph);

    let outcome = search(&graph, &heuristics, &"s", &"g").expect("no path is not an error");

    assert_eq!(outcome, SearchOutcome::NotFound { expansions: 2 });
    assert!(!outcome.is_found());
    assert!(outcome.into_path().is_none());
}

#[test]
fn test_astar_edges_are_directed() {
    let graph = directed(&[("g", "s", 1)]);
    let heuristics = zero_heuristics(&graph);

    let outcome = search(&graph, &heuristics, &"s", &"g").unwrap();
    assert!(!outcome.is_found());
}

#[test]
fn test_astar_missing_heuristic() {
    let graph = directed(&[("s", "a", 1), ("a", "g", 1)]);
    let heuristics: HashMap<&str, Cost> = HashMap::from([("s", 0), ("g", 0)]);

    let err = search(&graph, &heuristics, &"s", &"g").unwrap_err();
    assert_eq!(err, SearchError::MissingHeuristic("a"));
}

#[test]
fn test_astar_missing_heuristic_for_start() {
    let graph = directed(&[("s", "g", 1)]);
    let heuristics: HashMap<&str, Cost> = HashMap::from([("g", 0)]);

    let err = search(&graph, &heuristics, &"s", &"g").unwrap_err();
    assert_eq!(err, SearchError::MissingHeuristic("s"));
}

#[test]
fn test_astar_missing_heuristic_unreached_node_is_fine() {
    // "x" is never expanded as a neighbor, so its missing entry is not looked up.
    let graph = directed(&[("s", "g", 1), ("x", "s", 1)]);
    let heuristics: HashMap<&str, Cost> = HashMap::from([("s", 0), ("g", 0)]);

    let outcome = search(&graph, &heuristics, &"s", &"g").unwrap();
    assert_eq!(labels(&outcome), vec!["s: 0", "g: 1"]);
}

#[test]
fn test_astar_invalid_endpoint() {
    let graph = directed(&[("s", "a", 1)]);
    let heuristics = zero_heuristics(&graph);

    assert_eq!(
        search(&graph, &heuristics, &"nowhere", &"a").unwrap_err(),
        SearchError::InvalidEndpoint("nowhere")
    );
    assert_eq!(
        search(&graph, &heuristics, &"s", &"nowhere").unwrap_err(),
        SearchError::InvalidEndpoint("nowhere")
    );
}

#[test]
fn test_astar_cost_overflow() {
    let graph = directed(&[("s", "a", Cost::MAX), ("a", "g", 1)]);
    let heuristics = zero_heuristics(&graph);

    let err = search(&graph, &heuristics, &"s", &"g").unwrap_err();
    assert_eq!(err, SearchError::CostOverflow { from: "a", to: "g" });
}

#[test]
fn test_astar_stable_tie_break() {
    // Two equal-cost routes. The route discovered first wins, every time.
    let graph = directed(&[("s", "a", 1), ("s", "b", 1), ("a", "g", 1), ("b", "g", 1)]);
    let heuristics = zero_heuristics(&graph);

    for _ in 0..50 {
        let outcome = search(&graph, &heuristics, &"s", &"g").unwrap();
        assert_eq!(labels(&outcome), vec!["s: 0", "a: 1", "g: 2"]);
    }

    let flipped = directed(&[("s", "b", 1), ("s", "a", 1), ("a", "g", 1), ("b", "g", 1)]);
    let outcome = search(&flipped, &heuristics, &"s", &"g").unwrap();
    assert_eq!(labels(&outcome), vec!["s: 0", "b: 1", "g: 2"]);
}

#[test]
fn test_astar_duplicate_frontier_records() {
    // "c" is pushed twice; the stale copy is popped after "c" is already
    // closed and expanded again, which must not disturb the path.
    let graph = directed(&[
        ("s", "a", 1),
        ("s", "b", 1),
        ("a", "c", 1),
        ("b", "c", 1),
        ("c", "g", 5),
    ]);
    let heuristics = zero_heuristics(&graph);

    let (outcome, lines) = traced(&graph, &heuristics, "s", "g");

    assert_eq!(labels(&outcome), vec!["s: 0", "a: 1", "c: 2", "g: 7"]);
    assert_eq!(outcome.expansions(), 5);
    assert_eq!(
        lines,
        vec![
            "Step 1: s --> a g(1) + h(0) = f(1), b g(1) + h(0) = f(1).",
            "Step 2: a --> c g(2) + h(0) = f(2).",
            "Step 3: b --> c g(2) + h(0) = f(2).",
            "Step 4: c --> g g(7) + h(0) = f(7).",
            "Step 5: c --> g g(7) + h(0) = f(7).",
        ]
    );
}

#[test]
fn test_astar_closed_nodes_are_not_reopened() {
    // Admissible but inconsistent heuristic: "a" is closed via the direct
    // edge before the cheaper s -> b -> a route is seen, and stays closed.
    let graph = directed(&[("s", "a", 4), ("s", "b", 1), ("b", "a", 1), ("a", "g", 10)]);
    let heuristics: HashMap<&str, Cost> = HashMap::from([("s", 0), ("a", 0), ("b", 10), ("g", 0)]);

    let (outcome, lines) = traced(&graph, &heuristics, "s", "g");

    assert_eq!(labels(&outcome), vec!["s: 0", "a: 4", "g: 14"]);
    assert_eq!(lines.last().map(String::as_str), Some("Step 3: b -->"));
}

#[test]
fn test_astar_max_expansions_aborts() {
    let graph = directed(&[("s", "a", 1), ("a", "b", 1), ("b", "g", 1)]);
    let heuristics = zero_heuristics(&graph);

    let aborted = AStar::new(&graph, &heuristics)
        .max_expansions(Some(2))
        .search(&"s", &"g")
        .unwrap();
    assert_eq!(aborted, SearchOutcome::Aborted { expansions: 2 });

    let found = AStar::new(&graph, &heuristics)
        .max_expansions(Some(3))
        .search(&"s", &"g")
        .unwrap();
    assert_eq!(found.path().unwrap().total_cost(), 3);
    assert_eq!(found.expansions(), 3);
}

#[test]
fn test_astar_dead_end_trace_line() {
    let graph = directed(&[("s", "a", 1), ("b", "g", 1)]);
    let heuristics = zero_heuristics(&graph);

    let (outcome, lines) = traced(&graph, &heuristics, "s", "g");

    assert!(!outcome.is_found());
    assert_eq!(lines, vec!["Step 1: s --> a g(1) + h(0) = f(1).", "Step 2: a -->"]);
}

#[test]
fn test_astar_indexmap_heuristics() {
    let graph = directed(&[("s", "g", 7)]);
    let heuristics: indexmap::IndexMap<&str, Cost> = [("s", 7), ("g", 0)].into_iter().collect();

    let outcome = AStar::new(&graph, &heuristics).search(&"s", &"g").unwrap();
    assert_eq!(outcome.path().unwrap().total_cost(), 7);
}

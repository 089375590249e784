//! Text and JSON rendering of command results.

use anyhow::Result;
use serde_json::json;
use waypoint_graph::{Network, SearchOutcome};

pub fn route_text(
    outcome: &SearchOutcome<String>,
    start: &str,
    goal: &str,
    trace: &[String],
) -> String {
    let mut lines: Vec<String> = trace.to_vec();
    match outcome {
        SearchOutcome::Found { path, expansions } => {
            lines.push("Path:".to_string());
            lines.extend(path.labels());
            lines.push(format!(
                "Total cost: {} ({} expansions)",
                path.total_cost(),
                expansions
            ));
        }
        SearchOutcome::NotFound { .. } => {
            lines.push(format!("No path found from {} to {}", start, goal));
        }
        SearchOutcome::Aborted { expansions } => {
            lines.push(format!("Search aborted after {} expansions", expansions));
        }
    }
    lines.join("\n")
}

pub fn route_json(
    outcome: &SearchOutcome<String>,
    start: &str,
    goal: &str,
    trace: &[String],
) -> Result<String> {
    let status = match outcome {
        SearchOutcome::Found { .. } => "found",
        SearchOutcome::NotFound { .. } => "not_found",
        SearchOutcome::Aborted { .. } => "aborted",
    };
    let path = outcome.path().map(|path| {
        path.steps()
            .iter()
            .map(|step| json!({ "node": step.node, "cost": step.cost }))
            .collect::<Vec<_>>()
    });

    let value = json!({
        "status": status,
        "start": start,
        "goal": goal,
        "path": path,
        "cost": outcome.path().map(|path| path.total_cost()),
        "expansions": outcome.expansions(),
        "trace": trace,
    });
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Nodes in name order, each with its heuristic estimate when known.
pub fn nodes_text(network: &Network) -> String {
    let graph = network.build_graph();
    let mut nodes: Vec<&String> = graph.all_nodes().into_iter().collect();
    nodes.sort();

    nodes
        .into_iter()
        .map(|node| match network.heuristics.get(node) {
            Some(h) => format!("{} (h = {})", node, h),
            None => format!("{} (no heuristic)", node),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn nodes_json(network: &Network) -> Result<String> {
    let graph = network.build_graph();
    let mut nodes: Vec<&String> = graph.all_nodes().into_iter().collect();
    nodes.sort();

    let entries: Vec<_> = nodes
        .into_iter()
        .map(|node| {
            json!({
                "node": node,
                "heuristic": network.heuristics.get(node),
                "degree": graph.neighbors(node).count(),
            })
        })
        .collect();
    Ok(serde_json::to_string_pretty(&entries)?)
}

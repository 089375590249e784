use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use waypoint_config::loader::file;

pub use waypoint_config::FileFormat;

use crate::graph::{Cost, WeightedGraph, DEFAULT_WEIGHT};

/// On-disk description of a search problem: edges, heuristics and an
/// optional default start/goal pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Network {
    #[serde(default = "default_directed")]
    pub directed: bool,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
    #[serde(default)]
    pub heuristics: IndexMap<String, Cost>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    #[serde(default = "default_weight")]
    pub weight: Cost,
}

impl Network {
    /// Load a `.yml`, `.yaml`, `.toml` or `.json` network file.
    pub fn load(path: &Path) -> Result<Self> {
        file::load(path).with_context(|| format!("failed to load network file {}", path.display()))
    }

    pub fn parse(content: &str, format: FileFormat) -> Result<Self> {
        Ok(format.parse(content, None)?)
    }

    /// Build the graph edge by edge. Undirected networks are symmetrized
    /// again once all edges are in.
    pub fn build_graph(&self) -> WeightedGraph<String> {
        let mut graph = WeightedGraph::with_direction(self.directed);
        for edge in &self.edges {
            graph.connect(edge.from.clone(), edge.to.clone(), edge.weight);
        }
        if !self.directed {
            graph.make_undirected();
        }
        graph
    }

    /// Nodes of the graph with no heuristic entry, in graph order.
    pub fn missing_heuristics(&self) -> Vec<String> {
        self.build_graph()
            .all_nodes()
            .into_iter()
            .filter(|node| !self.heuristics.contains_key(*node))
            .cloned()
            .collect()
    }
}

fn default_directed() -> bool {
    true
}

fn default_weight() -> Cost {
    DEFAULT_WEIGHT
}

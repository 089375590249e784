use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::{debug, warn};
use waypoint_config::{Config, OutputFormat, PartialSearchConfig};
use waypoint_graph::AStar;

use super::{load_network, render, OutputArgs};

#[derive(Args, Debug)]
pub struct RouteArgs {
    /// Network file (.yml, .yaml, .toml or .json); defaults to the Romania map
    #[arg(short, long, value_name = "FILE")]
    pub network: Option<PathBuf>,

    /// Start node, overriding the network's default
    #[arg(long)]
    pub from: Option<String>,

    /// Goal node, overriding the network's default
    #[arg(long)]
    pub to: Option<String>,

    /// Print one line per expansion
    #[arg(long, overrides_with = "no_trace")]
    pub trace: bool,

    /// Turn off a configured trace
    #[arg(long, overrides_with = "trace")]
    pub no_trace: bool,

    /// Give up after expanding this many nodes
    #[arg(long, value_name = "N", conflicts_with = "unlimited")]
    pub max_expansions: Option<usize>,

    /// Lift a configured expansion limit
    #[arg(long)]
    pub unlimited: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl RouteArgs {
    pub fn search_overrides(&self) -> PartialSearchConfig {
        let max_expansions = if self.unlimited {
            Some(None)
        } else {
            self.max_expansions.map(Some)
        };
        let trace = match (self.trace, self.no_trace) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        PartialSearchConfig {
            max_expansions,
            trace,
        }
    }
}

pub fn handle_route(args: RouteArgs, config: &Config) -> Result<()> {
    let network = load_network(args.network.as_deref())?;

    let missing = network.missing_heuristics();
    if !missing.is_empty() {
        warn!(nodes = ?missing, "network has nodes without a heuristic estimate");
    }

    let start = args
        .from
        .or_else(|| network.start.clone())
        .context("no start node: pass --from or set `start` in the network file")?;
    let goal = args
        .to
        .or_else(|| network.goal.clone())
        .context("no goal node: pass --to or set `goal` in the network file")?;

    let graph = network.build_graph();
    let mut trace = Vec::new();
    let outcome = AStar::new(&graph, &network.heuristics)
        .max_expansions(config.search.max_expansions)
        .search_with(&start, &goal, |expansion| {
            debug!(step = expansion.step, "{}", expansion);
            if config.search.trace {
                trace.push(expansion.to_string());
            }
        })
        .with_context(|| format!("search from {} to {} failed", start, goal))?;

    let rendered = match config.output.format {
        OutputFormat::Text => render::route_text(&outcome, &start, &goal, &trace),
        OutputFormat::Json => render::route_json(&outcome, &start, &goal, &trace)?,
    };
    println!("{}", rendered);
    Ok(())
}

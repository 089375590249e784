pub mod nodes;
pub mod render;
pub mod route;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use waypoint_config::{OutputFormat, PartialConfig};
use waypoint_graph::dataset;
use waypoint_graph::network::Network;

#[derive(Parser, Debug)]
#[command(name = "waypoint")]
#[command(about = "Least-cost routes over weighted graphs with A*", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the least-cost route between two nodes
    Route(route::RouteArgs),
    /// List the nodes of a network
    Nodes(nodes::NodesArgs),
}

/// Output flags shared by every command.
#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Output format: text or json
    #[arg(long, value_name = "FORMAT", value_parser = parse_format, conflicts_with = "json")]
    pub format: Option<OutputFormat>,

    /// Shorthand for --format json
    #[arg(long)]
    pub json: bool,
}

impl OutputArgs {
    pub fn format(&self) -> Option<OutputFormat> {
        if self.json {
            Some(OutputFormat::Json)
        } else {
            self.format
        }
    }
}

fn parse_format(value: &str) -> Result<OutputFormat, String> {
    OutputFormat::parse(value).map_err(|e| e.to_string())
}

impl Cli {
    /// The configuration layer set by command-line flags. Flags that were
    /// not passed leave the file and environment values alone.
    pub fn overrides(&self) -> PartialConfig {
        let mut layer = PartialConfig::default();
        match &self.command {
            Commands::Route(args) => {
                layer.search = args.search_overrides();
                layer.output.format = args.output.format();
            }
            Commands::Nodes(args) => layer.output.format = args.output.format(),
        }
        layer
    }
}

/// Load `path`, or fall back to the built-in Romania map.
pub fn load_network(path: Option<&Path>) -> Result<Network> {
    match path {
        Some(path) => Network::load(path),
        None => Ok(dataset::romania()),
    }
}

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use waypoint_config::{Config, OutputFormat};

use super::{load_network, render, OutputArgs};

#[derive(Args, Debug)]
pub struct NodesArgs {
    /// Network file; defaults to the Romania map
    #[arg(short, long, value_name = "FILE")]
    pub network: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn handle_nodes(args: NodesArgs, config: &Config) -> Result<()> {
    let network = load_network(args.network.as_deref())?;
    let rendered = match config.output.format {
        OutputFormat::Text => render::nodes_text(&network),
        OutputFormat::Json => render::nodes_json(&network)?,
    };
    println!("{}", rendered);
    Ok(())
}

mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use commands::{Cli, Commands};
use std::path::Path;
use tracing_subscriber::{fmt, EnvFilter};
use waypoint_config::loader::find_default_file;
use waypoint_config::{Config, ConfigBuilder};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_tracing(cli.verbose, &config);

    match cli.command {
        Commands::Route(args) => commands::route::handle_route(args, &config),
        Commands::Nodes(args) => commands::nodes::handle_nodes(args, &config),
    }
}

/// Defaults < config file < environment < command-line flags.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut builder = ConfigBuilder::new();
    if let Some(path) = cli
        .config
        .clone()
        .or_else(|| find_default_file(Path::new(".")))
    {
        builder = builder.with_file(path);
    }

    builder
        .with_env()
        .with_overrides(cli.overrides())
        .build()
        .context("invalid configuration")
}

fn init_tracing(verbose: u8, config: &Config) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.logging.level.as_str())),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

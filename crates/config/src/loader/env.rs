//! Environment variable configuration overlay
//!
//! Variables take the form `WAYPOINT_<section>_<field>=value`:
//! - `WAYPOINT_SEARCH_MAX_EXPANSIONS=500`
//! - `WAYPOINT_SEARCH_TRACE=true`
//! - `WAYPOINT_OUTPUT_FORMAT=json`
//! - `WAYPOINT_LOGGING_LEVEL=debug`
//!
//! `WAYPOINT_SEARCH_MAX_EXPANSIONS=none` lifts a limit set by a file.
//! Unparseable values are logged and skipped.

use crate::{error::ConfigError, types::*, Result};
use std::env;
use tracing::warn;

pub const PREFIX: &str = "WAYPOINT_";

/// Parse configuration from the process environment
pub fn from_env() -> Result<Option<PartialConfig>> {
    from_vars(env::vars())
}

/// Parse configuration from `(key, value)` pairs; keys without the prefix are ignored
pub fn from_vars<I>(vars: I) -> Result<Option<PartialConfig>>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut layer = PartialConfig::default();
    let mut found_any = false;

    for (key, value) in vars.into_iter().filter(|(k, _)| k.starts_with(PREFIX)) {
        found_any = true;
        if let Err(e) = apply_env_var(&mut layer, &key, &value) {
            warn!(var = %key, error = %e, "ignoring environment override");
        }
    }

    Ok(found_any.then_some(layer))
}

/// Apply a single environment variable to config
fn apply_env_var(layer: &mut PartialConfig, key: &str, value: &str) -> Result<()> {
    let stripped = key.strip_prefix(PREFIX).unwrap_or(key);

    let (section, field) = match stripped.split_once('_') {
        Some((section, field)) if !field.is_empty() => {
            (section.to_lowercase(), field.to_lowercase())
        }
        _ => {
            return Err(ConfigError::EnvVarError {
                var: key.to_string(),
                message: format!("Expected format: {}<section>_<field>", PREFIX),
            })
        }
    };

    match section.as_str() {
        "search" => apply_search_var(&mut layer.search, &field, value),
        "output" => apply_output_var(&mut layer.output, &field, value),
        "logging" => apply_logging_var(&mut layer.logging, &field, value),
        _ => Err(ConfigError::EnvVarError {
            var: key.to_string(),
            message: format!("Unknown section: {}", section),
        }),
    }
}

fn apply_search_var(layer: &mut PartialSearchConfig, field: &str, value: &str) -> Result<()> {
    match field {
        "max_expansions" => {
            let limit = match value.to_lowercase().as_str() {
                "" | "none" | "unlimited" => None,
                _ => Some(value.parse().map_err(|_| ConfigError::EnvVarError {
                    var: "WAYPOINT_SEARCH_MAX_EXPANSIONS".to_string(),
                    message: format!("Invalid integer: {}", value),
                })?),
            };
            layer.max_expansions = Some(limit);
        }
        "trace" => {
            layer.trace = Some(parse_bool("WAYPOINT_SEARCH_TRACE", value)?);
        }
        _ => return Err(unknown_field("SEARCH", field)),
    }
    Ok(())
}

fn apply_output_var(layer: &mut PartialOutputConfig, field: &str, value: &str) -> Result<()> {
    match field {
        "format" => layer.format = Some(OutputFormat::parse(value)?),
        _ => return Err(unknown_field("OUTPUT", field)),
    }
    Ok(())
}

fn apply_logging_var(layer: &mut PartialLoggingConfig, field: &str, value: &str) -> Result<()> {
    match field {
        "level" => layer.level = Some(LogLevel::parse(value)?),
        _ => return Err(unknown_field("LOGGING", field)),
    }
    Ok(())
}

fn unknown_field(section: &str, field: &str) -> ConfigError {
    ConfigError::EnvVarError {
        var: format!("{}{}_{}", PREFIX, section, field.to_uppercase()),
        message: format!("Unknown field: {}", field),
    }
}

fn parse_bool(var: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::EnvVarError {
            var: var.to_string(),
            message: format!("Invalid boolean: {}", value),
        }),
    }
}

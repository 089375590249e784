//! Applying partial layers on top of a configuration

use crate::{types::*, Config};

/// Apply `layer` on top of `base`. Every field the layer sets wins, even
/// when it sets the default value.
pub fn merge(mut base: Config, layer: PartialConfig) -> Config {
    merge_search(&mut base.search, layer.search);
    merge_output(&mut base.output, layer.output);
    merge_logging(&mut base.logging, layer.logging);
    base
}

fn merge_search(base: &mut SearchConfig, layer: PartialSearchConfig) {
    if let Some(max_expansions) = layer.max_expansions {
        base.max_expansions = max_expansions;
    }
    if let Some(trace) = layer.trace {
        base.trace = trace;
    }
}

fn merge_output(base: &mut OutputConfig, layer: PartialOutputConfig) {
    if let Some(format) = layer.format {
        base.format = format;
    }
}

fn merge_logging(base: &mut LoggingConfig, layer: PartialLoggingConfig) {
    if let Some(level) = layer.level {
        base.level = level;
    }
}

//! Configuration loading from various sources

pub mod env;
pub mod file;
pub mod formats;
pub mod merge;

pub use formats::FileFormat;

use crate::{Config, PartialConfig, Result, Validate};
use std::path::{Path, PathBuf};

/// Configuration source for layered loading
#[derive(Debug, Clone)]
pub enum ConfigSource {
    /// Load from a file
    File(PathBuf),
    /// Load from environment variables
    Environment,
    /// Explicit layer, e.g. from command-line flags
    Overrides(PartialConfig),
}

/// Files searched by [`Config::load`], first match wins
pub const DEFAULT_PATHS: [&str; 4] = [
    ".waypoint.toml",
    ".waypoint.yml",
    ".waypoint.yaml",
    ".waypoint.json",
];

/// Builder for loading and merging configurations
///
/// Later sources take precedence:
/// defaults < file < environment < explicit overrides
///
/// # Example
///
/// ```no_run
/// use waypoint_config::loader::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .with_file(".waypoint.toml")
///     .with_env()
///     .build()?;
/// # Ok::<(), waypoint_config::error::ConfigError>(())
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    sources: Vec<ConfigSource>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.sources
            .push(ConfigSource::File(path.as_ref().to_path_buf()));
        self
    }

    pub fn with_env(mut self) -> Self {
        self.sources.push(ConfigSource::Environment);
        self
    }

    pub fn with_overrides(mut self, layer: PartialConfig) -> Self {
        self.sources.push(ConfigSource::Overrides(layer));
        self
    }

    /// Merge all sources in order and validate the result
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        for source in self.sources {
            let layer = match source {
                ConfigSource::File(path) => file::load::<PartialConfig>(&path)?,
                ConfigSource::Environment => match env::from_env()? {
                    Some(layer) => layer,
                    None => continue,
                },
                ConfigSource::Overrides(layer) => layer,
            };
            config = merge::merge(config, layer);
        }

        config.validate()?;
        Ok(config)
    }
}

/// First of [`DEFAULT_PATHS`] that exists in `dir`
pub fn find_default_file(dir: &Path) -> Option<PathBuf> {
    DEFAULT_PATHS
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

impl Config {
    /// Load from the first existing file in [`DEFAULT_PATHS`], then apply
    /// environment overrides. Defaults are used when no file exists.
    pub fn load() -> Result<Self> {
        Self::load_from_dir(Path::new("."))
    }

    /// Like [`Config::load`], searching `dir` instead of the working directory
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let mut builder = ConfigBuilder::new();

        if let Some(path) = find_default_file(dir) {
            builder = builder.with_file(path);
        }

        builder.with_env().build()
    }

    /// Load a specific file, then apply environment overrides
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        ConfigBuilder::new().with_file(path).with_env().build()
    }
}

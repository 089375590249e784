//! Configuration type definitions
//!
//! Each section is self-contained with validation and defaults.

pub mod layer;
pub mod logging;
pub mod output;
pub mod search;

pub use layer::{PartialConfig, PartialLoggingConfig, PartialOutputConfig, PartialSearchConfig};
pub use logging::{LogLevel, LoggingConfig};
pub use output::{OutputConfig, OutputFormat};
pub use search::SearchConfig;

use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Search limits and tracing
    #[serde(default)]
    pub search: SearchConfig,

    /// Result rendering
    #[serde(default)]
    pub output: OutputConfig,

    /// Log verbosity
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl crate::validation::Validate for Config {
    fn validate(&self) -> crate::error::Result<()> {
        self.search.validate()?;
        self.output.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

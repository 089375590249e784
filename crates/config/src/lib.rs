//! Configuration management for waypoint
//!
//! - Multiple formats (YAML, TOML, JSON), shared with other file loaders
//!   through [`FileFormat`]
//! - Validation with helpful error messages
//! - Layering: defaults < file < environment < explicit overrides
//!
//! # Example
//!
//! ```no_run
//! use waypoint_config::Config;
//!
//! // Load from default location (.waypoint.{toml,yml,yaml,json})
//! let config = Config::load()?;
//!
//! // Or load from specific file
//! let config = Config::from_file("path/to/config.toml")?;
//!
//! let budget = config.search.max_expansions;
//! # Ok::<(), waypoint_config::ConfigError>(())
//! ```

pub mod error;
pub mod loader;
pub mod types;
pub mod validation;

pub use error::{ConfigError, Result};
pub use loader::{ConfigBuilder, FileFormat};
pub use types::*;
pub use validation::Validate;

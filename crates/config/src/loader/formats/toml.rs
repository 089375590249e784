//! TOML format parser

use crate::{error::ConfigError, Result};
use serde::de::DeserializeOwned;

pub fn parse<T: DeserializeOwned>(content: &str) -> Result<T> {
    parse_with_path(content, None)
}

/// Parse with the file path included in errors
pub fn parse_with_path<T: DeserializeOwned>(content: &str, path: Option<&str>) -> Result<T> {
    ::toml::from_str(content).map_err(|e| ConfigError::from_toml_error(e, content, path))
}

//! Format detection and format-specific parsers

pub mod json;
pub mod toml;
pub mod yaml;

use crate::{error::ConfigError, Result};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Structured file format, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// `.yml`, `.yaml`
    Yaml,
    /// `.toml`
    Toml,
    /// `.json`
    Json,
}

impl FileFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yml") | Some("yaml") => Ok(Self::Yaml),
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            _ => Err(ConfigError::UnknownFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Deserialize `content`; `path` only decorates error messages
    pub fn parse<T: DeserializeOwned>(self, content: &str, path: Option<&str>) -> Result<T> {
        match self {
            Self::Yaml => yaml::parse_with_path(content, path),
            Self::Toml => toml::parse_with_path(content, path),
            Self::Json => json::parse_with_path(content, path),
        }
    }
}

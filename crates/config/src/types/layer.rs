//! Partial configuration layers
//!
//! Files, the environment and command-line flags each produce a
//! [`PartialConfig`]. A layer only touches the fields it sets, so a later
//! layer can put a value back to its default.

use serde::{Deserialize, Deserializer};

use super::{LogLevel, OutputFormat};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PartialConfig {
    pub search: PartialSearchConfig,
    pub output: PartialOutputConfig,
    pub logging: PartialLoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PartialSearchConfig {
    /// `Some(None)` lifts the limit (`null` in YAML or JSON)
    #[serde(deserialize_with = "present")]
    pub max_expansions: Option<Option<usize>>,
    pub trace: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PartialOutputConfig {
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PartialLoggingConfig {
    pub level: Option<LogLevel>,
}

impl PartialConfig {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Keeps an explicit `null` apart from a missing key.
fn present<'de, D>(deserializer: D) -> Result<Option<Option<usize>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<usize>::deserialize(deserializer).map(Some)
}

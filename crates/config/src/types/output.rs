//! Output configuration

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// How search results are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `Path:` followed by one `node: cost` line per step
    #[default]
    Text,
    /// A single JSON document
    Json,
}

impl OutputFormat {
    pub const OPTIONS: [&'static str; 2] = ["text", "json"];

    pub fn parse(value: &str) -> crate::error::Result<Self> {
        match value.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(crate::error::ConfigError::invalid_enum(
                "output.format",
                value,
                &Self::OPTIONS,
            )),
        }
    }
}

impl crate::validation::Validate for OutputConfig {
    fn validate(&self) -> crate::error::Result<()> {
        Ok(())
    }
}

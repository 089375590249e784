//! Reading structured files from disk

use super::formats::FileFormat;
use crate::{error::ConfigError, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Read `path` and deserialize it in the format its extension names.
///
/// The extension is checked before the file is opened.
pub fn load<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let format = FileFormat::from_path(path)?;
    let content = fs::read_to_string(path).map_err(|source| ConfigError::IoError {
        path: path.to_path_buf(),
        source,
    })?;
    format.parse(&content, path.to_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OutputFormat, PartialConfig};
    use tempfile::TempDir;

    #[test]
    fn test_load_layer() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.yaml");
        fs::write(&path, "output:\n  format: json\n").unwrap();

        let layer: PartialConfig = load(&path).unwrap();
        assert_eq!(layer.output.format, Some(OutputFormat::Json));
        assert_eq!(layer.search.trace, None);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load::<PartialConfig>("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::IoError { .. }));
    }

    #[test]
    fn test_extension_checked_before_reading() {
        let err = load::<PartialConfig>("/definitely/not/here.ini").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownFormat { .. }));
    }

    #[test]
    fn test_parse_error_names_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{\"search\": ").unwrap();

        let message = load::<PartialConfig>(&path).unwrap_err().to_string();
        assert!(message.contains("broken.json"));
    }
}

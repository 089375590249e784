//! Search configuration

use serde::{Deserialize, Serialize};

/// Search behavior configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Abort after this many expansions (unlimited when unset)
    #[serde(default)]
    pub max_expansions: Option<usize>,

    /// Print one line per expanded node
    #[serde(default)]
    pub trace: bool,
}

impl crate::validation::Validate for SearchConfig {
    fn validate(&self) -> crate::error::Result<()> {
        if let Some(limit) = self.max_expansions {
            crate::validation::validate_positive("search.max_expansions", limit, 0)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Validate;

    #[test]
    fn test_default_is_valid() {
        let config = SearchConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_expansions, None);
        assert!(!config.trace);
    }

    #[test]
    fn test_zero_budget_is_invalid() {
        let config = SearchConfig {
            max_expansions: Some(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}

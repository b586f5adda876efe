//! Extra category keywords file
//!
//! ```yaml
//! categories:
//!   - category: Marketing
//!     keywords: [hoarding, "wall painting"]
//!   - category: Rent
//!     keywords: [godown]
//! ```
//!
//! Categories are given by their UI label. Keywords join that category's
//! built-in group; they never add categories.

use serde::{Deserialize, Serialize};
use std::path::Path;
use voice_ledger_core::CategoryKeywords;

use crate::ConfigError;

/// Contents of a category keywords file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryKeywordsConfig {
    #[serde(default)]
    pub categories: Vec<CategoryKeywords>,
}

impl CategoryKeywordsConfig {
    /// Load and validate a keywords file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::ParseError(format!("Failed to read category keywords: {}", e))
        })?;
        let config = Self::from_yaml(&content)?;

        tracing::info!(
            path = %path.display(),
            categories = config.categories.len(),
            keywords = config.keyword_count(),
            "Loaded category keywords"
        );
        Ok(config)
    }

    /// Parse and validate YAML content
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content).map_err(|e| {
            ConfigError::ParseError(format!("Failed to parse category keywords: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject blank keywords
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, entry) in self.categories.iter().enumerate() {
            if let Some(j) = entry.keywords.iter().position(|k| k.trim().is_empty()) {
                return Err(ConfigError::InvalidValue {
                    field: format!("categories[{}].keywords[{}]", i, j),
                    message: format!("Empty keyword for category '{}'", entry.category),
                });
            }
        }
        Ok(())
    }

    /// Total number of keywords across categories
    pub fn keyword_count(&self) -> usize {
        self.categories.iter().map(|c| c.keywords.len()).sum()
    }
}

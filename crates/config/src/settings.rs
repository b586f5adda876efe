//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use voice_ledger_core::{CategoryKeywords, Language};

use crate::{CategoryKeywordsConfig, ConfigError};

/// Runtime environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnvironment {
    /// Development mode - missing optional files are warnings
    #[default]
    Development,
    /// Staging mode - stricter validation
    Staging,
    /// Production mode - all validations enforced
    Production,
}

impl RuntimeEnvironment {
    /// Check if strict validation should be applied
    pub fn is_strict(&self) -> bool {
        matches!(self, Self::Production | Self::Staging)
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Runtime environment (development, staging, production)
    #[serde(default)]
    pub environment: RuntimeEnvironment,

    /// Parser configuration
    #[serde(default)]
    pub parser: ParserConfig,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Parser configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ParserConfig {
    /// Language used when the caller does not name one
    #[serde(default)]
    pub default_language: Language,

    /// YAML file with extra category keywords
    #[serde(default)]
    pub category_keywords_path: Option<String>,
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub log_json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl Settings {
    /// Create default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_observability()?;
        self.validate_parser()?;
        Ok(())
    }

    fn validate_observability(&self) -> Result<(), ConfigError> {
        let level = self.observability.log_level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "observability.log_level".to_string(),
                message: format!(
                    "Unknown log level '{}', expected one of {}",
                    self.observability.log_level,
                    LOG_LEVELS.join(", ")
                ),
            });
        }
        Ok(())
    }

    fn validate_parser(&self) -> Result<(), ConfigError> {
        if let Some(path) = &self.parser.category_keywords_path {
            if path.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "parser.category_keywords_path".to_string(),
                    message: "Path must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Load the extra category keywords named by `parser.category_keywords_path`
    ///
    /// A missing file is an error in staging and production; in development
    /// it is logged and treated as no extra keywords.
    pub fn load_category_keywords(&self) -> Result<Vec<CategoryKeywords>, ConfigError> {
        let Some(path) = &self.parser.category_keywords_path else {
            return Ok(Vec::new());
        };

        match CategoryKeywordsConfig::load(path) {
            Ok(config) => Ok(config.categories),
            Err(ConfigError::FileNotFound(missing)) if !self.environment.is_strict() => {
                tracing::warn!(
                    path = %missing,
                    "Category keywords file not found, using built-in keywords only"
                );
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }
}

/// Load settings from the `config/` directory and the environment
///
/// Later sources win: `config/default`, then `config/{env}`, then
/// `VOICE_LEDGER__SECTION__KEY` environment variables.
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    load_settings_from("config", env)
}

/// Load settings from an explicit configuration directory
pub fn load_settings_from(
    config_dir: impl AsRef<Path>,
    env: Option<&str>,
) -> Result<Settings, ConfigError> {
    let config_dir = config_dir.as_ref();
    let mut builder = Config::builder();

    // Load default config
    let default_path = config_dir.join("default");
    builder = builder.add_source(File::with_name(&default_path.to_string_lossy()).required(false));

    // Load environment-specific config
    if let Some(env_name) = env {
        let env_path = config_dir.join(env_name);
        builder = builder.add_source(File::with_name(&env_path.to_string_lossy()).required(false));
    }

    // Load from environment variables
    builder = builder.add_source(
        Environment::with_prefix("VOICE_LEDGER")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    // Validate
    settings.validate()?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.environment, RuntimeEnvironment::Development);
        assert_eq!(settings.parser.default_language, Language::English);
        assert!(settings.parser.category_keywords_path.is_none());
        assert_eq!(settings.observability.log_level, "info");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_log_level_validation() {
        let mut settings = Settings::default();
        settings.observability.log_level = "verbose".to_string();
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "observability.log_level"
        ));

        settings.observability.log_level = "DEBUG".to_string();
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_empty_keywords_path_rejected() {
        let mut settings = Settings::default();
        settings.parser.category_keywords_path = Some("  ".to_string());
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_strict_environments() {
        assert!(!RuntimeEnvironment::Development.is_strict());
        assert!(RuntimeEnvironment::Staging.is_strict());
        assert!(RuntimeEnvironment::Production.is_strict());
    }

    #[test]
    fn test_load_layered_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.yaml"),
            "parser:\n  default_language: hi\nobservability:\n  log_level: warn\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("production.yaml"),
            "environment: production\nparser:\n  default_language: mr\n",
        )
        .unwrap();

        let settings = load_settings_from(dir.path(), None).unwrap();
        assert_eq!(settings.parser.default_language, Language::Hindi);
        assert_eq!(settings.observability.log_level, "warn");

        let settings = load_settings_from(dir.path(), Some("production")).unwrap();
        assert_eq!(settings.environment, RuntimeEnvironment::Production);
        assert_eq!(settings.parser.default_language, Language::Marathi);
        assert_eq!(settings.observability.log_level, "warn");
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.yaml"),
            "observability:\n  log_level: loud\n",
        )
        .unwrap();
        assert!(load_settings_from(dir.path(), None).is_err());
    }

    #[test]
    fn test_missing_keywords_file_by_environment() {
        let mut settings = Settings::default();
        settings.parser.category_keywords_path = Some("/nonexistent/keywords.yaml".to_string());
        assert!(settings.load_category_keywords().unwrap().is_empty());

        settings.environment = RuntimeEnvironment::Production;
        assert!(matches!(
            settings.load_category_keywords(),
            Err(ConfigError::FileNotFound(_))
        ));
    }
}

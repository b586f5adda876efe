//! Configuration management for the voice ledger
//!
//! Supports loading configuration from:
//! - YAML/TOML files under `config/`
//! - Environment variables (VOICE_LEDGER__ prefix)
//! - A category keyword file that extends the built-in keyword groups

pub mod category_keywords;
pub mod settings;

pub use category_keywords::CategoryKeywordsConfig;
pub use settings::{
    load_settings, load_settings_from, ObservabilityConfig, ParserConfig, RuntimeEnvironment, Settings,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

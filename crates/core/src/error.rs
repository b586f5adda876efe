//! Error types for the voice ledger crates

use thiserror::Error;

/// Core error type
///
/// Parsing a transcript never fails. These variants cover the
/// boundaries around it: turning caller-supplied strings into typed
/// values and compiling caller-supplied keyword tables.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unsupported language tag: {0}")]
    UnsupportedLanguage(String),

    #[error("Unknown category label: {0}")]
    UnknownCategory(String),

    #[error("Invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

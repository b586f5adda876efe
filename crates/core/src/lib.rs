//! Core traits and types for the voice ledger
//!
//! This crate provides the types shared by every other crate:
//! - Language definitions (English, Hindi, Marathi)
//! - The parsed command contract consumed by the UI layer
//! - The fixed category vocabulary
//! - The `CommandParser` trait
//! - Error types

pub mod command;
pub mod error;
pub mod language;
pub mod traits;

pub use command::{
    Category, CategoryKeywords, CommandParameters, Intent, Metric, ParsedCommand, Period,
    TransactionDraft, TransactionType,
};
pub use error::{Error, Result};
pub use language::Language;
pub use traits::CommandParser;

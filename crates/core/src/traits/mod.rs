//! Core traits for the voice ledger
//!
//! ```text
//! Command Parsing:
//!   - CommandParser: Transcript + language → ParsedCommand
//! ```

mod command_parser;

pub use command_parser::CommandParser;

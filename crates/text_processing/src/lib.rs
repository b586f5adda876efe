//! Voice command parsing for the voice ledger
//!
//! This crate turns a dictated transcript into a structured command:
//! - **Lexicon**: per-language word lists shared by every pattern
//! - **Normalizer**: case folding and trimming
//! - **Extractor**: ordered pattern cascade (transactions, queries, stock, analytics)
//! - **Classifier**: first-match keyword groups for transaction categories
//!
//! # Example
//!
//! ```
//! use voice_ledger_core::{Intent, Language, TransactionType};
//! use voice_ledger_text_processing::parse_command;
//!
//! let cmd = parse_command("दूध बेचा 50 रुपये में", Language::Hindi);
//! assert_eq!(cmd.intent, Intent::AddTransaction);
//! assert_eq!(cmd.transaction_type, Some(TransactionType::Income));
//! assert_eq!(cmd.amount, Some(50.0));
//! ```

pub mod classifier;
pub mod extractor;
pub mod lexicon;
pub mod normalizer;

mod parser;

pub use classifier::CategoryClassifier;
pub use extractor::{extract, Extraction, PatternFamily, CASCADE};
pub use lexicon::example_phrases;
pub use normalizer::normalize;
pub use parser::{classify, parse_command, VoiceCommandParser};

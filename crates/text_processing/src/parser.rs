//! Voice command parser
//!
//! Composes the pipeline: normalize, extract, and for transactions classify
//! the description. Parsing is total and deterministic; the parser holds only
//! read-only tables, so one instance can serve any number of threads.
//!
//! # Example
//!
//! ```
//! use voice_ledger_core::{Category, Intent, Language, TransactionType};
//! use voice_ledger_text_processing::parse_command;
//!
//! let cmd = parse_command("paid 5000 for rent", Language::English);
//! assert_eq!(cmd.intent, Intent::AddTransaction);
//! assert_eq!(cmd.transaction_type, Some(TransactionType::Expense));
//! assert_eq!(cmd.amount, Some(5000.0));
//! assert_eq!(cmd.category, Some(Category::Rent));
//! ```

use once_cell::sync::Lazy;
use voice_ledger_core::{
    Category, CategoryKeywords, CommandParameters, CommandParser, Intent, Language, ParsedCommand,
    Result, TransactionType,
};

use crate::classifier::CategoryClassifier;
use crate::extractor::{self, Extraction};
use crate::normalizer::normalize;

/// Parser built from the lexicon plus optional caller keywords
#[derive(Debug, Default)]
pub struct VoiceCommandParser {
    classifier: CategoryClassifier,
}

impl VoiceCommandParser {
    /// Parser using the built-in tables only
    pub fn new() -> Self {
        Self::default()
    }

    /// Parser whose classifier also knows previously seen category keywords
    pub fn with_category_keywords(extra: &[CategoryKeywords]) -> Result<Self> {
        Ok(Self {
            classifier: CategoryClassifier::with_extra_keywords(extra)?,
        })
    }

    /// Parse one transcript
    pub fn parse(&self, transcript: &str, language: Language) -> ParsedCommand {
        let normalized = normalize(transcript);

        match extractor::extract(&normalized, language) {
            Extraction::Transaction {
                transaction_type,
                amount,
                description,
                ..
            } => {
                let category = self.classifier.classify(&description, transaction_type);
                let mut command = ParsedCommand::transaction(
                    transcript,
                    language,
                    transaction_type,
                    amount,
                    description,
                );
                command.category = Some(category);
                command
            }
            Extraction::Query { period, metric } => ParsedCommand::with_intent(
                transcript,
                language,
                Intent::QueryData,
                Some(CommandParameters::Query { period, metric }),
            ),
            Extraction::Stock { product } => ParsedCommand::with_intent(
                transcript,
                language,
                Intent::CheckStock,
                Some(CommandParameters::Stock { product }),
            ),
            Extraction::Analytics => {
                ParsedCommand::with_intent(transcript, language, Intent::ShowAnalytics, None)
            }
            Extraction::NoMatch => ParsedCommand::none(transcript, language),
        }
    }

    /// Classify a description directly
    pub fn classify(&self, description: &str, transaction_type: TransactionType) -> Category {
        self.classifier.classify(description, transaction_type)
    }
}

impl CommandParser for VoiceCommandParser {
    fn parse(&self, transcript: &str, language: Language) -> ParsedCommand {
        VoiceCommandParser::parse(self, transcript, language)
    }
}

static DEFAULT_PARSER: Lazy<VoiceCommandParser> = Lazy::new(VoiceCommandParser::new);

/// Parse a transcript with the built-in tables
pub fn parse_command(transcript: &str, language: Language) -> ParsedCommand {
    DEFAULT_PARSER.parse(transcript, language)
}

/// Classify a description with the built-in keyword groups
pub fn classify(description: &str, transaction_type: TransactionType) -> Category {
    DEFAULT_PARSER.classify(description, transaction_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use voice_ledger_core::{Metric, Period};

    #[test]
    fn test_transaction_gets_category() {
        let cmd = parse_command("50 rupees milk", Language::English);
        assert_eq!(cmd.intent, Intent::AddTransaction);
        assert_eq!(cmd.transaction_type, Some(TransactionType::Expense));
        assert_eq!(cmd.amount, Some(50.0));
        assert_eq!(cmd.description.as_deref(), Some("milk"));
        assert_eq!(cmd.category, Some(Category::InventoryPurchase));
        assert_eq!(cmd.raw_text, "50 rupees milk");
    }

    #[test]
    fn test_non_transactions_have_no_category() {
        let cmd = parse_command("show today's sales", Language::English);
        assert_eq!(cmd.intent, Intent::QueryData);
        assert_eq!(cmd.category, None);
        assert_eq!(cmd.amount, None);
        assert_eq!(
            cmd.parameters,
            Some(CommandParameters::Query {
                period: Some(Period::Today),
                metric: Metric::Sales
            })
        );
    }

    #[test]
    fn test_raw_text_is_untouched() {
        let cmd = parse_command("  Paid 5000 for Rent.  ", Language::English);
        assert_eq!(cmd.raw_text, "  Paid 5000 for Rent.  ");
        assert_eq!(cmd.description.as_deref(), Some("rent"));
    }

    #[test]
    fn test_partial_extraction_uses_default_category() {
        let cmd = parse_command("add expense 300", Language::English);
        assert_eq!(cmd.intent, Intent::AddTransaction);
        assert_eq!(cmd.description.as_deref(), Some(""));
        assert_eq!(cmd.category, Some(Category::OtherExpenses));
    }

    #[test]
    fn test_custom_keywords() {
        let parser = VoiceCommandParser::with_category_keywords(&[CategoryKeywords {
            category: Category::Marketing,
            keywords: vec!["hoarding".to_string()],
        }])
        .unwrap();
        let cmd = parser.parse("spent 900 on hoarding", Language::English);
        assert_eq!(cmd.category, Some(Category::Marketing));

        let cmd = parse_command("spent 900 on hoarding", Language::English);
        assert_eq!(cmd.category, Some(Category::OtherExpenses));
    }

    #[test]
    fn test_trait_object() {
        let parser: Box<dyn CommandParser> = Box::new(VoiceCommandParser::new());
        assert!(parser.supports_language(Language::Marathi));
        let cmd = parser.parse("xyz", Language::English);
        assert!(!cmd.is_understood());
    }
}

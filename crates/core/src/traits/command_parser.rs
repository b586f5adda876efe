//! Command parsing trait

use crate::{Language, ParsedCommand};

/// Voice command parser interface
///
/// Implementations must be pure: the same `(transcript, language)` always
/// yields the same command, and parsing never fails. An unrecognized
/// transcript is reported as `Intent::None`.
///
/// # Example
///
/// ```ignore
/// let parser: Box<dyn CommandParser> = Box::new(VoiceCommandParser::default());
/// let command = parser.parse("50 rupees milk", Language::English);
/// assert_eq!(command.amount, Some(50.0));
/// ```
pub trait CommandParser: Send + Sync {
    /// Parse a single transcript
    fn parse(&self, transcript: &str, language: Language) -> ParsedCommand;

    /// Languages this parser has pattern tables for
    fn supported_languages(&self) -> &[Language] {
        &Language::ALL
    }

    /// Check if a specific language is supported
    fn supports_language(&self, language: Language) -> bool {
        self.supported_languages().contains(&language)
    }
}

//! Language definitions for voice commands
//!
//! The parser understands English plus two Devanagari-script Indian
//! languages. The language tag always comes from the caller (the UI knows
//! which recognizer locale produced the transcript); it is never inferred
//! from the text.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Supported command languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "hi")]
    Hindi,
    #[serde(rename = "mr")]
    Marathi,
}

impl Language {
    /// All supported languages, in display order
    pub const ALL: [Language; 3] = [Language::English, Language::Hindi, Language::Marathi];

    /// Get ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Hindi => "hi",
            Self::Marathi => "mr",
        }
    }

    /// Parse from ISO code (case-insensitive, tolerates locale suffixes like `hi-IN`)
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code.split(['-', '_']).next().unwrap_or(code);
        match primary.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Self::English),
            "hi" => Some(Self::Hindi),
            "mr" => Some(Self::Marathi),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| Error::UnsupportedLanguage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::English.code(), "en");
        assert_eq!(Language::Hindi.code(), "hi");
        assert_eq!(Language::Marathi.code(), "mr");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("hi".parse::<Language>().unwrap(), Language::Hindi);
        assert_eq!("MR".parse::<Language>().unwrap(), Language::Marathi);
        assert_eq!("en-IN".parse::<Language>().unwrap(), Language::English);
        assert!(matches!(
            "ta".parse::<Language>(),
            Err(Error::UnsupportedLanguage(tag)) if tag == "ta"
        ));
    }

    #[test]
    fn test_all_languages_round_trip_codes() {
        for language in Language::ALL {
            assert_eq!(language.code().parse::<Language>().unwrap(), language);
        }
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&Language::Marathi).unwrap();
        assert_eq!(json, "\"mr\"");
        let lang: Language = serde_json::from_str("\"hi\"").unwrap();
        assert_eq!(lang, Language::Hindi);
    }
}

//! Transcript normalization
//!
//! Only case and surrounding whitespace are touched. Punctuation, scripts
//! and internal spacing are left for the pattern tables to tolerate.

/// Normalize a transcript for matching
///
/// Lower-cases and trims. Total and deterministic: every string, including
/// the empty string, has a normal form.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Clean a captured description or product phrase
///
/// Trims whitespace and trailing sentence punctuation left over from
/// dictation ("milk." → "milk", "दूध।" → "दूध").
pub fn clean_phrase(phrase: &str) -> String {
    phrase
        .trim()
        .trim_end_matches(|c: char| matches!(c, '.' | ',' | '!' | '?' | '।') || c.is_whitespace())
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_trims() {
        assert_eq!(normalize("  50 Rupees Milk  "), "50 rupees milk");
        assert_eq!(normalize("SHOW Today's SALES"), "show today's sales");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_normalize_keeps_punctuation_and_spacing() {
        assert_eq!(normalize("Paid  5000, for rent!"), "paid  5000, for rent!");
    }

    #[test]
    fn test_normalize_leaves_devanagari_untouched() {
        assert_eq!(normalize(" 50 रुपये दूध खरीदा "), "50 रुपये दूध खरीदा");
    }

    #[test]
    fn test_clean_phrase() {
        assert_eq!(clean_phrase(" milk. "), "milk");
        assert_eq!(clean_phrase("दूध।"), "दूध");
        assert_eq!(clean_phrase("rent ?!"), "rent");
        assert_eq!(clean_phrase(""), "");
    }
}

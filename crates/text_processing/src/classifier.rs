//! Category Classifier
//!
//! Assigns one category label to a transaction description. Keyword groups
//! are checked in declaration order and the first group with a whole-word
//! hit wins; when nothing matches the type's "Other" bucket is returned.
//!
//! # Example
//!
//! ```
//! use voice_ledger_core::{Category, TransactionType};
//! use voice_ledger_text_processing::classifier::CategoryClassifier;
//!
//! let classifier = CategoryClassifier::new();
//! assert_eq!(classifier.classify("shop rent", TransactionType::Expense), Category::Rent);
//! assert_eq!(classifier.classify("gift", TransactionType::Income), Category::OtherIncome);
//! ```

use regex::Regex;
use voice_ledger_core::{Category, CategoryKeywords, Error, Result, TransactionType};

use crate::lexicon;
use crate::normalizer::normalize;

/// One compiled keyword group
#[derive(Debug)]
struct CategoryRule {
    category: Category,
    regex: Regex,
}

/// Keyword-group classifier, immutable once built
#[derive(Debug)]
pub struct CategoryClassifier {
    income: Vec<CategoryRule>,
    expense: Vec<CategoryRule>,
}

impl CategoryClassifier {
    /// Classifier over the built-in keyword groups
    pub fn new() -> Self {
        match Self::with_extra_keywords(&[]) {
            Ok(classifier) => classifier,
            Err(e) => panic!("Built-in category keywords failed to compile: {}", e),
        }
    }

    /// Classifier whose groups are extended with caller-supplied keywords
    ///
    /// Extra keywords join the group of their category, so group order is
    /// unchanged. Keywords for the "Other" buckets have no group to join and
    /// are skipped.
    pub fn with_extra_keywords(extra: &[CategoryKeywords]) -> Result<Self> {
        let extra = usable_keywords(extra);
        Ok(Self {
            income: compile_groups(TransactionType::Income, &extra)?,
            expense: compile_groups(TransactionType::Expense, &extra)?,
        })
    }

    /// Pick the category for a description
    pub fn classify(&self, description: &str, transaction_type: TransactionType) -> Category {
        let description = normalize(description);
        let rules = match transaction_type {
            TransactionType::Income => &self.income,
            TransactionType::Expense => &self.expense,
        };

        rules
            .iter()
            .find(|rule| rule.regex.is_match(&description))
            .map(|rule| rule.category)
            .unwrap_or_else(|| transaction_type.default_category())
    }
}

impl Default for CategoryClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Drop entries for the fallback buckets, warning once per entry
fn usable_keywords(extra: &[CategoryKeywords]) -> Vec<&CategoryKeywords> {
    extra
        .iter()
        .filter(|entry| {
            if entry.category.is_default() {
                tracing::warn!(
                    category = %entry.category,
                    "Ignoring extra keywords for a fallback category"
                );
                false
            } else {
                true
            }
        })
        .collect()
}

fn compile_groups(
    transaction_type: TransactionType,
    extra: &[&CategoryKeywords],
) -> Result<Vec<CategoryRule>> {
    lexicon::category_groups(transaction_type)
        .iter()
        .map(|(category, builtin)| -> Result<CategoryRule> {
            let mut words: Vec<String> = builtin.iter().map(|w| w.to_string()).collect();
            for entry in extra.iter().filter(|e| e.category == *category) {
                for keyword in &entry.keywords {
                    let keyword = normalize(keyword);
                    if keyword.is_empty() {
                        tracing::warn!(category = %category, "Skipping empty category keyword");
                    } else if !words.contains(&keyword) {
                        words.push(keyword);
                    }
                }
            }

            let pattern = lexicon::whole_word_pattern(&words);
            let regex = Regex::new(&pattern).map_err(|e| Error::InvalidPattern {
                pattern: category.label().to_string(),
                message: e.to_string(),
            })?;
            Ok(CategoryRule {
                category: *category,
                regex,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_buckets() {
        let classifier = CategoryClassifier::new();
        assert_eq!(
            classifier.classify("birthday gift", TransactionType::Income),
            Category::OtherIncome
        );
        assert_eq!(
            classifier.classify("birthday gift", TransactionType::Expense),
            Category::OtherExpenses
        );
        assert_eq!(classifier.classify("", TransactionType::Expense), Category::OtherExpenses);
    }

    #[test]
    fn test_first_declared_group_wins() {
        let classifier = CategoryClassifier::new();
        // Rent is declared before Utilities, Utilities before Inventory Purchase
        assert_eq!(
            classifier.classify("electricity and rent", TransactionType::Expense),
            Category::Rent
        );
        assert_eq!(
            classifier.classify("milk and electricity bill", TransactionType::Expense),
            Category::Utilities
        );
    }

    #[test]
    fn test_type_selects_group_list() {
        let classifier = CategoryClassifier::new();
        assert_eq!(
            classifier.classify("phone repair", TransactionType::Income),
            Category::ServiceIncome
        );
        assert_eq!(
            classifier.classify("phone repair", TransactionType::Expense),
            Category::Utilities
        );
    }

    #[test]
    fn test_multilingual_keywords() {
        let classifier = CategoryClassifier::new();
        assert_eq!(
            classifier.classify("दूध", TransactionType::Expense),
            Category::InventoryPurchase
        );
        assert_eq!(classifier.classify("भाडे", TransactionType::Expense), Category::Rent);
        assert_eq!(
            classifier.classify("किराये", TransactionType::Expense),
            Category::Rent
        );
        assert_eq!(
            classifier.classify("ब्याज", TransactionType::Income),
            Category::InvestmentIncome
        );
    }

    #[test]
    fn test_case_and_word_boundaries() {
        let classifier = CategoryClassifier::new();
        assert_eq!(classifier.classify("RENT", TransactionType::Expense), Category::Rent);
        // "parent" must not hit "rent"
        assert_eq!(
            classifier.classify("parent", TransactionType::Expense),
            Category::OtherExpenses
        );
    }

    #[test]
    fn test_extra_keywords_extend_groups() {
        let extra = vec![
            CategoryKeywords {
                category: Category::Marketing,
                keywords: vec!["Hoarding".to_string(), "  ".to_string()],
            },
            CategoryKeywords {
                category: Category::OtherExpenses,
                keywords: vec!["misc".to_string()],
            },
        ];
        let classifier = CategoryClassifier::with_extra_keywords(&extra).unwrap();
        assert_eq!(
            classifier.classify("new hoarding", TransactionType::Expense),
            Category::Marketing
        );
        assert_eq!(
            classifier.classify("misc", TransactionType::Expense),
            Category::OtherExpenses
        );
        // Rent still precedes the extended Marketing group
        assert_eq!(
            classifier.classify("hoarding rent", TransactionType::Expense),
            Category::Rent
        );
    }

    #[test]
    fn test_fallback_entries_filtered_before_compiling() {
        let extra = vec![
            CategoryKeywords {
                category: Category::OtherIncome,
                keywords: vec!["gift".to_string()],
            },
            CategoryKeywords {
                category: Category::Rent,
                keywords: vec!["godown".to_string()],
            },
            CategoryKeywords {
                category: Category::OtherExpenses,
                keywords: vec!["misc".to_string()],
            },
        ];
        let usable = usable_keywords(&extra);
        assert_eq!(usable.len(), 1);
        assert_eq!(usable[0].category, Category::Rent);

        let classifier = CategoryClassifier::with_extra_keywords(&extra).unwrap();
        assert_eq!(
            classifier.classify("godown", TransactionType::Expense),
            Category::Rent
        );
        assert_eq!(
            classifier.classify("gift", TransactionType::Income),
            Category::OtherIncome
        );
    }

    #[test]
    fn test_extra_keywords_are_literal() {
        let extra = vec![CategoryKeywords {
            category: Category::Maintenance,
            keywords: vec!["a.c. service".to_string()],
        }];
        let classifier = CategoryClassifier::with_extra_keywords(&extra).unwrap();
        assert_eq!(
            classifier.classify("a.c. service", TransactionType::Expense),
            Category::Maintenance
        );
        assert_eq!(
            classifier.classify("abcd service", TransactionType::Expense),
            Category::OtherExpenses
        );
    }
}

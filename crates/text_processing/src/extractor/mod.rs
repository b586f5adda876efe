//! Command Extractor
//!
//! Runs the pattern families for a language in one declared order and
//! returns what the first matching family found. Extraction never fails;
//! a transcript nothing recognizes is [`Extraction::NoMatch`].
//!
//! # Precedence
//!
//! [`CASCADE`] is the single source of cross-family precedence. The
//! amount-first family runs before the verb-led ones, so anything that
//! starts with a number is a transaction even when it also reads like a
//! stock check ("50 rupees stock check").

pub mod amount;
pub mod patterns;

use voice_ledger_core::{Intent, Language, Metric, Period, TransactionType};

pub use amount::parse_amount;
pub use patterns::{table, PatternTable, TransactionMatch};

/// A family of patterns tried as one step of the cascade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternFamily {
    /// `[currency] <number> [currency] <free text>`, type decided by keyword voting
    SimpleAmount,
    /// Verb-led income templates
    IncomeVerb,
    /// Verb-led expense templates
    ExpenseVerb,
    /// Period and metric questions
    Query,
    /// Inventory questions about one product
    StockCheck,
    /// "show" plus "dashboard" anywhere in the text
    Analytics,
}

impl PatternFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SimpleAmount => "simple_amount",
            Self::IncomeVerb => "income_verb",
            Self::ExpenseVerb => "expense_verb",
            Self::Query => "query",
            Self::StockCheck => "stock_check",
            Self::Analytics => "analytics",
        }
    }
}

/// Order in which pattern families are tried; first match wins
pub const CASCADE: [PatternFamily; 6] = [
    PatternFamily::SimpleAmount,
    PatternFamily::IncomeVerb,
    PatternFamily::ExpenseVerb,
    PatternFamily::Query,
    PatternFamily::StockCheck,
    PatternFamily::Analytics,
];

/// What the cascade found in a normalized transcript
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    Transaction {
        transaction_type: TransactionType,
        amount: f64,
        description: String,
        /// Name of the template that matched
        pattern: &'static str,
    },
    Query {
        period: Option<Period>,
        metric: Metric,
    },
    Stock {
        product: String,
    },
    Analytics,
    NoMatch,
}

impl Extraction {
    /// Intent this extraction maps to
    pub fn intent(&self) -> Intent {
        match self {
            Self::Transaction { .. } => Intent::AddTransaction,
            Self::Query { .. } => Intent::QueryData,
            Self::Stock { .. } => Intent::CheckStock,
            Self::Analytics => Intent::ShowAnalytics,
            Self::NoMatch => Intent::None,
        }
    }

    /// Name of the transaction template that matched, if any
    pub fn pattern(&self) -> Option<&'static str> {
        match self {
            Self::Transaction { pattern, .. } => Some(*pattern),
            _ => None,
        }
    }
}

/// Run the full cascade over already-normalized text
pub fn extract(normalized: &str, language: Language) -> Extraction {
    for family in CASCADE {
        if let Some(extraction) = match_family(family, normalized, language) {
            tracing::debug!(
                language = %language,
                family = family.as_str(),
                pattern = extraction.pattern().unwrap_or_default(),
                intent = ?extraction.intent(),
                "Voice command matched"
            );
            return extraction;
        }
    }

    tracing::trace!(language = %language, "No pattern family matched");
    Extraction::NoMatch
}

/// Try a single family, in its own declared pattern order
pub fn match_family(
    family: PatternFamily,
    normalized: &str,
    language: Language,
) -> Option<Extraction> {
    let table = table(language);

    match family {
        PatternFamily::SimpleAmount => {
            let found = table.simple.extract(normalized)?;
            let transaction_type = if table.has_income_keyword(&found.description) {
                TransactionType::Income
            } else {
                TransactionType::Expense
            };
            Some(Extraction::Transaction {
                transaction_type,
                amount: found.amount,
                description: found.description,
                pattern: table.simple.name,
            })
        }
        PatternFamily::IncomeVerb => first_transaction(&table.income, normalized),
        PatternFamily::ExpenseVerb => first_transaction(&table.expense, normalized),
        PatternFamily::Query => table.query.iter().find_map(|pattern| {
            pattern
                .extract(normalized)
                .map(|(period, metric)| Extraction::Query { period, metric })
        }),
        PatternFamily::StockCheck => table.stock.iter().find_map(|pattern| {
            pattern
                .extract(normalized)
                .map(|product| Extraction::Stock { product })
        }),
        PatternFamily::Analytics => table
            .analytics
            .is_match(normalized)
            .then_some(Extraction::Analytics),
    }
}

fn first_transaction(
    candidates: &[patterns::TransactionPattern],
    normalized: &str,
) -> Option<Extraction> {
    candidates.iter().find_map(|pattern| {
        let found = pattern.extract(normalized)?;
        Some(Extraction::Transaction {
            transaction_type: pattern.implied_type?,
            amount: found.amount,
            description: found.description,
            pattern: pattern.name,
        })
    })
}

//! Parsed voice command types
//!
//! `ParsedCommand` is the contract handed to the UI layer. It is built fresh
//! for every transcript and carries no identity beyond the call.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Error, Language};

/// What the transcript asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intent {
    /// Record an income or expense
    AddTransaction,
    /// Ask for a figure over a period ("show today's sales")
    QueryData,
    /// Open the analytics dashboard
    ShowAnalytics,
    /// Ask about inventory for a product
    CheckStock,
    /// Nothing recognized
    None,
}

/// Direction of money flow for a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    /// Category used when no keyword group matches
    pub fn default_category(&self) -> Category {
        match self {
            Self::Income => Category::OtherIncome,
            Self::Expense => Category::OtherExpenses,
        }
    }
}

/// Transaction category
///
/// Labels must stay in lockstep with the category selector offered by the
/// UI; `label()` is the exact string it expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    // Income
    SalesRevenue,
    ServiceIncome,
    InvestmentIncome,
    OtherIncome,
    // Expense
    Rent,
    Utilities,
    Salaries,
    Transportation,
    Marketing,
    Maintenance,
    InventoryPurchase,
    OtherExpenses,
}

impl Category {
    /// Every category, income first
    pub const ALL: [Category; 12] = [
        Category::SalesRevenue,
        Category::ServiceIncome,
        Category::InvestmentIncome,
        Category::OtherIncome,
        Category::Rent,
        Category::Utilities,
        Category::Salaries,
        Category::Transportation,
        Category::Marketing,
        Category::Maintenance,
        Category::InventoryPurchase,
        Category::OtherExpenses,
    ];

    /// UI label for this category
    pub fn label(&self) -> &'static str {
        match self {
            Self::SalesRevenue => "Sales Revenue",
            Self::ServiceIncome => "Service Income",
            Self::InvestmentIncome => "Investment Income",
            Self::OtherIncome => "Other Income",
            Self::Rent => "Rent",
            Self::Utilities => "Utilities",
            Self::Salaries => "Salaries",
            Self::Transportation => "Transportation",
            Self::Marketing => "Marketing",
            Self::Maintenance => "Maintenance",
            Self::InventoryPurchase => "Inventory Purchase",
            Self::OtherExpenses => "Other Expenses",
        }
    }

    /// Look up a category by its UI label (exact, case-insensitive)
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(label))
    }

    /// Which transaction type this category belongs to
    pub fn transaction_type(&self) -> TransactionType {
        match self {
            Self::SalesRevenue | Self::ServiceIncome | Self::InvestmentIncome | Self::OtherIncome => {
                TransactionType::Income
            }
            _ => TransactionType::Expense,
        }
    }

    /// Whether this is one of the per-type fallback buckets
    pub fn is_default(&self) -> bool {
        matches!(self, Self::OtherIncome | Self::OtherExpenses)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}

impl Serialize for Category {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Self::from_label(&label)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown category: {}", label)))
    }
}

/// Reporting period for data queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Today,
    Yesterday,
    Week,
    Month,
    Year,
}

/// Figure requested by a data query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Sales,
    Income,
    Expenses,
    Profit,
    Balance,
    Transactions,
}

/// Parameters for non-transaction intents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CommandParameters {
    Query {
        #[serde(skip_serializing_if = "Option::is_none")]
        period: Option<Period>,
        metric: Metric,
    },
    Stock {
        product: String,
    },
}

/// Structured result of parsing one transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedCommand {
    /// Transcript exactly as received
    pub raw_text: String,
    pub intent: Intent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<TransactionType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// Empty string means a pattern matched but captured no description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<CommandParameters>,
    pub language: Language,
}

impl ParsedCommand {
    /// Command that matched nothing
    pub fn none(raw_text: impl Into<String>, language: Language) -> Self {
        Self {
            raw_text: raw_text.into(),
            intent: Intent::None,
            transaction_type: None,
            amount: None,
            description: None,
            category: None,
            parameters: None,
            language,
        }
    }

    /// Transaction command, category still unassigned
    pub fn transaction(
        raw_text: impl Into<String>,
        language: Language,
        transaction_type: TransactionType,
        amount: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            intent: Intent::AddTransaction,
            transaction_type: Some(transaction_type),
            amount: Some(amount),
            description: Some(description.into()),
            ..Self::none(raw_text, language)
        }
    }

    /// Non-transaction command carrying parameters
    pub fn with_intent(
        raw_text: impl Into<String>,
        language: Language,
        intent: Intent,
        parameters: Option<CommandParameters>,
    ) -> Self {
        Self {
            intent,
            parameters,
            ..Self::none(raw_text, language)
        }
    }

    /// Whether any intent was recognized
    pub fn is_understood(&self) -> bool {
        self.intent != Intent::None
    }

    /// The transaction record to persist, if this is an add-transaction command
    pub fn to_draft(&self) -> Option<TransactionDraft> {
        if self.intent != Intent::AddTransaction {
            return None;
        }
        let transaction_type = self.transaction_type?;
        Some(TransactionDraft {
            transaction_type,
            amount: self.amount?,
            description: self.description.clone().unwrap_or_default(),
            category: self
                .category
                .unwrap_or_else(|| transaction_type.default_category()),
        })
    }
}

/// Transaction fields the caller turns into a stored record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDraft {
    pub transaction_type: TransactionType,
    pub amount: f64,
    pub description: String,
    pub category: Category,
}

/// Extra keywords for one category, supplied by the caller
///
/// Typically collected from categories the user has already assigned to
/// past transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryKeywords {
    pub category: Category,
    #[serde(default)]
    pub keywords: Vec<String>,
}

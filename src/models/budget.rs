//! Budget model
//!
//! A budget is a named spending ceiling with an ordered list of expenses.
//! Two budgets are synthetic: "Uncategorized" collects expenses that were not
//! filed anywhere else, and "Total" keeps a shadow copy of every expense ever
//! added. Both exist for the whole life of a store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::expense::Expense;
use super::ids::{BudgetId, ExpenseId};
use super::money::Money;

/// Reserved name of the catch-all budget
pub const UNCATEGORIZED_BUDGET_NAME: &str = "Uncategorized";

/// Reserved name of the aggregate budget
pub const TOTAL_BUDGET_NAME: &str = "Total";

/// Reserved names, in the order the sentinels are kept at the end of the list
pub const RESERVED_BUDGET_NAMES: [&str; 2] = [UNCATEGORIZED_BUDGET_NAME, TOTAL_BUDGET_NAME];

/// Distinguishes the two sentinel budgets from user-created ones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CardVariant {
    Uncategorized,
    Total,
    #[default]
    Regular,
}

impl CardVariant {
    /// Whether this is one of the two always-present budgets
    pub fn is_sentinel(&self) -> bool {
        !matches!(self, Self::Regular)
    }
}

impl fmt::Display for CardVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uncategorized => write!(f, "uncategorized"),
            Self::Total => write!(f, "total"),
            Self::Regular => write!(f, "regular"),
        }
    }
}

/// A budget and its expenses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    /// Unique identifier
    pub id: BudgetId,

    /// Display name
    pub name: String,

    /// Spending ceiling; always zero for the sentinels
    pub limit: Money,

    /// Expenses in insertion (display) order
    #[serde(default)]
    pub expenses: Vec<Expense>,

    /// Which kind of card this budget is
    pub card_variant: CardVariant,

    /// When the budget was created
    pub created_at: DateTime<Utc>,
}

impl Budget {
    /// Create a new user budget
    pub fn new(name: impl Into<String>, limit: Money) -> Self {
        Self::with_variant(name, limit, CardVariant::Regular)
    }

    /// Create the "Uncategorized" sentinel
    pub fn uncategorized() -> Self {
        Self::with_variant(UNCATEGORIZED_BUDGET_NAME, Money::zero(), CardVariant::Uncategorized)
    }

    /// Create the "Total" sentinel
    pub fn total() -> Self {
        Self::with_variant(TOTAL_BUDGET_NAME, Money::zero(), CardVariant::Total)
    }

    fn with_variant(name: impl Into<String>, limit: Money, card_variant: CardVariant) -> Self {
        Self {
            id: BudgetId::new(),
            name: name.into(),
            limit,
            expenses: Vec::new(),
            card_variant,
            created_at: Utc::now(),
        }
    }

    /// Whether the name is one of the reserved sentinel names
    pub fn has_reserved_name(&self) -> bool {
        RESERVED_BUDGET_NAMES.contains(&self.name.as_str())
    }

    /// Sum of all expense amounts
    pub fn spent(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Look up an expense by id
    pub fn expense(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

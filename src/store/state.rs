//! Budget state
//!
//! The canonical list of budgets. A fresh state holds only the two sentinel
//! budgets; afterwards it is only ever replaced by the reducer, which keeps
//! the sentinels present and at the end of the list.

use serde::Serialize;

use crate::models::{Budget, BudgetId, CardVariant, Money};

/// The full store state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetState {
    budgets: Vec<Budget>,
}

impl BudgetState {
    /// Initial state: `[Uncategorized, Total]`
    pub fn new() -> Self {
        Self {
            budgets: vec![Budget::uncategorized(), Budget::total()],
        }
    }

    pub(super) fn from_budgets(budgets: Vec<Budget>) -> Self {
        Self { budgets }
    }

    /// All budgets in display order
    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    /// Budgets created by the user, in display order
    pub fn user_budgets(&self) -> impl Iterator<Item = &Budget> {
        self.budgets
            .iter()
            .filter(|b| b.card_variant == CardVariant::Regular)
    }

    /// Get a budget by id
    pub fn get(&self, id: BudgetId) -> Option<&Budget> {
        self.budgets.iter().find(|b| b.id == id)
    }

    /// The catch-all sentinel budget
    pub fn uncategorized(&self) -> Option<&Budget> {
        self.by_variant(CardVariant::Uncategorized)
    }

    /// The aggregate sentinel budget
    pub fn total(&self) -> Option<&Budget> {
        self.by_variant(CardVariant::Total)
    }

    fn by_variant(&self, variant: CardVariant) -> Option<&Budget> {
        self.budgets.iter().find(|b| b.card_variant == variant)
    }

    /// Find a budget by name (case-insensitive) or by id
    ///
    /// Sentinels win a name tie, so "total" always means the Total budget.
    pub fn find(&self, identifier: &str) -> Option<&Budget> {
        let identifier = identifier.trim();
        let by_name = |sentinel: bool| {
            self.budgets.iter().find(|b| {
                b.card_variant.is_sentinel() == sentinel && b.name.eq_ignore_ascii_case(identifier)
            })
        };

        by_name(true)
            .or_else(|| by_name(false))
            .or_else(|| self.budgets.iter().find(|b| b.id.matches(identifier)))
    }

    /// Sum of every budget's limit plus what was spent uncategorized
    ///
    /// This is the ceiling shown on the Total card.
    pub fn combined_limit(&self) -> Money {
        let limits: Money = self.budgets.iter().map(|b| b.limit).sum();
        limits + self.uncategorized().map(Budget::spent).unwrap_or_default()
    }

    /// Spending summed over every budget except Total
    ///
    /// Differs from `total().spent()` once an expense has been deleted from
    /// its budget, because the Total ledger keeps its copy.
    pub fn derived_total(&self) -> Money {
        self.budgets
            .iter()
            .filter(|b| b.card_variant != CardVariant::Total)
            .map(Budget::spent)
            .sum()
    }

    /// Number of expenses across all budgets, Total ledger included
    pub fn expense_count(&self) -> usize {
        self.budgets.iter().map(|b| b.expenses.len()).sum()
    }
}

impl Default for BudgetState {
    fn default() -> Self {
        Self::new()
    }
}

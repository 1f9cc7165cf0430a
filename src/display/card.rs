//! Budget card aggregates
//!
//! What a card shows for one budget: how much was spent, the ceiling it is
//! measured against, and the resulting progress.

use crate::models::{Budget, BudgetId, CardVariant, Money};
use crate::store::BudgetState;

/// Aggregates for one budget card
#[derive(Debug, Clone, PartialEq)]
pub struct CardSummary {
    pub id: BudgetId,
    pub name: String,
    pub variant: CardVariant,
    pub expense_count: usize,
    pub spent: Money,
    /// `None` for Uncategorized, which has no ceiling
    pub ceiling: Option<Money>,
    /// Spent as a percentage of the ceiling; `None` when there is no ceiling
    pub progress: Option<f64>,
}

impl CardSummary {
    /// Summarise `budget` within `state`
    ///
    /// Regular cards measure against their own limit, the Total card against
    /// the combined limit of the whole state.
    pub fn for_budget(budget: &Budget, state: &BudgetState) -> Self {
        let spent = budget.spent();
        let ceiling = match budget.card_variant {
            CardVariant::Regular => Some(budget.limit),
            CardVariant::Total => Some(state.combined_limit()),
            CardVariant::Uncategorized => None,
        };

        Self {
            id: budget.id,
            name: budget.name.clone(),
            variant: budget.card_variant,
            expense_count: budget.expenses.len(),
            spent,
            ceiling,
            progress: ceiling.map(|c| spent.percent_of(c)),
        }
    }

    /// Whether spending has passed the ceiling
    pub fn is_over(&self) -> bool {
        self.ceiling.is_some_and(|c| self.spent > c)
    }

    /// Progress clamped to `0.0..=1.0`, for gauges
    pub fn ratio(&self) -> f64 {
        self.progress.map_or(0.0, |p| (p / 100.0).clamp(0.0, 1.0))
    }
}

/// One summary per budget, in display order
pub fn card_summaries(state: &BudgetState) -> Vec<CardSummary> {
    state
        .budgets()
        .iter()
        .map(|b| CardSummary::for_budget(b, state))
        .collect()
}

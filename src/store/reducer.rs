//! The budget reducer
//!
//! `reduce` is the only way a [`BudgetState`] changes: it takes the current
//! state and one action and returns the next state. It never mutates its
//! input and never touches the outside world. Ids that match nothing make the
//! transition a no-op rather than an error.

use std::iter;

use crate::models::{Budget, CardVariant, Expense, Money};

use super::action::{AddBudget, AddExpense, BudgetAction, DeleteBudget, DeleteExpense};
use super::state::BudgetState;

/// Compute the state that follows `action`
pub fn reduce(state: &BudgetState, action: &BudgetAction) -> BudgetState {
    match action {
        BudgetAction::AddBudget(payload) => add_budget(state, payload),
        BudgetAction::DeleteBudget(payload) => delete_budget(state, payload),
        BudgetAction::AddExpense(payload) => add_expense(state, payload),
        BudgetAction::DeleteExpense(payload) => delete_expense(state, payload),
    }
}

/// New user budgets go after every existing user budget and before the
/// reserved ones, so the sentinels always close the list.
fn add_budget(state: &BudgetState, AddBudget { name, limit }: &AddBudget) -> BudgetState {
    // Unparseable limits coerce to zero; validation normally rejects them first.
    let limit = Money::parse(limit).unwrap_or_default();

    let (defaults, customs): (Vec<&Budget>, Vec<&Budget>) = state
        .budgets()
        .iter()
        .partition(|budget| budget.has_reserved_name());

    let budgets = customs
        .into_iter()
        .cloned()
        .chain(iter::once(Budget::new(name.clone(), limit)))
        .chain(defaults.into_iter().cloned())
        .collect();

    BudgetState::from_budgets(budgets)
}

fn delete_budget(state: &BudgetState, DeleteBudget { id }: &DeleteBudget) -> BudgetState {
    if state
        .get(*id)
        .is_some_and(|budget| budget.card_variant.is_sentinel())
    {
        return state.clone();
    }

    BudgetState::from_budgets(
        state
            .budgets()
            .iter()
            .filter(|budget| budget.id != *id)
            .cloned()
            .collect(),
    )
}

/// The target gets the expense and Total gets its own copy with a separate
/// id. When the target is Total itself only one entry is added.
fn add_expense(state: &BudgetState, payload: &AddExpense) -> BudgetState {
    let AddExpense {
        description,
        amount,
        budget: target,
    } = payload;

    BudgetState::from_budgets(
        state
            .budgets()
            .iter()
            .map(|budget| {
                if budget.card_variant != CardVariant::Total && budget.id != *target {
                    return budget.clone();
                }

                let mut budget = budget.clone();
                budget
                    .expenses
                    .push(Expense::new(description.clone(), *amount));
                budget
            })
            .collect(),
    )
}

/// Only the named budget loses the expense; the Total ledger keeps its copy.
fn delete_expense(state: &BudgetState, DeleteExpense { id, budget }: &DeleteExpense) -> BudgetState {
    BudgetState::from_budgets(
        state
            .budgets()
            .iter()
            .map(|b| {
                if b.id != *budget {
                    return b.clone();
                }

                let mut b = b.clone();
                b.expenses.retain(|expense| expense.id != *id);
                b
            })
            .collect(),
    )
}

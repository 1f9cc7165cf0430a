//! Store actions
//!
//! The closed set of transitions the budget store understands. Each variant
//! carries its own payload record.

use serde::Serialize;

use crate::models::{BudgetId, ExpenseId, Money};

/// Create a user budget
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddBudget {
    pub name: String,
    /// Raw form input; coerced to [`Money`] by the reducer
    pub limit: String,
}

/// Remove a budget and all of its expenses
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteBudget {
    pub id: BudgetId,
}

/// Record an expense against a budget (and the Total ledger)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddExpense {
    pub description: String,
    pub amount: Money,
    pub budget: BudgetId,
}

/// Remove an expense from one budget
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteExpense {
    pub id: ExpenseId,
    pub budget: BudgetId,
}

/// An action dispatched to the budget store
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BudgetAction {
    AddBudget(AddBudget),
    DeleteBudget(DeleteBudget),
    AddExpense(AddExpense),
    DeleteExpense(DeleteExpense),
}

impl BudgetAction {
    pub fn add_budget(name: impl Into<String>, limit: impl Into<String>) -> Self {
        Self::AddBudget(AddBudget {
            name: name.into(),
            limit: limit.into(),
        })
    }

    pub fn delete_budget(id: BudgetId) -> Self {
        Self::DeleteBudget(DeleteBudget { id })
    }

    pub fn add_expense(description: impl Into<String>, amount: Money, budget: BudgetId) -> Self {
        Self::AddExpense(AddExpense {
            description: description.into(),
            amount,
            budget,
        })
    }

    pub fn delete_expense(id: ExpenseId, budget: BudgetId) -> Self {
        Self::DeleteExpense(DeleteExpense { id, budget })
    }

    /// Wire-style name of the action, used in log output
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AddBudget(_) => "ADD_BUDGET",
            Self::DeleteBudget(_) => "DELETE_BUDGET",
            Self::AddExpense(_) => "ADD_EXPENSE",
            Self::DeleteExpense(_) => "DELETE_EXPENSE",
        }
    }
}

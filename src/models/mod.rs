//! Core data models for budget-cards
//!
//! Budgets, their expenses, typed ids and the money type.

pub mod budget;
pub mod expense;
pub mod ids;
pub mod money;

pub use budget::{
    Budget, CardVariant, RESERVED_BUDGET_NAMES, TOTAL_BUDGET_NAME, UNCATEGORIZED_BUDGET_NAME,
};
pub use expense::Expense;
pub use ids::{BudgetId, ExpenseId};
pub use money::{Money, MoneyParseError};

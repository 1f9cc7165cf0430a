//! Dialog modules for the TUI
//!
//! Contains modal dialogs for adding budgets and expenses, viewing a card's
//! expenses, and confirming deletions

pub mod add_budget;
pub mod add_expense;
pub mod confirm;
pub mod help;
pub mod view_expenses;

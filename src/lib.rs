//! budget-cards - card-based budgeting in the terminal
//!
//! Budgets are cards with a spending limit. Expenses are added to a card and
//! mirrored into the Total card; expenses without a card land in
//! Uncategorized. State lives in memory for one session.
//!
//! # Architecture
//!
//! - `store`: budget state, actions and the pure reducer
//! - `validation`: per-field validators and the validation coordinator
//! - `models`: budgets, expenses, ids and money
//! - `audit`: journal entries for every state change
//! - `display` / `export`: text tables and JSON/YAML/CSV snapshots
//! - `cli`: the scripted command runner
//! - `tui`: the interactive card view
//! - `config` / `logging`: settings, paths and tracing setup
//!
//! # Example
//!
//! ```rust
//! use budget_cards::models::Money;
//! use budget_cards::store::{BudgetAction, BudgetStore};
//!
//! let mut store = BudgetStore::new();
//! store.dispatch(BudgetAction::add_budget("Food", "100"));
//! let food = store.state().find("Food").unwrap().id;
//! store.dispatch(BudgetAction::add_expense("Lunch", Money::from_units(12), food));
//!
//! assert_eq!(store.state().total().unwrap().spent(), Money::from_units(12));
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod store;
pub mod tui;
pub mod validation;

pub use error::{BudgetError, BudgetResult};

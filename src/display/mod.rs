//! Display formatting for terminal output
//!
//! Card aggregates shared by the TUI and the command runner, plus the
//! runner's plain-text tables.

pub mod budget;
pub mod card;
pub mod currency;

pub use budget::{format_budget_cards, format_budget_details, format_history};
pub use card::{card_summaries, CardSummary};
pub use currency::CurrencyFormat;

//! Terminal User Interface module
//!
//! Budget cards in a grid, with dialogs for adding budgets and expenses and
//! for browsing and deleting a card's expenses.

pub mod app;
pub mod dialogs;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;

//! Event handler for the TUI
//!
//! Routes key presses to the active dialog, or to the card grid when no
//! dialog is open.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use super::app::{ActiveDialog, App};
use super::dialogs;

/// Handle a key event
pub fn handle_event(app: &mut App, key: KeyEvent) {
    // Windows reports releases too
    if key.kind != KeyEventKind::Press {
        return;
    }

    if app.has_dialog() {
        handle_dialog_key(app, key);
    } else {
        handle_normal_key(app, key);
    }
}

/// Handle keys on the card grid
fn handle_normal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),
        KeyCode::Char('a') => {
            app.clear_status();
            app.open_dialog(ActiveDialog::AddBudget);
        }
        KeyCode::Char('e') => {
            app.clear_status();
            app.open_dialog(ActiveDialog::AddExpense);
        }
        KeyCode::Enter | KeyCode::Char('v') => {
            if let Some(id) = app.selected_budget().map(|b| b.id) {
                app.open_dialog(ActiveDialog::ViewExpenses(id));
            }
        }
        KeyCode::Char('j') | KeyCode::Down | KeyCode::Right => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up | KeyCode::Left => app.move_up(),
        KeyCode::Esc => app.clear_status(),
        _ => {}
    }
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match app.active_dialog {
        ActiveDialog::AddBudget => {
            dialogs::add_budget::handle_key(app, key);
        }
        ActiveDialog::AddExpense => {
            dialogs::add_expense::handle_key(app, key);
        }
        ActiveDialog::ViewExpenses(id) => {
            dialogs::view_expenses::handle_key(app, key, id);
        }
        ActiveDialog::ConfirmDeleteBudget(id) => {
            dialogs::confirm::handle_key(app, key, id);
        }
        // Any key closes help
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::None => {}
    }
}

//! Application state for the TUI
//!
//! The App struct owns the budget store for the session and holds everything
//! needed for rendering and handling events.

use crate::display::CurrencyFormat;
use crate::models::{Budget, BudgetId};
use crate::store::BudgetStore;

use super::dialogs::add_budget::BudgetFormState;
use super::dialogs::add_expense::ExpenseFormState;
use super::dialogs::view_expenses::ExpenseListState;

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddBudget,
    AddExpense,
    ViewExpenses(BudgetId),
    ConfirmDeleteBudget(BudgetId),
    Help,
}

/// Main application state
pub struct App {
    /// The budget store; the only place state changes
    pub store: BudgetStore,

    /// How amounts are rendered
    pub currency: CurrencyFormat,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Index of the selected card
    pub selected_index: usize,

    /// Status message to display
    pub status_message: Option<String>,

    /// Add budget form
    pub budget_form: BudgetFormState,

    /// Add expense form
    pub expense_form: ExpenseFormState,

    /// Selection inside the expenses dialog
    pub expense_list: ExpenseListState,
}

impl App {
    /// Create a new App instance
    pub fn new(store: BudgetStore, currency: CurrencyFormat) -> Self {
        Self {
            store,
            currency,
            should_quit: false,
            active_dialog: ActiveDialog::default(),
            selected_index: 0,
            status_message: None,
            budget_form: BudgetFormState::new(),
            expense_form: ExpenseFormState::new(),
            expense_list: ExpenseListState::default(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// The budget under the selection cursor
    pub fn selected_budget(&self) -> Option<&Budget> {
        self.store.state().budgets().get(self.selected_index)
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        match dialog {
            ActiveDialog::AddExpense => {
                let state = self.store.state();
                let target = self
                    .selected_budget()
                    .or_else(|| state.uncategorized())
                    .map(|b| b.id);
                self.expense_form.prepare(target);
            }
            ActiveDialog::ViewExpenses(id) if self.active_dialog != ActiveDialog::ConfirmDeleteBudget(id) => {
                self.expense_list = ExpenseListState::default();
            }
            _ => {}
        }
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Move the card selection up
    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Move the card selection down
    pub fn move_down(&mut self) {
        let count = self.store.state().budgets().len();
        if self.selected_index < count.saturating_sub(1) {
            self.selected_index += 1;
        }
    }

    /// Keep the selection on a card after budgets were removed
    pub fn clamp_selection(&mut self) {
        let count = self.store.state().budgets().len();
        self.selected_index = self.selected_index.min(count.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::BudgetAction;

    fn app_with_food() -> App {
        let mut store = BudgetStore::new();
        store.dispatch(BudgetAction::add_budget("Food", "100"));
        App::new(store, CurrencyFormat::default())
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut app = app_with_food();
        app.move_up();
        assert_eq!(app.selected_index, 0);

        for _ in 0..10 {
            app.move_down();
        }
        assert_eq!(app.selected_index, 2);
        assert_eq!(app.selected_budget().map(|b| b.name.as_str()), Some("Total"));
    }

    #[test]
    fn test_clamp_after_delete() {
        let mut app = app_with_food();
        app.selected_index = 2;
        let food = app.store.state().find("Food").unwrap().id;
        app.store.dispatch(BudgetAction::delete_budget(food));

        app.clamp_selection();
        assert_eq!(app.selected_index, 1);
    }

    #[test]
    fn test_add_expense_defaults_to_selected_card() {
        let mut app = app_with_food();
        let food = app.store.state().find("Food").unwrap().id;

        app.open_dialog(ActiveDialog::AddExpense);
        assert_eq!(app.expense_form.budget, Some(food));
        assert!(app.has_dialog());

        app.close_dialog();
        assert!(!app.has_dialog());
    }
}

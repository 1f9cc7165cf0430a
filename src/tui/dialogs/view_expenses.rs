//! View expenses dialog
//!
//! Lists one budget's expenses. Expenses can be deleted one at a time, and
//! the budget itself can be deleted from here after a confirmation.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::models::BudgetId;
use crate::store::BudgetAction;
use crate::tui::app::{ActiveDialog, App};
use crate::tui::layout::centered_rect;

/// Selection inside the expenses list
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpenseListState {
    pub selected: usize,
}

impl ExpenseListState {
    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self, count: usize) {
        if self.selected < count.saturating_sub(1) {
            self.selected += 1;
        }
    }

    pub fn clamp(&mut self, count: usize) {
        self.selected = self.selected.min(count.saturating_sub(1));
    }
}

/// Render the expenses of `budget_id`
pub fn render(frame: &mut Frame, app: &App, budget_id: BudgetId) {
    let Some(budget) = app.store.state().get(budget_id) else {
        return;
    };

    let area = centered_rect(60, 60, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" Expenses - {} ", budget.name))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    if budget.expenses.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No expenses yet",
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(empty, chunks[0]);
    } else {
        let rows: Vec<Row> = budget
            .expenses
            .iter()
            .map(|expense| {
                Row::new(vec![
                    Cell::from(expense.description.clone()),
                    Cell::from(app.currency.amount(expense.amount))
                        .style(Style::default().fg(Color::Yellow)),
                ])
            })
            .collect();

        let table = Table::new(rows, [Constraint::Min(20), Constraint::Length(14)])
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        let mut table_state = TableState::default();
        table_state.select(Some(app.expense_list.selected));
        frame.render_stateful_widget(table, chunks[0], &mut table_state);
    }

    let hints = Line::from(vec![
        Span::styled("[j/k]", Style::default().fg(Color::Yellow)),
        Span::raw(" Select  "),
        Span::styled("[x]", Style::default().fg(Color::Red)),
        Span::raw(" Delete expense  "),
        Span::styled("[D]", Style::default().fg(Color::Red)),
        Span::raw(" Delete budget  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Close"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[1]);
}

/// Handle key input for the expenses dialog
pub fn handle_key(app: &mut App, key: KeyEvent, budget_id: BudgetId) -> bool {
    let Some(budget) = app.store.state().get(budget_id) else {
        app.close_dialog();
        return true;
    };
    let count = budget.expenses.len();
    let is_sentinel = budget.card_variant.is_sentinel();
    let name = budget.name.clone();
    let selected = budget
        .expenses
        .get(app.expense_list.selected)
        .map(|e| (e.id, e.description.clone()));

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.close_dialog(),
        KeyCode::Char('j') | KeyCode::Down => app.expense_list.move_down(count),
        KeyCode::Char('k') | KeyCode::Up => app.expense_list.move_up(),
        KeyCode::Char('x') | KeyCode::Delete => {
            if let Some((expense_id, description)) = selected {
                app.store
                    .dispatch(BudgetAction::delete_expense(expense_id, budget_id));
                app.expense_list.clamp(count.saturating_sub(1));
                app.set_status(format!("Deleted '{}' from {}", description, name));
            }
        }
        KeyCode::Char('D') => {
            if is_sentinel {
                app.set_status(format!("The {} budget cannot be deleted", name));
            } else {
                app.open_dialog(ActiveDialog::ConfirmDeleteBudget(budget_id));
            }
        }
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::CurrencyFormat;
    use crate::models::Money;
    use crate::store::BudgetStore;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode, budget: BudgetId) -> bool {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE), budget)
    }

    fn app_with_expenses() -> (App, BudgetId) {
        let mut store = BudgetStore::new();
        store.dispatch(BudgetAction::add_budget("Food", "100"));
        let food = store.state().find("Food").unwrap().id;
        store.dispatch(BudgetAction::add_expense("Lunch", Money::from_units(12), food));
        store.dispatch(BudgetAction::add_expense("Dinner", Money::from_units(30), food));

        let mut app = App::new(store, CurrencyFormat::default());
        app.open_dialog(ActiveDialog::ViewExpenses(food));
        (app, food)
    }

    #[test]
    fn test_delete_selected_expense() {
        let (mut app, food) = app_with_expenses();
        press(&mut app, KeyCode::Char('j'), food);
        press(&mut app, KeyCode::Char('x'), food);

        let state = app.store.state();
        let remaining: Vec<_> = state
            .get(food)
            .unwrap()
            .expenses
            .iter()
            .map(|e| e.description.as_str())
            .collect();
        assert_eq!(remaining, vec!["Lunch"]);
        assert_eq!(state.total().unwrap().expenses.len(), 2);
        assert_eq!(app.expense_list.selected, 0);
    }

    #[test]
    fn test_delete_budget_asks_first() {
        let (mut app, food) = app_with_expenses();
        press(&mut app, KeyCode::Char('D'), food);
        assert_eq!(app.active_dialog, ActiveDialog::ConfirmDeleteBudget(food));
        assert!(app.store.state().get(food).is_some());
    }

    #[test]
    fn test_sentinel_budget_not_offered_for_deletion() {
        let (mut app, _) = app_with_expenses();
        let total = app.store.state().total().unwrap().id;
        app.open_dialog(ActiveDialog::ViewExpenses(total));

        press(&mut app, KeyCode::Char('D'), total);
        assert_eq!(app.active_dialog, ActiveDialog::ViewExpenses(total));
        assert_eq!(
            app.status_message.as_deref(),
            Some("The Total budget cannot be deleted")
        );
    }

    #[test]
    fn test_missing_budget_closes() {
        let (mut app, _) = app_with_expenses();
        assert!(press(&mut app, KeyCode::Char('j'), BudgetId::new()));
        assert_eq!(app.active_dialog, ActiveDialog::None);
    }
}

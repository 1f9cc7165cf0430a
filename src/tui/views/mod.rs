//! TUI Views module
//!
//! The card grid, header and status bar, plus dispatch to the active dialog.

pub mod cards;
pub mod status_bar;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    render_header(frame, app, layout.header);
    cards::render(frame, app, layout.cards);
    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let state = app.store.state();
    let line = Line::from(vec![
        Span::styled(
            " Budget Cards ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "  limits {}  spent {}",
                app.currency.amount(state.combined_limit()),
                app.currency.amount(state.derived_total()),
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    match app.active_dialog {
        ActiveDialog::AddBudget => dialogs::add_budget::render(frame, app),
        ActiveDialog::AddExpense => dialogs::add_expense::render(frame, app),
        ActiveDialog::ViewExpenses(id) => dialogs::view_expenses::render(frame, app, id),
        ActiveDialog::ConfirmDeleteBudget(id) => {
            dialogs::view_expenses::render(frame, app, id);
            dialogs::confirm::render(frame, app, id);
        }
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::CurrencyFormat;
    use crate::store::{BudgetAction, BudgetStore};
    use crate::models::Money;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_renders_cards_and_dialogs() {
        let mut store = BudgetStore::new();
        store.dispatch(BudgetAction::add_budget("Food", "100"));
        let food = store.state().find("Food").unwrap().id;
        store.dispatch(BudgetAction::add_expense("Lunch", Money::from_units(12), food));
        let mut app = App::new(store, CurrencyFormat::default());

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("Food"));
        assert!(text.contains("Uncategorized"));
        assert!(text.contains("Total"));

        app.open_dialog(ActiveDialog::ViewExpenses(food));
        terminal.draw(|frame| render(frame, &app)).unwrap();
        assert!(buffer_text(&terminal).contains("Lunch"));

        app.open_dialog(ActiveDialog::ConfirmDeleteBudget(food));
        terminal.draw(|frame| render(frame, &app)).unwrap();
        assert!(buffer_text(&terminal).contains("Delete 'Food'"));
    }
}

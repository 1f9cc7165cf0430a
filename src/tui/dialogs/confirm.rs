//! Confirmation dialog
//!
//! Yes/no prompt shown before a budget is deleted

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::models::BudgetId;
use crate::store::BudgetAction;
use crate::tui::app::{ActiveDialog, App};
use crate::tui::layout::centered_rect_fixed;

/// Render the delete-budget confirmation
pub fn render(frame: &mut Frame, app: &App, budget_id: BudgetId) {
    let Some(budget) = app.store.state().get(budget_id) else {
        return;
    };

    let area = centered_rect_fixed(50, 8, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Delete Budget ")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let expenses = match budget.expenses.len() {
        0 => "no expenses".to_string(),
        1 => "1 expense".to_string(),
        n => format!("{} expenses", n),
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Delete '{}' and its {}?", budget.name, expenses),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Y]", Style::default().fg(Color::Green)),
            Span::raw(" Yes  "),
            Span::styled("[N]", Style::default().fg(Color::Red)),
            Span::raw(" No  "),
            Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
            Span::raw(" Cancel"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Handle key input for the confirmation
pub fn handle_key(app: &mut App, key: KeyEvent, budget_id: BudgetId) -> bool {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            let name = app
                .store
                .state()
                .get(budget_id)
                .map(|b| b.name.clone())
                .unwrap_or_default();

            app.close_dialog();
            if app.store.dispatch(BudgetAction::delete_budget(budget_id)) {
                app.clamp_selection();
                app.set_status(format!("Budget '{}' deleted", name));
            } else {
                app.set_status(format!("Budget '{}' was not deleted", name));
            }
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.open_dialog(ActiveDialog::ViewExpenses(budget_id));
        }
        _ => return false,
    }
    true
}

//! Add expense dialog
//!
//! Description and amount inputs plus a budget selector. The chosen budget is
//! kept after an add, so several expenses can go to the same card in a row.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{Budget, BudgetId, Money};
use crate::store::BudgetAction;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::TextInput;
use crate::validation::{
    expense_amount_validator, string_validator, Evaluation, Observable, Submission,
    ValidationCoordinator,
};

use super::add_budget::render_error;

/// Inputs of the add expense form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ExpenseField {
    Description,
    Amount,
    Budget,
}

const EMPTY_FORM: [(ExpenseField, &str); 2] = [
    (ExpenseField::Description, ""),
    (ExpenseField::Amount, ""),
];

/// State for the add expense dialog
#[derive(Debug, Clone)]
pub struct ExpenseFormState {
    pub description_input: TextInput,
    pub amount_input: TextInput,
    pub description_error: Option<String>,
    pub amount_error: Option<String>,
    /// Budget the expense will be filed under
    pub budget: Option<BudgetId>,
    pub focus: ExpenseField,
    validation: ValidationCoordinator<ExpenseField>,
}

impl Default for ExpenseFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseFormState {
    pub fn new() -> Self {
        Self {
            description_input: TextInput::new()
                .label("Description")
                .placeholder("e.g. Lunch"),
            amount_input: TextInput::new().label("Amount").placeholder("e.g. 12.50"),
            description_error: None,
            amount_error: None,
            budget: None,
            focus: ExpenseField::Description,
            validation: ValidationCoordinator::new(EMPTY_FORM),
        }
    }

    /// Get the form ready to file under `budget`
    pub fn prepare(&mut self, budget: Option<BudgetId>) {
        self.budget = budget;
        self.focus = ExpenseField::Description;
    }

    pub fn next_field(&mut self) {
        self.focus = match self.focus {
            ExpenseField::Description => ExpenseField::Amount,
            ExpenseField::Amount => ExpenseField::Budget,
            ExpenseField::Budget => ExpenseField::Description,
        };
    }

    pub fn prev_field(&mut self) {
        self.focus = match self.focus {
            ExpenseField::Description => ExpenseField::Budget,
            ExpenseField::Amount => ExpenseField::Description,
            ExpenseField::Budget => ExpenseField::Amount,
        };
    }

    fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            ExpenseField::Description => Some(&mut self.description_input),
            ExpenseField::Amount => Some(&mut self.amount_input),
            ExpenseField::Budget => None,
        }
    }

    /// Step the budget selector through `budgets`, wrapping at either end
    pub fn cycle_budget(&mut self, budgets: &[Budget], forward: bool) {
        if budgets.is_empty() {
            return;
        }
        let current = self
            .budget
            .and_then(|id| budgets.iter().position(|b| b.id == id));
        let next = match (current, forward) {
            (None, _) => 0,
            (Some(i), true) => (i + 1) % budgets.len(),
            (Some(i), false) => (i + budgets.len() - 1) % budgets.len(),
        };
        self.budget = Some(budgets[next].id);
    }

    /// Validate whatever the last edit changed
    pub fn observe(&mut self) -> Evaluation<ExpenseField> {
        let mut observables = [
            Observable::new(
                ExpenseField::Description,
                self.description_input.value(),
                string_validator,
                &mut self.description_error,
            ),
            Observable::new(
                ExpenseField::Amount,
                self.amount_input.value(),
                expense_amount_validator,
                &mut self.amount_error,
            ),
        ];
        self.validation.observe(&mut observables)
    }

    /// Validate every field for a submit attempt
    pub fn submit(&mut self) -> Submission {
        let mut observables = [
            Observable::new(
                ExpenseField::Description,
                self.description_input.value(),
                string_validator,
                &mut self.description_error,
            ),
            Observable::new(
                ExpenseField::Amount,
                self.amount_input.value(),
                expense_amount_validator,
                &mut self.amount_error,
            ),
        ];
        self.validation.submit(&mut observables)
    }

    /// Empty the text inputs after a successful add; the budget stays
    pub fn clear(&mut self) {
        self.description_input.clear();
        self.amount_input.clear();
        self.description_error = None;
        self.amount_error = None;
        self.focus = ExpenseField::Description;
        self.validation.reset(EMPTY_FORM);
    }
}

/// Render the add expense dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(60, 13, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" New Expense ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Description
            Constraint::Length(1), // Description error
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Amount error
            Constraint::Length(1), // Budget
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.expense_form;
    frame.render_widget(
        Paragraph::new(
            form.description_input
                .line(form.focus == ExpenseField::Description),
        ),
        chunks[1],
    );
    render_error(frame, chunks[2], form.description_error.as_deref());
    frame.render_widget(
        Paragraph::new(form.amount_input.line(form.focus == ExpenseField::Amount)),
        chunks[3],
    );
    render_error(frame, chunks[4], form.amount_error.as_deref());

    let budget_name = form
        .budget
        .and_then(|id| app.store.state().get(id))
        .map_or("(none)", |b| b.name.as_str());
    let selector_focused = form.focus == ExpenseField::Budget;
    let label_style = if selector_focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let value_style = if selector_focused {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };
    let selector = Line::from(vec![
        Span::styled("Budget: ", label_style),
        Span::styled(format!("◀ {} ▶", budget_name), value_style),
    ]);
    frame.render_widget(Paragraph::new(selector), chunks[5]);

    let hints = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Add  "),
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next field  "),
        Span::styled("[←/→]", Style::default().fg(Color::Yellow)),
        Span::raw(" Budget  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[7]);
}

/// Handle key input for the add expense dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Tab | KeyCode::Down => app.expense_form.next_field(),
        KeyCode::BackTab | KeyCode::Up => app.expense_form.prev_field(),
        KeyCode::Enter => save_expense(app),
        KeyCode::Left | KeyCode::Right if app.expense_form.focus == ExpenseField::Budget => {
            let forward = key.code == KeyCode::Right;
            app.expense_form
                .cycle_budget(app.store.state().budgets(), forward);
        }
        _ => {
            let edited = app
                .expense_form
                .focused_input()
                .is_some_and(|input| input.handle_key(key));
            if !edited {
                return false;
            }
            app.expense_form.observe();
        }
    }
    true
}

/// Record the expense if the form passes validation
fn save_expense(app: &mut App) {
    if !app.expense_form.submit().is_valid() {
        return;
    }

    let amount = match Money::parse(app.expense_form.amount_input.value()) {
        Ok(amount) => amount,
        Err(e) => {
            app.expense_form.amount_error = Some(e.to_string());
            return;
        }
    };

    let state = app.store.state();
    let Some(target) = app
        .expense_form
        .budget
        .and_then(|id| state.get(id))
        .or_else(|| state.uncategorized())
    else {
        app.set_status("No budget to add the expense to");
        return;
    };
    let (budget_id, budget_name) = (target.id, target.name.clone());

    let description = app.expense_form.description_input.value().to_string();
    app.store
        .dispatch(BudgetAction::add_expense(description.as_str(), amount, budget_id));

    app.expense_form.budget = Some(budget_id);
    app.expense_form.clear();
    app.close_dialog();
    app.set_status(format!(
        "Added '{}' ({}) to {}",
        description,
        app.currency.amount(amount),
        budget_name
    ));
}

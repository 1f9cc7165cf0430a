//! Add budget dialog
//!
//! Name and limit inputs, validated as they are edited. Enter re-validates
//! everything and creates the budget only when both fields pass.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::store::BudgetAction;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::TextInput;
use crate::validation::{
    budget_max_validator, budget_name_validator, Evaluation, Observable, Submission,
    ValidationCoordinator,
};

/// Inputs of the add budget form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BudgetField {
    Name,
    Limit,
}

const EMPTY_FORM: [(BudgetField, &str); 2] = [(BudgetField::Name, ""), (BudgetField::Limit, "")];

/// State for the add budget dialog
#[derive(Debug, Clone)]
pub struct BudgetFormState {
    pub name_input: TextInput,
    pub limit_input: TextInput,
    pub name_error: Option<String>,
    pub limit_error: Option<String>,
    pub focus: BudgetField,
    validation: ValidationCoordinator<BudgetField>,
}

impl Default for BudgetFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl BudgetFormState {
    pub fn new() -> Self {
        Self {
            name_input: TextInput::new()
                .label("Name")
                .placeholder("e.g. Groceries"),
            limit_input: TextInput::new()
                .label("Maximum spending")
                .placeholder("e.g. 400"),
            name_error: None,
            limit_error: None,
            focus: BudgetField::Name,
            validation: ValidationCoordinator::new(EMPTY_FORM),
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            BudgetField::Name => BudgetField::Limit,
            BudgetField::Limit => BudgetField::Name,
        };
    }

    fn focused_input(&mut self) -> &mut TextInput {
        match self.focus {
            BudgetField::Name => &mut self.name_input,
            BudgetField::Limit => &mut self.limit_input,
        }
    }

    /// Validate whatever the last edit changed
    pub fn observe(&mut self) -> Evaluation<BudgetField> {
        let mut observables = [
            Observable::new(
                BudgetField::Name,
                self.name_input.value(),
                budget_name_validator,
                &mut self.name_error,
            ),
            Observable::new(
                BudgetField::Limit,
                self.limit_input.value(),
                budget_max_validator,
                &mut self.limit_error,
            ),
        ];
        self.validation.observe(&mut observables)
    }

    /// Validate every field for a submit attempt
    pub fn submit(&mut self) -> Submission {
        let mut observables = [
            Observable::new(
                BudgetField::Name,
                self.name_input.value(),
                budget_name_validator,
                &mut self.name_error,
            ),
            Observable::new(
                BudgetField::Limit,
                self.limit_input.value(),
                budget_max_validator,
                &mut self.limit_error,
            ),
        ];
        self.validation.submit(&mut observables)
    }

    /// Empty the form after a successful add
    pub fn clear(&mut self) {
        self.name_input.clear();
        self.limit_input.clear();
        self.name_error = None;
        self.limit_error = None;
        self.focus = BudgetField::Name;
        self.validation.reset(EMPTY_FORM);
    }

    /// Whether the form may be submitted
    pub fn is_valid(&self) -> bool {
        self.validation.all_valid()
    }
}

/// Render the add budget dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(56, 11, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" New Budget ")
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
            Constraint::Length(1), // Name
            Constraint::Length(1), // Name error
            Constraint::Length(1), // Limit
            Constraint::Length(1), // Limit error
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.budget_form;
    frame.render_widget(
        Paragraph::new(form.name_input.line(form.focus == BudgetField::Name)),
        chunks[1],
    );
    render_error(frame, chunks[2], form.name_error.as_deref());
    frame.render_widget(
        Paragraph::new(form.limit_input.line(form.focus == BudgetField::Limit)),
        chunks[3],
    );
    render_error(frame, chunks[4], form.limit_error.as_deref());

    let hints = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Add  "),
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next field  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[6]);
}

pub(crate) fn render_error(frame: &mut Frame, area: Rect, error: Option<&str>) {
    if let Some(error) = error {
        let line = Line::from(Span::styled(
            format!("  {}", error),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(line), area);
    }
}

/// Handle key input for the add budget dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.budget_form.toggle_focus()
        }
        KeyCode::Enter => save_budget(app),
        _ => {
            if !app.budget_form.focused_input().handle_key(key) {
                return false;
            }
            app.budget_form.observe();
        }
    }
    true
}

/// Create the budget if the form passes validation
fn save_budget(app: &mut App) {
    if !app.budget_form.submit().is_valid() {
        return;
    }

    let name = app.budget_form.name_input.value().to_string();
    let limit = app.budget_form.limit_input.value().to_string();
    app.store.dispatch(BudgetAction::add_budget(name.as_str(), limit));

    app.budget_form.clear();
    app.close_dialog();
    app.set_status(format!("Budget '{}' created", name));
}

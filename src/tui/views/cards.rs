//! Budget card grid
//!
//! One bordered card per budget with spent/ceiling and a progress gauge.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::display::{card_summaries, CardSummary, CurrencyFormat};
use crate::tui::app::App;
use crate::tui::layout::CardGrid;

/// Render every card that fits, scrolled so the selection is visible
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let cards = card_summaries(app.store.state());
    let grid = CardGrid::new(area);
    let first_row = grid.first_row(app.selected_index);

    for (index, card) in cards.iter().enumerate() {
        if let Some(rect) = grid.card_rect(area, index, first_row) {
            render_card(frame, card, &app.currency, index == app.selected_index, rect);
        }
    }
}

fn render_card(
    frame: &mut Frame,
    card: &CardSummary,
    currency: &CurrencyFormat,
    selected: bool,
    area: Rect,
) {
    let border_style = if selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let title_style = if selected {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let block = Block::default()
        .title(Span::styled(format!(" {} ", card.name), title_style))
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let amounts = match card.ceiling {
        Some(ceiling) => format!(
            "{} / {}",
            currency.amount(card.spent),
            currency.amount(ceiling)
        ),
        None => currency.amount(card.spent),
    };
    let count = match card.expense_count {
        1 => "1 expense".to_string(),
        n => format!("{} expenses", n),
    };
    let summary = Line::from(vec![
        Span::styled(amounts, Style::default().fg(Color::White)),
        Span::styled(format!("  {}", count), Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(summary), rows[0]);

    if let Some(progress) = card.progress {
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(progress_color(card)))
            .ratio(card.ratio())
            .label(format!("{:.0}%", progress));
        frame.render_widget(gauge, rows[1]);
    }
}

fn progress_color(card: &CardSummary) -> Color {
    if card.is_over() {
        Color::Red
    } else if card.ratio() >= 0.8 {
        Color::Yellow
    } else {
        Color::Green
    }
}

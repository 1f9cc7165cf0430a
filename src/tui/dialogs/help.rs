//! Help dialog
//!
//! Lists keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines())
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines() -> Vec<Line<'static>> {
    vec![
        section("Budget Cards"),
        Line::from(""),
        key_line("a", "Add a budget"),
        key_line("e", "Add an expense to the selected card"),
        key_line("Enter / v", "View the selected card's expenses"),
        key_line("j/k", "Move selection"),
        key_line("?", "Show this help"),
        key_line("q", "Quit"),
        Line::from(""),
        section("Forms"),
        Line::from(""),
        key_line("Tab", "Next field"),
        key_line("←/→", "Change budget (expense form)"),
        key_line("Enter", "Submit"),
        key_line("Esc", "Cancel"),
        Line::from(""),
        section("Expenses"),
        Line::from(""),
        key_line("j/k", "Select expense"),
        key_line("x", "Delete expense"),
        key_line("D", "Delete budget"),
        key_line("Esc", "Close"),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    ))
}

fn key_line(key: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<12}", key), Style::default().fg(Color::Cyan)),
        Span::raw(description),
    ])
}

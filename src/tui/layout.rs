//! Layout definitions for the TUI
//!
//! Header, card grid and status bar, plus helpers for centering dialogs.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of one budget card, borders included
pub const CARD_HEIGHT: u16 = 5;

/// Narrowest a card may get before the grid drops a column
pub const MIN_CARD_WIDTH: u16 = 28;

/// Layout regions for the TUI
pub struct AppLayout {
    /// Title line
    pub header: Rect,
    /// Card grid
    pub cards: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Min(3),    // Cards
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            header: vertical[0],
            cards: vertical[1],
            status_bar: vertical[2],
        }
    }
}

/// Placement of budget cards in a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardGrid {
    pub columns: usize,
    pub visible_rows: usize,
}

impl CardGrid {
    /// Fit as many columns as the width allows (at most three)
    pub fn new(area: Rect) -> Self {
        let columns = (area.width / MIN_CARD_WIDTH).clamp(1, 3) as usize;
        let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
        Self {
            columns,
            visible_rows,
        }
    }

    /// First grid row to draw so that `selected` stays on screen
    pub fn first_row(&self, selected: usize) -> usize {
        let row = selected / self.columns;
        (row + 1).saturating_sub(self.visible_rows)
    }

    /// Screen rect of card `index`, or `None` when it is scrolled away
    pub fn card_rect(&self, area: Rect, index: usize, first_row: usize) -> Option<Rect> {
        let row = index / self.columns;
        if row < first_row || row >= first_row + self.visible_rows {
            return None;
        }
        let col = index % self.columns;
        let width = area.width / self.columns as u16;
        Some(Rect::new(
            area.x + col as u16 * width,
            area.y + (row - first_row) as u16 * CARD_HEIGHT,
            width,
            CARD_HEIGHT,
        ))
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_columns() {
        assert_eq!(CardGrid::new(Rect::new(0, 0, 20, 20)).columns, 1);
        assert_eq!(CardGrid::new(Rect::new(0, 0, 60, 20)).columns, 2);
        assert_eq!(CardGrid::new(Rect::new(0, 0, 200, 20)).columns, 3);
    }

    #[test]
    fn test_grid_scrolls_to_selection() {
        let area = Rect::new(0, 0, 60, 10);
        let grid = CardGrid::new(area);
        assert_eq!(grid.visible_rows, 2);

        assert_eq!(grid.first_row(0), 0);
        assert_eq!(grid.first_row(3), 0);
        assert_eq!(grid.first_row(4), 1);

        assert!(grid.card_rect(area, 0, 1).is_none());
        assert_eq!(grid.card_rect(area, 5, 1), Some(Rect::new(30, 5, 30, 5)));
    }

    #[test]
    fn test_centered_rect_fixed_clamps() {
        let r = centered_rect_fixed(100, 10, Rect::new(0, 0, 40, 20));
        assert_eq!(r, Rect::new(0, 5, 40, 10));
    }
}

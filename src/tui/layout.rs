//! Layout definitions for the TUI
//!
//! One screen: the form on top, the transaction table below it, and the
//! balance/status bar at the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Entry form
    pub form: Rect,
    /// Transaction table
    pub table: Rect,
    /// Balance and key hints
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(8), // Form: 4 fields + button + borders
                Constraint::Min(5),    // Table
                Constraint::Length(3), // Status bar
            ])
            .split(area);

        Self {
            form: chunks[0],
            table: chunks[1],
            status_bar: chunks[2],
        }
    }
}

/// Top-right corner area for toasts
pub fn notification_area(area: Rect) -> Rect {
    let width = 44.min(area.width);
    let height = 4.min(area.height);
    Rect::new(area.x + area.width - width, area.y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_fills_area() {
        let area = Rect::new(0, 0, 80, 30);
        let layout = AppLayout::new(area);
        assert_eq!(layout.form.height, 8);
        assert_eq!(layout.status_bar.height, 3);
        assert_eq!(layout.table.height, 19);
    }

    #[test]
    fn test_notification_area_small_terminal() {
        let area = Rect::new(0, 0, 20, 2);
        let toast = notification_area(area);
        assert_eq!(toast, Rect::new(0, 0, 20, 2));
    }
}

//! Status bar view
//!
//! Total balance on the left, key hints on the right.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::display::format_balance_line;
use crate::ledger::total_balance;
use crate::tui::app::{App, Focus};

/// Text of the balance line, e.g. `Total Balance: $800.00`
pub fn balance_text(app: &App) -> String {
    format_balance_line(&app.settings.currency_symbol, app.store.transactions())
}

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(inner);

    let total = total_balance(app.store.transactions());
    let balance_color = if total.is_nan() {
        Color::Magenta
    } else if total < 0.0 {
        Color::Red
    } else {
        Color::Green
    };
    frame.render_widget(
        Paragraph::new(Span::styled(
            balance_text(app),
            Style::default().fg(balance_color).add_modifier(Modifier::BOLD),
        )),
        halves[0],
    );

    let key = Style::default().fg(Color::Yellow);
    let hints = if app.focus == Focus::Table {
        Line::from(vec![
            Span::styled("e", key),
            Span::raw(":Edit "),
            Span::styled("d", key),
            Span::raw(":Delete "),
            Span::styled("x", key),
            Span::raw(":Export "),
            Span::styled("Tab", key),
            Span::raw(":Form "),
            Span::styled("q", key),
            Span::raw(":Quit"),
        ])
    } else {
        Line::from(vec![
            Span::styled("Tab", key),
            Span::raw(":Next "),
            Span::styled("Enter", key),
            Span::raw(":Save "),
            Span::styled("Ctrl+S", key),
            Span::raw(":Export "),
            Span::styled("Ctrl+C", key),
            Span::raw(":Quit"),
        ])
    };
    frame.render_widget(Paragraph::new(hints).right_aligned(), halves[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LedgerPaths, Settings};
    use crate::ledger::{Draft, LedgerStore};
    use crate::models::{Category, TransactionType};
    use std::path::PathBuf;

    #[test]
    fn test_balance_text() {
        let mut store = LedgerStore::new();
        for (amount, kind, category) in [
            ("1000", TransactionType::Income, Category::Salary),
            ("200", TransactionType::Expense, Category::Groceries),
        ] {
            store
                .submit(&Draft {
                    date: "2024-01-01".into(),
                    amount: amount.into(),
                    kind,
                    category,
                    id: None,
                })
                .unwrap();
        }
        let paths = LedgerPaths::with_dirs(PathBuf::from("cfg"), PathBuf::from("out"));
        let app = App::new(store, Settings::default(), paths);

        assert_eq!(balance_text(&app), "Total Balance: $800.00");
    }
}

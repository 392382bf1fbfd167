//! Transaction table view
//!
//! One row per transaction in insertion order, with the row actions in the
//! last column.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::models::TransactionType;
use crate::tui::app::{App, Focus};

/// Shown in place of rows when the ledger is empty
pub const EMPTY_MESSAGE: &str = "No transactions found.";

/// Render the transaction table
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let is_focused = app.focus == Focus::Table;
    let border_color = if is_focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(" Transactions ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if app.store.is_empty() {
        let text = Paragraph::new(EMPTY_MESSAGE)
            .centered()
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(12), // Date
        Constraint::Length(14), // Amount
        Constraint::Length(9),  // Type
        Constraint::Length(11), // Category
        Constraint::Min(16),    // Actions
    ];

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("Date").style(bold),
        Cell::from("Amount").style(bold),
        Cell::from("Type").style(bold),
        Cell::from("Category").style(bold),
        Cell::from("Actions").style(bold),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let editing = app.form.editing_id();
    let rows: Vec<Row> = app
        .store
        .transactions()
        .iter()
        .map(|txn| {
            let amount_style = match txn.kind {
                TransactionType::Income => Style::default().fg(Color::Green),
                TransactionType::Expense => Style::default().fg(Color::Red),
            };
            let row = Row::new(vec![
                Cell::from(txn.date.clone()),
                Cell::from(txn.amount.clone()).style(amount_style),
                Cell::from(txn.kind.as_str()),
                Cell::from(txn.category.as_str()),
                Cell::from("e:edit d:delete").style(Style::default().fg(Color::DarkGray)),
            ]);
            if editing == Some(txn.id) {
                row.style(Style::default().add_modifier(Modifier::ITALIC))
            } else {
                row
            }
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    if is_focused {
        state.select(Some(app.selected_index));
    }

    frame.render_stateful_widget(table, area, &mut state);
}

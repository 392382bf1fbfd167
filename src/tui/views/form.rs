//! Entry form view
//!
//! Date and amount text fields, type and category selectors, and the
//! submit hint whose label flips between add and update.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::{App, Focus};

/// Render the form panel
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let border_color = if app.focus.is_form() {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let title = if app.form.is_editing() {
        " Edit Transaction "
    } else {
        " New Transaction "
    };

    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Date
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Type
            Constraint::Length(1), // Category
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Submit
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(app.date_input.to_line("Date", app.focus == Focus::Date)),
        rows[0],
    );
    frame.render_widget(
        Paragraph::new(app.amount_input.to_line("Amount", app.focus == Focus::Amount)),
        rows[1],
    );

    let draft = app.form.draft();
    frame.render_widget(
        Paragraph::new(selector_line("Type", draft.kind.label(), app.focus == Focus::Type)),
        rows[2],
    );
    frame.render_widget(
        Paragraph::new(selector_line(
            "Category",
            draft.category.label(),
            app.focus == Focus::Category,
        )),
        rows[3],
    );

    let submit = Line::from(vec![
        Span::styled(
            format!("[Enter] {}", app.submit_label()),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            if app.form.is_editing() {
                "   [Esc] Cancel edit"
            } else {
                ""
            },
            Style::default().fg(Color::Red),
        ),
    ]);
    frame.render_widget(Paragraph::new(submit), rows[5]);
}

/// `label: < value >` with arrows shown while focused
fn selector_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let value_span = if focused {
        Span::styled(
            format!("< {} >", value),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        )
    } else {
        Span::styled(value.to_string(), Style::default().fg(Color::Yellow))
    };

    Line::from(vec![
        Span::styled(format!("{:>10}: ", label), label_style),
        value_span,
    ])
}

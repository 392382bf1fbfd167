//! TUI Views module
//!
//! The single screen: form, table, status bar, and the toast overlay.

pub mod form;
pub mod status_bar;
pub mod table;

use ratatui::Frame;

use super::app::App;
use super::layout::{notification_area, AppLayout};
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    form::render(frame, app, layout.form);
    table::render(frame, app, layout.table);
    status_bar::render(frame, app, layout.status_bar);

    if let Some(notification) = app.notifications.current() {
        frame.render_widget(
            NotificationWidget::new(notification),
            notification_area(frame.area()),
        );
    }
}

//! Terminal User Interface module
//!
//! A single-screen ledger form built on ratatui: the entry form, the
//! transaction table, the running balance and transient notifications.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;

//! Event handler for the TUI
//!
//! Routes key presses to the form fields or the transaction table depending
//! on focus.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Focus};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.tick();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Global keys (work everywhere)
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => {
                app.quit();
                return Ok(());
            }
            KeyCode::Char('s') => {
                app.export();
                return Ok(());
            }
            // Other chords are not text input
            _ => return Ok(()),
        }
    }

    match key.code {
        KeyCode::Tab => {
            app.focus = app.focus.next();
            return Ok(());
        }
        KeyCode::BackTab => {
            app.focus = app.focus.prev();
            return Ok(());
        }
        KeyCode::Esc => {
            if app.form.is_editing() {
                app.cancel_edit();
            } else if app.focus.is_form() {
                app.focus = Focus::Table;
            } else {
                app.focus = Focus::Date;
            }
            return Ok(());
        }
        _ => {}
    }

    match app.focus {
        Focus::Date => handle_date_key(app, key),
        Focus::Amount => handle_amount_key(app, key),
        Focus::Type | Focus::Category => handle_selector_key(app, key),
        Focus::Table => handle_table_key(app, key),
    }

    Ok(())
}

/// Keys shared by the two text fields; returns true if handled
fn handle_text_key(app: &mut App, key: KeyEvent, accepts: fn(char) -> bool) -> bool {
    let input = match app.focus {
        Focus::Date => &mut app.date_input,
        Focus::Amount => &mut app.amount_input,
        _ => return false,
    };

    match key.code {
        KeyCode::Char(c) if accepts(c) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => {
            input.move_left();
            return true;
        }
        KeyCode::Right => {
            input.move_right();
            return true;
        }
        KeyCode::Home => {
            input.move_start();
            return true;
        }
        KeyCode::End => {
            input.move_end();
            return true;
        }
        KeyCode::Enter => {
            app.submit_form();
            return true;
        }
        _ => return false,
    }

    // Content changed: mirror it into the draft
    match app.focus {
        Focus::Date => app.sync_date_field(),
        _ => app.sync_amount_field(),
    }
    true
}

fn handle_date_key(app: &mut App, key: KeyEvent) {
    if handle_text_key(app, key, is_date_char) {
        return;
    }

    match key.code {
        KeyCode::Up => app.step_date(1),
        KeyCode::Down => app.step_date(-1),
        _ => {}
    }
}

fn handle_amount_key(app: &mut App, key: KeyEvent) {
    handle_text_key(app, key, is_amount_char);
}

fn handle_selector_key(app: &mut App, key: KeyEvent) {
    let forward = match key.code {
        KeyCode::Right | KeyCode::Down | KeyCode::Char(' ') | KeyCode::Char('l') => true,
        KeyCode::Left | KeyCode::Up | KeyCode::Char('h') => false,
        KeyCode::Enter => {
            app.submit_form();
            return;
        }
        _ => return,
    };

    if app.focus == Focus::Type {
        app.cycle_type(forward);
    } else {
        app.cycle_category(forward);
    }
}

fn handle_table_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('e') | KeyCode::Enter => app.edit_selected(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),
        KeyCode::Char('x') => app.export(),
        KeyCode::Char('a') | KeyCode::Char('n') => app.focus = Focus::Date,
        _ => {}
    }
}

/// Characters a calendar date can contain
fn is_date_char(c: char) -> bool {
    c.is_ascii_digit() || c == '-'
}

/// Characters a numeric input accepts
fn is_amount_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LedgerPaths, Settings};
    use crate::ledger::LedgerStore;
    use crate::models::{Category, TransactionType};
    use tempfile::TempDir;

    fn test_app(temp: &TempDir) -> App {
        let paths = LedgerPaths::with_dirs(temp.path().join("cfg"), temp.path().join("out"));
        App::new(LedgerStore::new(), Settings::default(), paths)
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_full_entry_by_keyboard() {
        let temp = TempDir::new().unwrap();
        let mut app = test_app(&temp);

        type_str(&mut app, "2024-01-02");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "200");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.store.len(), 1);
        let txn = &app.store.transactions()[0];
        assert_eq!(txn.date, "2024-01-02");
        assert_eq!(txn.amount, "200");
        assert_eq!(txn.kind, TransactionType::Expense);
        assert_eq!(txn.category, Category::Groceries);
        assert_eq!(app.focus, Focus::Date);
    }

    #[test]
    fn test_amount_rejects_letters() {
        let temp = TempDir::new().unwrap();
        let mut app = test_app(&temp);
        app.focus = Focus::Amount;

        type_str(&mut app, "1a2.5x");
        assert_eq!(app.form.draft().amount, "12.5");
    }

    #[test]
    fn test_backspace_updates_draft() {
        let temp = TempDir::new().unwrap();
        let mut app = test_app(&temp);
        app.focus = Focus::Amount;

        type_str(&mut app, "50");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.form.draft().amount, "5");
    }

    #[test]
    fn test_table_keys() {
        let temp = TempDir::new().unwrap();
        let mut app = test_app(&temp);
        type_str(&mut app, "2024-01-01");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "10");
        press(&mut app, KeyCode::Enter);

        app.focus = Focus::Table;
        press(&mut app, KeyCode::Char('e'));
        assert!(app.form.is_editing());
        assert_eq!(app.focus, Focus::Date);

        press(&mut app, KeyCode::Esc);
        assert!(!app.form.is_editing());

        app.focus = Focus::Table;
        press(&mut app, KeyCode::Char('d'));
        assert!(app.store.is_empty());

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_from_form() {
        let temp = TempDir::new().unwrap();
        let mut app = test_app(&temp);
        handle_event(
            &mut app,
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        )
        .unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_q_in_form_is_text() {
        let temp = TempDir::new().unwrap();
        let mut app = test_app(&temp);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
    }

    #[test]
    fn test_unbound_ctrl_chord_is_ignored() {
        let temp = TempDir::new().unwrap();
        let mut app = test_app(&temp);
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "12");

        let ctrl_e = KeyEvent::new(KeyCode::Char('e'), KeyModifiers::CONTROL);
        handle_event(&mut app, Event::Key(ctrl_e)).unwrap();

        assert_eq!(app.amount_input.value(), "12");
        assert_eq!(app.form.draft().amount, "12");
        assert!(!app.should_quit);
    }
}

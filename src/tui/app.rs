//! Application state for the TUI
//!
//! The App struct owns the two ledger containers (form draft and store) and
//! the view-only state needed for rendering: focus, row selection, the text
//! inputs mirroring the draft, and pending notifications.

use chrono::{Duration, Local, NaiveDate};

use crate::config::{LedgerPaths, Settings};
use crate::export;
use crate::ledger::{self, FieldUpdate, FormState, LedgerStore, SubmitOutcome};
use crate::models::Transaction;

use super::widgets::{Notification, NotificationQueue, TextInput};

/// Format used by the date field
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// What currently receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Date,
    Amount,
    Type,
    Category,
    Table,
}

impl Focus {
    /// Next focus target (Tab)
    pub fn next(self) -> Self {
        match self {
            Self::Date => Self::Amount,
            Self::Amount => Self::Type,
            Self::Type => Self::Category,
            Self::Category => Self::Table,
            Self::Table => Self::Date,
        }
    }

    /// Previous focus target (Shift+Tab)
    pub fn prev(self) -> Self {
        match self {
            Self::Date => Self::Table,
            Self::Amount => Self::Date,
            Self::Type => Self::Amount,
            Self::Category => Self::Type,
            Self::Table => Self::Category,
        }
    }

    /// Whether focus is on one of the form fields
    pub fn is_form(self) -> bool {
        self != Self::Table
    }
}

/// Main application state
pub struct App {
    /// Committed transactions
    pub store: LedgerStore,

    /// The draft being composed or edited
    pub form: FormState,

    /// Application settings
    pub settings: Settings,

    /// Paths configuration
    pub paths: LedgerPaths,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Current focus
    pub focus: Focus,

    /// Selected row in the transaction table
    pub selected_index: usize,

    /// Date field editor
    pub date_input: TextInput,

    /// Amount field editor
    pub amount_input: TextInput,

    /// Pending toasts
    pub notifications: NotificationQueue,
}

impl App {
    /// Create a new App instance
    pub fn new(store: LedgerStore, settings: Settings, paths: LedgerPaths) -> Self {
        Self {
            store,
            form: FormState::new(),
            settings,
            paths,
            should_quit: false,
            focus: Focus::default(),
            selected_index: 0,
            date_input: TextInput::new().placeholder("YYYY-MM-DD"),
            amount_input: TextInput::new().placeholder("0.00"),
            notifications: NotificationQueue::new(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Queue a notification using the configured duration
    pub fn notify(&mut self, notification: Notification) {
        let secs = self.settings.notification_duration_secs;
        self.notifications.push(notification.with_duration(secs));
    }

    /// Label of the submit action
    pub fn submit_label(&self) -> &'static str {
        if self.form.is_editing() {
            "Update Transaction"
        } else {
            "Add Transaction"
        }
    }

    /// Currently highlighted transaction
    pub fn selected_transaction(&self) -> Option<&Transaction> {
        self.store.transactions().get(self.selected_index)
    }

    /// Push the text inputs' contents into the draft
    pub fn sync_date_field(&mut self) {
        let date = self.date_input.value().to_string();
        self.form.set_field(FieldUpdate::Date(date));
    }

    /// Push the amount input's contents into the draft
    pub fn sync_amount_field(&mut self) {
        let amount = self.amount_input.value().to_string();
        self.form.set_field(FieldUpdate::Amount(amount));
    }

    /// Refresh the text inputs after the draft was replaced wholesale
    fn load_inputs_from_draft(&mut self) {
        let draft = self.form.draft();
        let (date, amount) = (draft.date.clone(), draft.amount.clone());
        self.date_input.set_content(date);
        self.amount_input.set_content(amount);
    }

    /// Step the date field by `days`; an empty or unparsable date starts at today
    pub fn step_date(&mut self, days: i64) {
        let today = Local::now().date_naive();
        let next = match NaiveDate::parse_from_str(self.date_input.value(), DATE_FORMAT) {
            Ok(date) => date
                .checked_add_signed(Duration::days(days))
                .unwrap_or(date),
            Err(_) => today,
        };
        self.date_input.set_content(next.format(DATE_FORMAT).to_string());
        self.sync_date_field();
    }

    /// Cycle the type selector
    pub fn cycle_type(&mut self, forward: bool) {
        let kind = self.form.draft().kind;
        let kind = if forward { kind.next() } else { kind.prev() };
        self.form.set_field(FieldUpdate::Type(kind));
    }

    /// Cycle the category selector
    pub fn cycle_category(&mut self, forward: bool) {
        let category = self.form.draft().category;
        let category = if forward {
            category.next()
        } else {
            category.prev()
        };
        self.form.set_field(FieldUpdate::Category(category));
    }

    /// Commit the draft
    ///
    /// On success the form is reset; on a validation error the draft is
    /// kept and an error toast is shown.
    pub fn submit_form(&mut self) {
        match ledger::commit(&mut self.store, &mut self.form) {
            Ok(outcome) => {
                self.load_inputs_from_draft();
                self.focus = Focus::Date;
                match outcome {
                    SubmitOutcome::Created(_) => {
                        self.selected_index = self.store.len().saturating_sub(1);
                        self.notify_change(Notification::success("Transaction added"));
                    }
                    SubmitOutcome::Updated(_) => {
                        self.notify_change(Notification::success("Transaction updated"));
                    }
                }
            }
            Err(e) => self.notify(Notification::error(e.user_message())),
        }
    }

    /// Load the highlighted row into the form
    pub fn edit_selected(&mut self) {
        match self.selected_transaction().cloned() {
            Some(txn) => {
                self.form.load(&txn);
                self.focus = Focus::Date;
            }
            // Nothing to edit: fall back to a blank draft
            None => self.form.reset(),
        }
        self.load_inputs_from_draft();
    }

    /// Delete the highlighted row
    ///
    /// Deleting the row currently loaded in the form also resets the form,
    /// so a later submit can't target a record that no longer exists.
    pub fn delete_selected(&mut self) {
        let Some(id) = self.selected_transaction().map(|t| t.id) else {
            return;
        };

        if self.store.remove(id).is_none() {
            return;
        }

        if self.form.editing_id() == Some(id) {
            self.form.reset();
            self.load_inputs_from_draft();
        }
        let len = self.store.len();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
        self.notify_change(Notification::info("Transaction deleted"));
    }

    /// Report a completed change, or the audit failure that came with it
    fn notify_change(&mut self, done: Notification) {
        match self.store.take_audit_error() {
            Some(e) => self.notify(Notification::error(format!(
                "{}, but the audit log was not written: {}",
                done.message,
                e.user_message()
            ))),
            None => self.notify(done),
        }
    }

    /// Abandon an edit in progress
    pub fn cancel_edit(&mut self) {
        if self.form.is_editing() {
            self.form.reset();
            self.load_inputs_from_draft();
            self.notify(Notification::info("Edit cancelled"));
        }
    }

    /// Write the ledger to the export directory
    pub fn export(&mut self) {
        let result = export::export_to_dir(
            self.store.transactions(),
            self.paths.export_dir(),
            self.settings.pretty_export,
        );

        match result {
            Ok(path) => self.notify(Notification::success(format!(
                "Exported {} transaction(s) to {}",
                self.store.len(),
                path.display()
            ))),
            Err(_) => self.notify(Notification::error("Export failed")),
        }
    }

    /// Move selection up in the table
    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Move selection down in the table
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.store.len() {
            self.selected_index += 1;
        }
    }

    /// Drop notifications whose time is up
    pub fn tick(&mut self) {
        self.notifications.remove_expired();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::AuditLogger;
    use crate::ledger::Draft;
    use crate::models::{Category, TransactionType};
    use crate::tui::widgets::NotificationType;
    use tempfile::TempDir;

    fn test_app(temp: &TempDir) -> App {
        let paths = LedgerPaths::with_dirs(temp.path().join("cfg"), temp.path().join("out"));
        App::new(LedgerStore::new(), Settings::default(), paths)
    }

    fn type_into(input: &mut TextInput, text: &str) {
        for c in text.chars() {
            input.insert(c);
        }
    }

    fn fill(app: &mut App, date: &str, amount: &str) {
        app.date_input.clear();
        type_into(&mut app.date_input, date);
        app.sync_date_field();
        app.amount_input.clear();
        type_into(&mut app.amount_input, amount);
        app.sync_amount_field();
    }

    #[test]
    fn test_focus_cycle() {
        let mut focus = Focus::Date;
        for _ in 0..5 {
            focus = focus.next();
        }
        assert_eq!(focus, Focus::Date);
        assert_eq!(Focus::Date.prev(), Focus::Table);
        assert!(!Focus::Table.is_form());
    }

    #[test]
    fn test_submit_adds_and_resets() {
        let temp = TempDir::new().unwrap();
        let mut app = test_app(&temp);
        fill(&mut app, "2024-01-01", "1000");

        app.submit_form();

        assert_eq!(app.store.len(), 1);
        assert_eq!(app.form.draft(), &Draft::default());
        assert_eq!(app.date_input.value(), "");
        assert_eq!(app.amount_input.value(), "");
        assert_eq!(
            app.notifications.current().map(|n| n.notification_type),
            Some(NotificationType::Success)
        );
    }

    #[test]
    fn test_submit_without_date_shows_error() {
        let temp = TempDir::new().unwrap();
        let mut app = test_app(&temp);
        fill(&mut app, "", "50");

        app.submit_form();

        assert!(app.store.is_empty());
        assert_eq!(app.form.draft().amount, "50");
        assert_eq!(app.amount_input.value(), "50");
        let toast = app.notifications.current().unwrap();
        assert_eq!(toast.title(), "Error");
        assert_eq!(toast.message, "Date and amount are required");
        assert_eq!(toast.duration, std::time::Duration::from_secs(2));
    }

    #[test]
    fn test_edit_and_update() {
        let temp = TempDir::new().unwrap();
        let mut app = test_app(&temp);
        fill(&mut app, "2024-01-01", "1000");
        app.submit_form();

        app.focus = Focus::Table;
        app.edit_selected();
        assert_eq!(app.submit_label(), "Update Transaction");
        assert_eq!(app.amount_input.value(), "1000");

        fill(&mut app, "2024-01-05", "900");
        app.cycle_type(true);
        app.cycle_category(false);
        app.submit_form();

        assert_eq!(app.store.len(), 1);
        let txn = &app.store.transactions()[0];
        assert_eq!(txn.date, "2024-01-05");
        assert_eq!(txn.amount, "900");
        assert_eq!(txn.kind, TransactionType::Expense);
        assert_eq!(txn.category, Category::Bills);
        assert_eq!(app.submit_label(), "Add Transaction");
    }

    #[test]
    fn test_deleting_row_under_edit_resets_form() {
        let temp = TempDir::new().unwrap();
        let mut app = test_app(&temp);
        fill(&mut app, "2024-01-01", "1000");
        app.submit_form();

        app.edit_selected();
        assert!(app.form.is_editing());
        app.delete_selected();

        assert!(app.store.is_empty());
        assert!(!app.form.is_editing());
        assert_eq!(app.amount_input.value(), "");
    }

    #[test]
    fn test_edit_with_empty_table_gives_blank_draft() {
        let temp = TempDir::new().unwrap();
        let mut app = test_app(&temp);
        fill(&mut app, "2024-01-01", "5");

        app.edit_selected();
        assert_eq!(app.form.draft(), &Draft::default());
    }

    #[test]
    fn test_step_date() {
        let temp = TempDir::new().unwrap();
        let mut app = test_app(&temp);
        fill(&mut app, "2024-02-28", "1");

        app.step_date(1);
        assert_eq!(app.form.draft().date, "2024-02-29");
        app.step_date(-2);
        assert_eq!(app.date_input.value(), "2024-02-27");
    }

    #[test]
    fn test_step_date_from_empty_is_today() {
        let temp = TempDir::new().unwrap();
        let mut app = test_app(&temp);

        app.step_date(1);
        let today = Local::now().date_naive().format(DATE_FORMAT).to_string();
        assert_eq!(app.form.draft().date, today);
    }

    #[test]
    fn test_export_writes_file() {
        let temp = TempDir::new().unwrap();
        let mut app = test_app(&temp);
        fill(&mut app, "2024-01-01", "1000");
        app.submit_form();

        app.export();

        let exported = export::read_export(&app.paths.export_file()).unwrap();
        assert_eq!(exported.as_slice(), app.store.transactions());
    }

    #[test]
    fn test_selection_bounds() {
        let temp = TempDir::new().unwrap();
        let mut app = test_app(&temp);
        for amount in ["1", "2", "3"] {
            fill(&mut app, "2024-01-01", amount);
            app.submit_form();
        }

        app.selected_index = 0;
        app.move_up();
        assert_eq!(app.selected_index, 0);
        app.move_down();
        app.move_down();
        app.move_down();
        assert_eq!(app.selected_index, 2);

        app.delete_selected();
        assert_eq!(app.selected_index, 1);
    }

    #[test]
    fn test_unwritable_audit_log_warns_but_keeps_change() {
        let temp = TempDir::new().unwrap();
        let paths = LedgerPaths::with_dirs(temp.path().join("cfg"), temp.path().join("out"));
        let store = LedgerStore::new().with_audit(AuditLogger::new(temp.path().to_path_buf()));
        let mut app = App::new(store, Settings::default(), paths);
        fill(&mut app, "2024-01-01", "1000");

        app.submit_form();

        assert_eq!(app.store.len(), 1);
        assert_eq!(app.form.draft(), &Draft::default());
        let toast = app.notifications.current().unwrap();
        assert_eq!(toast.notification_type, NotificationType::Error);
        assert!(toast.message.starts_with("Transaction added, but the audit log"));
    }
}

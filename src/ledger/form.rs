//! Form state manager
//!
//! Holds the draft transaction being composed or edited. A draft with an id
//! is an edit of that transaction; a draft without one creates a new entry.

use crate::models::{Category, Transaction, TransactionId, TransactionType};

/// The in-progress transaction
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Draft {
    pub date: String,
    pub amount: String,
    pub kind: TransactionType,
    pub category: Category,
    /// Set while editing an existing transaction
    pub id: Option<TransactionId>,
}

impl Draft {
    /// Both required fields have content
    pub fn has_required_fields(&self) -> bool {
        !self.date.is_empty() && !self.amount.is_empty()
    }

    /// Copy every field of an existing transaction, id included
    pub fn from_transaction(txn: &Transaction) -> Self {
        Self {
            date: txn.date.clone(),
            amount: txn.amount.clone(),
            kind: txn.kind,
            category: txn.category,
            id: Some(txn.id),
        }
    }

    /// Build a committed record from this draft under the given id
    pub fn to_transaction(&self, id: TransactionId) -> Transaction {
        Transaction::new(id, &self.date, &self.amount, self.kind, self.category)
    }
}

/// A single-field update to the draft
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    Date(String),
    Amount(String),
    Type(TransactionType),
    Category(Category),
}

/// Owns the draft and the operations allowed on it
#[derive(Debug, Clone, Default)]
pub struct FormState {
    draft: Draft,
}

impl FormState {
    /// Create a form holding the default draft
    pub fn new() -> Self {
        Self::default()
    }

    /// Current draft
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Update exactly one field, leaving the others untouched
    pub fn set_field(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Date(date) => self.draft.date = date,
            FieldUpdate::Amount(amount) => self.draft.amount = amount,
            FieldUpdate::Type(kind) => self.draft.kind = kind,
            FieldUpdate::Category(category) => self.draft.category = category,
        }
    }

    /// Replace the whole draft with a copy of `txn` (enters edit mode)
    pub fn load(&mut self, txn: &Transaction) {
        self.draft = Draft::from_transaction(txn);
    }

    /// Restore the default draft
    pub fn reset(&mut self) {
        self.draft = Draft::default();
    }

    /// Whether the draft targets an existing transaction
    pub fn is_editing(&self) -> bool {
        self.draft.id.is_some()
    }

    /// Id of the transaction being edited, if any
    pub fn editing_id(&self) -> Option<TransactionId> {
        self.draft.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_draft() {
        let form = FormState::new();
        let draft = form.draft();
        assert_eq!(draft.date, "");
        assert_eq!(draft.amount, "");
        assert_eq!(draft.kind, TransactionType::Income);
        assert_eq!(draft.category, Category::Salary);
        assert!(draft.id.is_none());
        assert!(!form.is_editing());
    }

    #[test]
    fn test_set_field_touches_one_field() {
        let mut form = FormState::new();
        form.set_field(FieldUpdate::Amount("50".into()));
        assert_eq!(form.draft().amount, "50");
        assert_eq!(form.draft().date, "");

        form.set_field(FieldUpdate::Type(TransactionType::Expense));
        assert_eq!(form.draft().kind, TransactionType::Expense);
        assert_eq!(form.draft().amount, "50");
        assert_eq!(form.draft().category, Category::Salary);
    }

    #[test]
    fn test_set_field_accepts_empty() {
        let mut form = FormState::new();
        form.set_field(FieldUpdate::Date("2024-01-01".into()));
        form.set_field(FieldUpdate::Date(String::new()));
        assert_eq!(form.draft().date, "");
    }

    #[test]
    fn test_reset_after_edits() {
        let mut form = FormState::new();
        form.set_field(FieldUpdate::Date("2024-03-01".into()));
        form.set_field(FieldUpdate::Amount("12.5".into()));
        form.set_field(FieldUpdate::Category(Category::Bills));
        form.load(&Transaction::new(
            TransactionId::from_raw(9),
            "2024-01-01",
            "3",
            TransactionType::Expense,
            Category::Groceries,
        ));

        form.reset();
        assert_eq!(form.draft(), &Draft::default());

        form.reset();
        assert_eq!(form.draft(), &Draft::default());
    }

    #[test]
    fn test_load_copies_id() {
        let txn = Transaction::new(
            TransactionId::from_raw(5),
            "2024-02-02",
            "75",
            TransactionType::Expense,
            Category::Bills,
        );
        let mut form = FormState::new();
        form.load(&txn);

        assert!(form.is_editing());
        assert_eq!(form.editing_id(), Some(TransactionId::from_raw(5)));
        assert_eq!(form.draft().to_transaction(txn.id), txn);
    }

    #[test]
    fn test_required_fields() {
        let mut draft = Draft::default();
        assert!(!draft.has_required_fields());
        draft.amount = "50".into();
        assert!(!draft.has_required_fields());
        draft.date = "2024-01-01".into();
        assert!(draft.has_required_fields());
    }
}

//! Transaction store
//!
//! The ordered collection of committed transactions. Insertion order is
//! display order; updates replace a record in place.

use std::collections::HashSet;

use chrono::Utc;

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Transaction, TransactionId};

use super::form::Draft;

/// What a successful submit did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(TransactionId),
    Updated(TransactionId),
}

impl SubmitOutcome {
    /// Id of the affected transaction
    pub fn id(&self) -> TransactionId {
        match self {
            Self::Created(id) | Self::Updated(id) => *id,
        }
    }
}

/// Time-derived, strictly increasing id source
///
/// Ids start from the wall clock in milliseconds but never repeat: two
/// creations within the same millisecond get consecutive values.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    /// Create a generator that will hand out ids greater than `last`
    pub fn starting_after(last: u64) -> Self {
        Self { last }
    }

    /// Next id, or `None` once the id space is used up
    pub fn next_id(&mut self) -> Option<TransactionId> {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        self.last = now.max(self.last.checked_add(1)?);
        Some(TransactionId::from_raw(self.last))
    }
}

/// In-memory ledger
#[derive(Debug, Default)]
pub struct LedgerStore {
    transactions: Vec<Transaction>,
    ids: IdGenerator,
    audit: Option<AuditLogger>,
    audit_error: Option<LedgerError>,
}

impl LedgerStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with existing records, e.g. read back from an export
    ///
    /// # Errors
    ///
    /// Returns `Duplicate` if two records share an id.
    pub fn from_transactions(transactions: Vec<Transaction>) -> LedgerResult<Self> {
        let mut seen = HashSet::with_capacity(transactions.len());
        if let Some(dup) = transactions.iter().find(|t| !seen.insert(t.id)) {
            return Err(LedgerError::Duplicate {
                entity_type: "Transaction",
                identifier: dup.id.to_string(),
            });
        }

        let last = transactions.iter().map(|t| t.id.as_u64()).max().unwrap_or(0);
        Ok(Self {
            transactions,
            ids: IdGenerator::starting_after(last),
            ..Self::default()
        })
    }

    /// Record every change in the given audit log
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// All transactions in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Number of transactions
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Take the error from the last failed audit write, if any
    ///
    /// Audit failures never undo or block a change; they are parked here
    /// for the caller to report.
    pub fn take_audit_error(&mut self) -> Option<LedgerError> {
        self.audit_error.take()
    }

    /// Find a transaction by id
    pub fn find(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Commit a draft
    ///
    /// A draft without an id, or whose id no longer matches any record,
    /// is appended under a fresh id. A draft whose id matches replaces
    /// that record wholesale, keeping its position.
    pub fn submit(&mut self, draft: &Draft) -> LedgerResult<SubmitOutcome> {
        if !draft.has_required_fields() {
            return Err(LedgerError::missing_required_fields());
        }

        let position = draft
            .id
            .and_then(|id| self.transactions.iter().position(|t| t.id == id));

        match (draft.id, position) {
            (Some(id), Some(index)) => {
                let updated = draft.to_transaction(id);
                let entry = AuditEntry::update(id, &self.transactions[index], &updated);
                self.transactions[index] = updated;
                self.record(entry);
                Ok(SubmitOutcome::Updated(id))
            }
            _ => {
                let id = self.fresh_id()?;
                let created = draft.to_transaction(id);
                let entry = AuditEntry::create(id, &created);
                self.transactions.push(created);
                self.record(entry);
                Ok(SubmitOutcome::Created(id))
            }
        }
    }

    /// Delete a transaction; absent ids are ignored
    pub fn remove(&mut self, id: TransactionId) -> Option<Transaction> {
        let index = self.transactions.iter().position(|t| t.id == id)?;
        let removed = self.transactions.remove(index);
        self.record(AuditEntry::delete(id, &removed));
        Some(removed)
    }

    fn record(&mut self, entry: AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(&entry) {
                self.audit_error = Some(e);
            }
        }
    }

    fn fresh_id(&mut self) -> LedgerResult<TransactionId> {
        // Generated ids strictly increase, so a collision can only come from
        // a seeded record; each retry moves past one of them.
        for _ in 0..=self.transactions.len() {
            let id = self
                .ids
                .next_id()
                .ok_or_else(|| LedgerError::Storage("No transaction ids left".into()))?;
            if self.find(id).is_none() {
                return Ok(id);
            }
        }
        Err(LedgerError::Storage("Could not allocate a transaction id".into()))
    }
}

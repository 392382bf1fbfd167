//! Audit logging
//!
//! Records every create, update and delete on the ledger with before/after
//! snapshots in an append-only JSONL file. Disabled unless a log path is
//! configured.
//!
//! # Example
//!
//! ```rust,ignore
//! use ledger::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(audit_log_path);
//! logger.log(&AuditEntry::create(txn.id, &txn))?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;

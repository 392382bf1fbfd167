//! Ledger Form - a terminal income/expense ledger
//!
//! This library provides the core of the `ledger` application: a form for
//! composing transactions, an in-memory store of committed transactions,
//! the running balance, and a JSON exporter.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `ledger`: Form state, transaction store and balance calculation
//! - `models`: The transaction record and its identifiers
//! - `export`: `transactions.json` writer and reader
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `audit`: Opt-in audit logging
//! - `tui`: The interactive form
//! - `cli`, `display`: Non-interactive commands and their output
//!
//! # Example
//!
//! ```rust,ignore
//! use ledger::ledger::{commit, FieldUpdate, FormState, LedgerStore};
//!
//! let mut store = LedgerStore::new();
//! let mut form = FormState::new();
//! form.set_field(FieldUpdate::Date("2024-01-01".into()));
//! form.set_field(FieldUpdate::Amount("1000".into()));
//! commit(&mut store, &mut form)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod ledger;
pub mod models;
pub mod tui;

pub use error::{LedgerError, LedgerResult};

//! Core data models for the ledger
//!
//! The ledger has a single entity: a transaction with a date, an amount,
//! a type (income/expense) and a category.

pub mod ids;
pub mod transaction;

pub use ids::TransactionId;
pub use transaction::{Category, Transaction, TransactionType};

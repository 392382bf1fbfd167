//! Display formatting for terminal output
//!
//! Formats ledgers for the non-interactive commands.

pub mod transaction;

pub use transaction::{format_balance_line, format_transaction_table};

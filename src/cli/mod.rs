//! CLI command handlers
//!
//! Non-interactive commands working on exported ledger files and the audit
//! log, bridging the clap argument parsing with the library.

pub mod audit;
pub mod config;
pub mod file;

pub use audit::handle_audit_command;
pub use config::handle_config_command;
pub use file::{handle_balance_command, handle_show_command};

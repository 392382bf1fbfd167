//! CLI commands for exported ledger files
//!
//! Both commands read a `transactions.json` written by the TUI (or any
//! JSON array of the same shape) and print to stdout.

use std::path::Path;

use crate::config::Settings;
use crate::display::{format_balance_line, format_transaction_table};
use crate::error::{LedgerError, LedgerResult};
use crate::export::read_export;
use crate::models::Transaction;

fn load(path: &Path) -> LedgerResult<Vec<Transaction>> {
    if !path.exists() {
        return Err(LedgerError::Io(format!(
            "File not found: {}",
            path.display()
        )));
    }
    read_export(path)
}

/// Build the output of `ledger balance`
pub fn balance_report(path: &Path, settings: &Settings) -> LedgerResult<String> {
    let transactions = load(path)?;
    Ok(format_balance_line(&settings.currency_symbol, &transactions))
}

/// Build the output of `ledger show`
pub fn show_report(path: &Path, settings: &Settings) -> LedgerResult<String> {
    let transactions = load(path)?;
    let mut output = format_transaction_table(&transactions);
    output.push('\n');
    output.push_str(&format_balance_line(&settings.currency_symbol, &transactions));
    Ok(output)
}

/// Handle `ledger balance <FILE>`
pub fn handle_balance_command(path: &Path, settings: &Settings) -> LedgerResult<()> {
    println!("{}", balance_report(path, settings)?);
    Ok(())
}

/// Handle `ledger show <FILE>`
pub fn handle_show_command(path: &Path, settings: &Settings) -> LedgerResult<()> {
    println!("{}", show_report(path, settings)?);
    Ok(())
}

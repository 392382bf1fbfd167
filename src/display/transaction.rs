//! Transaction display formatting
//!
//! Renders a ledger as a text table for the `show` command, and the
//! `Total Balance` line shared with the TUI status bar.

use tabled::{settings::Style, Table, Tabled};

use crate::ledger::{format_balance, total_balance};
use crate::models::Transaction;

/// Printed instead of a table when there is nothing to show
pub const NO_TRANSACTIONS: &str = "No transactions found.";

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Type")]
    kind: &'static str,
    #[tabled(rename = "Category")]
    category: &'static str,
}

impl From<&Transaction> for TransactionRow {
    fn from(txn: &Transaction) -> Self {
        Self {
            id: txn.id.to_string(),
            date: txn.date.clone(),
            amount: txn.amount.clone(),
            kind: txn.kind.as_str(),
            category: txn.category.as_str(),
        }
    }
}

/// Format transactions as a table, in the order given
pub fn format_transaction_table(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return NO_TRANSACTIONS.to_string();
    }

    let rows: Vec<TransactionRow> = transactions.iter().map(TransactionRow::from).collect();
    Table::new(rows).with(Style::modern()).to_string()
}

/// `Total Balance: <symbol><amount>` for the given transactions
pub fn format_balance_line(currency_symbol: &str, transactions: &[Transaction]) -> String {
    format!(
        "Total Balance: {}{}",
        currency_symbol,
        format_balance(total_balance(transactions))
    )
}

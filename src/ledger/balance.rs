//! Balance calculation
//!
//! Income adds its amount, expense subtracts it. Amounts are parsed only
//! here; anything that isn't a number yields NaN and the NaN carries through
//! the rest of the fold.

use crate::models::{Transaction, TransactionType};

/// Parse an amount as entered; malformed input becomes NaN
pub fn parse_amount(amount: &str) -> f64 {
    amount.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Signed contribution of one transaction
pub fn signed_amount(txn: &Transaction) -> f64 {
    let value = parse_amount(&txn.amount);
    match txn.kind {
        TransactionType::Income => value,
        TransactionType::Expense => -value,
    }
}

/// Continue a balance fold from `start`
pub fn fold_balance<'a, I>(start: f64, transactions: I) -> f64
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions
        .into_iter()
        .fold(start, |balance, txn| balance + signed_amount(txn))
}

/// Total balance of the ledger, starting from zero
pub fn total_balance(transactions: &[Transaction]) -> f64 {
    fold_balance(0.0, transactions)
}

/// Two decimal places, as displayed
///
/// Overflowed totals print as `Infinity` / `-Infinity`.
pub fn format_balance(balance: f64) -> String {
    if balance.is_infinite() {
        let sign = if balance < 0.0 { "-" } else { "" };
        return format!("{}Infinity", sign);
    }
    format!("{:.2}", balance)
}

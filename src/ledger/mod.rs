//! The ledger form core
//!
//! Two state containers, the form draft ([`FormState`]) and the committed
//! transactions ([`LedgerStore`]), plus the pure balance fold. The TUI holds
//! one of each and hands them to the views by reference.

pub mod balance;
pub mod form;
pub mod store;

pub use balance::{fold_balance, format_balance, parse_amount, total_balance};
pub use form::{Draft, FieldUpdate, FormState};
pub use store::{IdGenerator, LedgerStore, SubmitOutcome};

use crate::error::LedgerResult;

/// Submit the current draft and reset the form on success
///
/// On failure the draft is left exactly as typed.
pub fn commit(store: &mut LedgerStore, form: &mut FormState) -> LedgerResult<SubmitOutcome> {
    let outcome = store.submit(form.draft())?;
    form.reset();
    Ok(outcome)
}

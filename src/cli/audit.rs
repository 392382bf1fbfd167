//! `ledger audit`
//!
//! Prints the tail of the audit log written by the interactive form.

use crate::audit::AuditLogger;
use crate::error::LedgerResult;

/// Recent audit entries, oldest first, as printed by `ledger audit`
pub fn audit_report(logger: &AuditLogger, count: usize) -> LedgerResult<String> {
    if !logger.exists() {
        return Ok(format!(
            "No audit entries found in {}",
            logger.path().display()
        ));
    }

    let entries = logger.read_recent(count)?;
    let mut lines = vec![format!(
        "Audit log: {} (last {} entries)",
        logger.path().display(),
        entries.len()
    )];
    lines.extend(entries.iter().map(|entry| entry.format_human_readable()));
    Ok(lines.join("\n"))
}

/// Handle `ledger audit`
pub fn handle_audit_command(logger: &AuditLogger, count: usize) -> LedgerResult<()> {
    println!("{}", audit_report(logger, count)?);
    Ok(())
}

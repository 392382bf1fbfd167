//! JSON Export functionality
//!
//! Writes the ledger as a bare JSON array of transactions, the same shape
//! the file is read back in.

use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::error::{LedgerError, LedgerResult};
use crate::models::Transaction;

/// Name of the exported file
pub const EXPORT_FILE_NAME: &str = "transactions.json";

/// Serialize transactions to a writer
pub fn export_transactions_json<W: Write>(
    transactions: &[Transaction],
    writer: &mut W,
    pretty: bool,
) -> LedgerResult<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, transactions)
    } else {
        serde_json::to_writer(writer, transactions)
    }
    .map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}

/// Write `transactions.json` into `dir`, replacing a previous export
///
/// Returns the path of the written file.
pub fn export_to_dir(transactions: &[Transaction], dir: &Path, pretty: bool) -> LedgerResult<PathBuf> {
    fs::create_dir_all(dir).map_err(|e| {
        LedgerError::Export(format!("Failed to create directory {}: {}", dir.display(), e))
    })?;

    let path = dir.join(EXPORT_FILE_NAME);
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| LedgerError::Export(format!("Failed to create temp file: {}", e)))?;
    let mut writer = BufWriter::new(file);

    export_transactions_json(transactions, &mut writer, pretty)?;

    writer
        .flush()
        .map_err(|e| LedgerError::Export(format!("Failed to flush export: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| LedgerError::Export(format!("Failed to sync export: {}", e)))?;

    fs::rename(&temp_path, &path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        LedgerError::Export(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(path)
}

/// Parse an exported ledger
pub fn import_from_json(json_str: &str) -> LedgerResult<Vec<Transaction>> {
    serde_json::from_str(json_str).map_err(LedgerError::from)
}

/// Read an exported ledger from disk
pub fn read_export(path: &Path) -> LedgerResult<Vec<Transaction>> {
    let mut contents = String::new();
    File::open(path)
        .and_then(|mut f| f.read_to_string(&mut contents))
        .map_err(|e| LedgerError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

    import_from_json(&contents)
}

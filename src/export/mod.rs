//! Export module
//!
//! Saves the ledger as `transactions.json` and reads such files back.

pub mod json;

pub use json::{
    export_to_dir, export_transactions_json, import_from_json, read_export, EXPORT_FILE_NAME,
};

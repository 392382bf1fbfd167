//! Transaction identifiers
//!
//! Ids are plain integers on the wire (the exported file carries them as JSON
//! numbers) but a newtype in code so they can't be mixed up with amounts or
//! row indexes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier of a committed transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(u64);

impl TransactionId {
    /// Create an ID from a raw value
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the underlying value
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "txn-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let id = TransactionId::from_raw(1_700_000_000_000);
        assert_eq!(id.to_string(), "txn-1700000000000");
    }

    #[test]
    fn test_id_serializes_as_number() {
        let id = TransactionId::from_raw(42);
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
        let back: TransactionId = serde_json::from_str("42").unwrap();
        assert_eq!(back, id);
    }
}

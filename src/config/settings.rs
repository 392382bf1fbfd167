//! User settings
//!
//! Display and export preferences, stored as JSON in the config directory.

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Symbol printed before the total balance
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// How long notifications stay on screen
    #[serde(default = "default_notification_secs")]
    pub notification_duration_secs: u64,

    /// Pretty-print exported JSON
    #[serde(default)]
    pub pretty_export: bool,

    /// Write the audit log to the config directory
    #[serde(default)]
    pub audit_log: bool,
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_notification_secs() -> u64 {
    2
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            notification_duration_secs: default_notification_secs(),
            pretty_export: false,
            audit_log: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist
    pub fn load(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| LedgerError::Config(format!("Failed to parse settings file: {}", e)))
    }
}

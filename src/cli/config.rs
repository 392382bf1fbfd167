//! `ledger config`

use std::path::Path;

use crate::config::{LedgerPaths, Settings};

/// Resolved configuration as printed by `ledger config`
pub fn config_report(paths: &LedgerPaths, settings: &Settings, audit_log: Option<&Path>) -> String {
    let audit = match audit_log {
        Some(path) => path.display().to_string(),
        None => "disabled".to_string(),
    };

    [
        "Ledger Form Configuration".to_string(),
        "=========================".to_string(),
        format!("Config directory: {}", paths.config_dir().display()),
        format!("Settings file:    {}", paths.settings_file().display()),
        format!("Export file:      {}", paths.export_file().display()),
        format!("Audit log:        {}", audit),
        String::new(),
        "Settings:".to_string(),
        format!("  Currency symbol:       {}", settings.currency_symbol),
        format!("  Notification duration: {}s", settings.notification_duration_secs),
        format!("  Pretty export:         {}", settings.pretty_export),
    ]
    .join("\n")
}

/// Handle `ledger config`
pub fn handle_config_command(paths: &LedgerPaths, settings: &Settings, audit_log: Option<&Path>) {
    println!("{}", config_report(paths, settings, audit_log));
}

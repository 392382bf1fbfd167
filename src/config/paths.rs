//! Path management
//!
//! ## Path Resolution Order
//!
//! Config directory:
//! 1. `LEDGER_FORM_CONFIG_DIR` environment variable (if set)
//! 2. The platform config directory for `ledger-form`
//!
//! Export directory:
//! 1. An explicit directory (`--export-dir`)
//! 2. `LEDGER_FORM_EXPORT_DIR` environment variable (if set)
//! 3. The user's download directory
//! 4. The current directory

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use directories::{ProjectDirs, UserDirs};

use crate::error::LedgerError;
use crate::export::EXPORT_FILE_NAME;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "LEDGER_FORM_CONFIG_DIR";

/// Environment variable overriding the export directory
pub const EXPORT_DIR_ENV: &str = "LEDGER_FORM_EXPORT_DIR";

/// Manages all paths used by the ledger
#[derive(Debug, Clone)]
pub struct LedgerPaths {
    config_dir: PathBuf,
    export_dir: PathBuf,
}

impl LedgerPaths {
    /// Resolve paths from the environment and platform directories
    ///
    /// # Errors
    ///
    /// Returns an error if no config directory can be determined.
    pub fn new() -> Result<Self, LedgerError> {
        Self::from_overrides(
            std::env::var_os(CONFIG_DIR_ENV),
            std::env::var_os(EXPORT_DIR_ENV),
        )
    }

    /// Resolve paths from explicit overrides, falling back to platform
    /// directories for whichever is `None`
    pub fn from_overrides(
        config_dir: Option<OsString>,
        export_dir: Option<OsString>,
    ) -> Result<Self, LedgerError> {
        let config_dir = match config_dir {
            Some(custom) => PathBuf::from(custom),
            None => ProjectDirs::from("", "", "ledger-form")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    LedgerError::Config("Could not determine a config directory".into())
                })?,
        };

        Ok(Self {
            config_dir,
            export_dir: export_dir.map_or_else(default_export_dir, PathBuf::from),
        })
    }

    /// Create paths rooted at explicit directories (useful for testing)
    pub fn with_dirs(config_dir: PathBuf, export_dir: PathBuf) -> Self {
        Self {
            config_dir,
            export_dir,
        }
    }

    /// Replace the export directory
    pub fn set_export_dir(&mut self, dir: PathBuf) {
        self.export_dir = dir;
    }

    /// Config directory
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Directory exports are written to
    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    /// Path of the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("config.json")
    }

    /// Default audit log location
    pub fn audit_log(&self) -> PathBuf {
        self.config_dir.join("audit.log")
    }

    /// Where the next export lands
    pub fn export_file(&self) -> PathBuf {
        self.export_dir.join(EXPORT_FILE_NAME)
    }
}

fn default_export_dir() -> PathBuf {
    UserDirs::new()
        .and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use ledger::audit::AuditLogger;
use ledger::cli::{
    handle_audit_command, handle_balance_command, handle_config_command, handle_show_command,
};
use ledger::config::{LedgerPaths, Settings};
use ledger::export::read_export;
use ledger::ledger::LedgerStore;

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "Terminal income and expense ledger",
    long_about = "Ledger Form records income and expense transactions in an \
                  interactive form, keeps a running balance, and exports the \
                  ledger to transactions.json."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory transactions.json is exported to
    #[arg(long, global = true, env = "LEDGER_FORM_EXPORT_DIR")]
    export_dir: Option<PathBuf>,

    /// Append an audit entry for every change to this file
    #[arg(long, global = true)]
    audit_log: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive form (default)
    #[command(alias = "ui")]
    Tui {
        /// Start from a previously exported transactions.json
        #[arg(long)]
        open: Option<PathBuf>,
    },

    /// Print the total balance of an exported ledger
    Balance {
        /// Path to a transactions.json file
        file: PathBuf,
    },

    /// Print an exported ledger as a table
    Show {
        /// Path to a transactions.json file
        file: PathBuf,
    },

    /// Print the most recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut paths = LedgerPaths::new()?;
    if let Some(dir) = cli.export_dir {
        paths.set_export_dir(dir);
    }
    let settings = Settings::load(&paths)?;

    let audit_log = cli
        .audit_log
        .or_else(|| settings.audit_log.then(|| paths.audit_log()));

    match cli.command {
        Some(Commands::Balance { file }) => handle_balance_command(&file, &settings)?,
        Some(Commands::Show { file }) => handle_show_command(&file, &settings)?,
        Some(Commands::Audit { count }) => {
            let logger = AuditLogger::new(audit_log.unwrap_or_else(|| paths.audit_log()));
            handle_audit_command(&logger, count)?;
        }
        Some(Commands::Config) => handle_config_command(&paths, &settings, audit_log.as_deref()),
        Some(Commands::Tui { open }) => run_form(open, audit_log, settings, paths)?,
        None => run_form(None, audit_log, settings, paths)?,
    }

    Ok(())
}

fn run_form(
    open: Option<PathBuf>,
    audit_log: Option<PathBuf>,
    settings: Settings,
    paths: LedgerPaths,
) -> Result<()> {
    let mut store = match open {
        Some(file) => LedgerStore::from_transactions(read_export(&file)?)?,
        None => LedgerStore::new(),
    };
    if let Some(path) = audit_log {
        store = store.with_audit(AuditLogger::new(path));
    }
    ledger::tui::run_tui(store, settings, paths)
}

//! CLI error handling

use domain_ledger::LedgerError;
use thiserror::Error;

/// Errors that end a CLI run
///
/// Domain rejections (insufficient funds, unknown accounts) are rendered as
/// menu messages and never surface here; only terminal I/O failures and
/// storage failures abort the loop.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

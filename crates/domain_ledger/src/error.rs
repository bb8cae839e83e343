//! Ledger domain errors

use thiserror::Error;

use core_kernel::{AccountId, Money, MoneyError, PortError};

/// Errors that can occur in the ledger domain
///
/// Domain violations (`AccountNotFound`, `DestinationNotFound`,
/// `InsufficientFunds`, `InvalidAmount`, `InvalidInput`) are expected
/// outcomes reported back to the caller; `Storage` wraps a persistence
/// failure that aborted the current operation.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Account not found
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    /// Transfer destination not found
    #[error("Destination account not found: {0}")]
    DestinationNotFound(String),

    /// Withdrawal or transfer exceeds the available balance
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: Money, available: Money },

    /// Non-positive or otherwise unusable amount
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Invalid caller input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Underlying storage failure
    #[error("Storage failure: {0}")]
    Storage(#[from] PortError),
}

impl LedgerError {
    /// Creates an InvalidAmount error
    pub fn invalid_amount(message: impl Into<String>) -> Self {
        LedgerError::InvalidAmount(message.into())
    }

    /// Creates an InvalidInput error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        LedgerError::InvalidInput(message.into())
    }

    /// Returns true if this error is a storage failure rather than a
    /// domain violation
    pub fn is_storage(&self) -> bool {
        matches!(self, LedgerError::Storage(_))
    }

    /// Returns true if this error reports a missing account on either
    /// side of an operation
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            LedgerError::AccountNotFound(_) | LedgerError::DestinationNotFound(_)
        )
    }

    /// Maps a port failure from looking up `id`, turning NotFound into
    /// AccountNotFound and passing everything else through as Storage
    pub(crate) fn account_lookup(error: PortError, id: AccountId) -> Self {
        if error.is_not_found() {
            LedgerError::AccountNotFound(id.to_string())
        } else {
            LedgerError::Storage(error)
        }
    }

    /// Like [`LedgerError::account_lookup`], for the destination side of
    /// a transfer
    pub(crate) fn destination_lookup(error: PortError, id: AccountId) -> Self {
        if error.is_not_found() {
            LedgerError::DestinationNotFound(id.to_string())
        } else {
            LedgerError::Storage(error)
        }
    }
}

impl From<MoneyError> for LedgerError {
    fn from(error: MoneyError) -> Self {
        LedgerError::InvalidAmount(error.to_string())
    }
}

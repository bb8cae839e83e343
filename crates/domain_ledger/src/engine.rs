//! Transaction engine
//!
//! This module applies balance-changing operations to accounts:
//! withdrawals, deposits, and transfers. Every successful operation hands
//! the balance delta and the movement row to the store as one atomic unit.

use std::sync::Arc;

use core_kernel::{AccountId, Money};

use crate::account::Account;
use crate::error::LedgerError;
use crate::movement::{Movement, MovementKind};
use crate::ports::LedgerStore;

/// Applies withdrawals, deposits, and transfers to accounts
///
/// The engine validates amounts and balances before touching storage, so a
/// rejected operation never leaves a partial write behind.
///
/// # Invariants
///
/// - Balances never go negative
/// - Every balance change is mirrored by a signed movement row, one per
///   affected account
#[derive(Clone)]
pub struct TransactionEngine {
    store: Arc<dyn LedgerStore>,
}

impl TransactionEngine {
    /// Creates an engine backed by the given store
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self { store }
    }

    /// Withdraws a positive amount from an account
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if the amount is zero or negative
    /// - `AccountNotFound` if the account does not exist
    /// - `InsufficientFunds` if the balance does not cover the amount
    ///
    /// # Returns
    ///
    /// The balance after the withdrawal
    pub async fn withdraw(&self, id: AccountId, amount: Money) -> Result<Money, LedgerError> {
        require_positive(amount)?;

        let account = self.account(id).await?;
        if account.balance < amount {
            return Err(LedgerError::InsufficientFunds {
                requested: amount,
                available: account.balance,
            });
        }

        let kind = MovementKind::Withdraw;
        self.store.record_movement(id, kind, kind.signed(amount)).await?;
        Ok(account.balance - amount)
    }

    /// Deposits a positive amount into an account
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if the amount is zero or negative, or if the
    ///   deposit would overflow the balance (detected before any write)
    /// - `AccountNotFound` if the account does not exist
    ///
    /// # Returns
    ///
    /// The balance after the deposit
    pub async fn deposit(&self, id: AccountId, amount: Money) -> Result<Money, LedgerError> {
        require_positive(amount)?;

        let account = self.account(id).await?;
        let updated = account.balance.checked_add(&amount)?;

        let kind = MovementKind::Deposit;
        self.store.record_movement(id, kind, kind.signed(amount)).await?;
        Ok(updated)
    }

    /// Moves a positive amount from `source` to `destination`
    ///
    /// The store debits the source, credits the destination, and records
    /// the Transfer Out / Transfer In pair atomically. Transferring to the
    /// source account itself is allowed and nets to zero.
    ///
    /// # Errors
    ///
    /// - `DestinationNotFound` if the destination does not exist
    /// - `InvalidAmount` if the amount is zero or negative
    /// - `AccountNotFound` if the source does not exist
    /// - `InsufficientFunds` if the source balance does not cover the amount
    pub async fn transfer(
        &self,
        source: AccountId,
        destination: AccountId,
        amount: Money,
    ) -> Result<(), LedgerError> {
        // The destination resolves first; a missing destination is reported
        // even when the amount is unusable.
        self.store
            .get_account(destination)
            .await
            .map_err(|e| LedgerError::destination_lookup(e, destination))?;

        require_positive(amount)?;

        let source_account = self.account(source).await?;
        if source_account.balance < amount {
            return Err(LedgerError::InsufficientFunds {
                requested: amount,
                available: source_account.balance,
            });
        }

        Ok(self.store.record_transfer(source, destination, amount).await?)
    }

    /// Returns the current balance of an account
    pub async fn check_balance(&self, id: AccountId) -> Result<Money, LedgerError> {
        Ok(self.account(id).await?.balance)
    }

    /// Returns an account's movements in creation order
    pub async fn movements(&self, id: AccountId) -> Result<Vec<Movement>, LedgerError> {
        self.account(id).await?;
        Ok(self.store.movements_for_account(id).await?)
    }

    async fn account(&self, id: AccountId) -> Result<Account, LedgerError> {
        self.store
            .get_account(id)
            .await
            .map_err(|e| LedgerError::account_lookup(e, id))
    }
}

fn require_positive(amount: Money) -> Result<(), LedgerError> {
    if !amount.is_positive() {
        return Err(LedgerError::invalid_amount(format!(
            "amount must be positive, got {amount}"
        )));
    }
    Ok(())
}

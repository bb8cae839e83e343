//! Account registry
//!
//! This module manages the account lifecycle: opening and closing accounts
//! and answering roster queries. Balance-changing operations live in the
//! transaction engine.

use std::sync::Arc;

use core_kernel::AccountId;

use crate::account::Account;
use crate::error::LedgerError;
use crate::ports::LedgerStore;

/// Manages the roster of client accounts
///
/// The registry validates caller input and delegates persistence to the
/// [`LedgerStore`] port. Closing an account removes the account together
/// with its movement history; other accounts are untouched.
#[derive(Clone)]
pub struct AccountRegistry {
    store: Arc<dyn LedgerStore>,
}

impl AccountRegistry {
    /// Creates a registry backed by the given store
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self { store }
    }

    /// Opens a new account with a zero balance
    ///
    /// The name is trimmed and must not be empty. A blank occupation is
    /// normalized to `None`.
    ///
    /// # Returns
    ///
    /// The newly created account snapshot
    pub async fn open_account(
        &self,
        name: &str,
        occupation: Option<&str>,
    ) -> Result<Account, LedgerError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LedgerError::invalid_input("account name must not be empty"));
        }

        let occupation = occupation
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string);

        let id = self.store.create_account(name.to_string(), occupation).await?;
        self.store
            .get_account(id)
            .await
            .map_err(|e| LedgerError::account_lookup(e, id))
    }

    /// Closes an account, deleting it together with its movement history
    pub async fn close_account(&self, id: AccountId) -> Result<(), LedgerError> {
        self.store
            .delete_account(id)
            .await
            .map_err(|e| LedgerError::account_lookup(e, id))
    }

    /// Retrieves an account snapshot
    pub async fn get_account(&self, id: AccountId) -> Result<Account, LedgerError> {
        self.store
            .get_account(id)
            .await
            .map_err(|e| LedgerError::account_lookup(e, id))
    }

    /// Lists all accounts in id order
    pub async fn list_accounts(&self) -> Result<Vec<Account>, LedgerError> {
        Ok(self.store.list_accounts().await?)
    }

    /// Counts the accounts currently held
    pub async fn count_accounts(&self) -> Result<u64, LedgerError> {
        Ok(self.store.count_accounts().await?)
    }
}

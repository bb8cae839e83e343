//! Ledger Domain Ports
//!
//! This module defines the port interface for the ledger domain, enabling
//! swappable storage implementations (embedded database, mock, etc.).
//!
//! # Architecture
//!
//! The `LedgerStore` trait defines all operations that the ledger domain
//! needs from its data source. Multiple adapters can implement this trait:
//!
//! - **SQLite Adapter**: Uses the embedded database (infra_db)
//! - **Mock Adapter**: In-memory state for testing without a database
//!
//! A balance change and its movement row form one atomic unit:
//! `record_movement` and `record_transfer` apply the balance deltas and
//! append the history rows together, so a reader can never observe a
//! balance that disagrees with the sum of the account's movements.
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_ledger::ports::LedgerStore;
//! use std::sync::Arc;
//!
//! // The transaction engine receives the port trait
//! pub struct TransactionEngine {
//!     store: Arc<dyn LedgerStore>,
//! }
//!
//! impl TransactionEngine {
//!     pub async fn check_balance(&self, id: AccountId) -> Result<Money, LedgerError> {
//!         Ok(self.store.get_account(id).await?.balance)
//!     }
//! }
//! ```

use async_trait::async_trait;

use core_kernel::{AccountId, DomainPort, Money, MovementId, PortError};

use crate::account::Account;
use crate::movement::{Movement, MovementKind};

/// The main port trait for ledger storage operations
///
/// This trait defines all operations that the ledger domain requires from
/// its underlying data source. The production implementation persists to
/// SQLite; the mock keeps state in memory.
///
/// All methods are async and return `Result<T, PortError>` for consistent
/// error handling across different adapter implementations.
#[async_trait]
pub trait LedgerStore: DomainPort {
    // ========================================================================
    // Account Operations
    // ========================================================================

    /// Creates a new account with a zero balance
    ///
    /// # Arguments
    ///
    /// * `name` - Display name for the account
    /// * `occupation` - Optional occupation label
    ///
    /// # Returns
    ///
    /// The storage-assigned identifier of the new account
    async fn create_account(
        &self,
        name: String,
        occupation: Option<String>,
    ) -> Result<AccountId, PortError>;

    /// Deletes an account together with its movement history
    ///
    /// # Arguments
    ///
    /// * `id` - The account identifier
    ///
    /// # Returns
    ///
    /// `PortError::NotFound` if no account has this id
    async fn delete_account(&self, id: AccountId) -> Result<(), PortError>;

    /// Retrieves an account snapshot by id
    ///
    /// # Returns
    ///
    /// The account if found, or `PortError::NotFound`
    async fn get_account(&self, id: AccountId) -> Result<Account, PortError>;

    /// Lists all accounts in id order
    async fn list_accounts(&self) -> Result<Vec<Account>, PortError>;

    /// Counts the accounts currently held
    async fn count_accounts(&self) -> Result<u64, PortError>;

    // ========================================================================
    // Movement Operations
    // ========================================================================

    /// Applies a signed amount to an account and appends the movement row
    ///
    /// The balance update and the history row are committed atomically.
    /// `amount` arrives with the movement's sign convention already applied
    /// (see [`MovementKind::signed`]): negative for outflows, positive for
    /// inflows.
    ///
    /// # Returns
    ///
    /// The storage-assigned identifier of the new movement, or
    /// `PortError::Conflict` if the update would drive the balance negative
    async fn record_movement(
        &self,
        account_id: AccountId,
        kind: MovementKind,
        amount: Money,
    ) -> Result<MovementId, PortError>;

    /// Moves a positive amount between two accounts atomically
    ///
    /// Debits `source`, credits `destination`, and appends the
    /// Transfer Out / Transfer In movement pair in a single transaction:
    /// either all four writes land or none do. Source and destination may
    /// be the same account, in which case the deltas net to zero.
    async fn record_transfer(
        &self,
        source: AccountId,
        destination: AccountId,
        amount: Money,
    ) -> Result<(), PortError>;

    /// Lists an account's movements in creation order
    ///
    /// Unknown accounts yield an empty list; existence checks belong to
    /// the caller.
    async fn movements_for_account(&self, id: AccountId) -> Result<Vec<Movement>, PortError>;
}

/// Mock implementation of LedgerStore for testing
///
/// This adapter stores accounts and movements in memory and is useful for
/// unit testing without a database dependency.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use chrono::Utc;
    use std::collections::BTreeMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    #[derive(Debug, Default)]
    struct MockState {
        /// Keyed by raw id so iteration yields id order
        accounts: BTreeMap<i64, Account>,
        movements: Vec<Movement>,
        next_account_id: i64,
        next_movement_id: i64,
    }

    /// In-memory mock implementation of LedgerStore
    ///
    /// Identifiers are assigned sequentially starting at 1, matching the
    /// autoincrement behavior of the database adapter.
    #[derive(Debug, Default)]
    pub struct MockLedgerStore {
        state: Arc<RwLock<MockState>>,
    }

    impl MockLedgerStore {
        /// Creates a new empty mock store
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates with zero-balance accounts for testing
        pub async fn with_accounts(names: &[&str]) -> Self {
            let store = Self::new();
            for name in names {
                let _ = store.create_account((*name).to_string(), None).await;
            }
            store
        }
    }

    impl DomainPort for MockLedgerStore {}

    fn apply_delta(account: &mut Account, delta: Money) -> Result<(), PortError> {
        let updated = account
            .balance
            .checked_add(&delta)
            .map_err(|e| PortError::internal(e.to_string()))?;
        if updated.is_negative() {
            return Err(PortError::conflict(format!(
                "balance of account {} cannot go negative",
                account.id
            )));
        }
        account.balance = updated;
        Ok(())
    }

    #[async_trait]
    impl LedgerStore for MockLedgerStore {
        async fn create_account(
            &self,
            name: String,
            occupation: Option<String>,
        ) -> Result<AccountId, PortError> {
            let mut state = self.state.write().await;
            state.next_account_id += 1;
            let id = AccountId::new(state.next_account_id);

            let mut account = Account::new(id, name);
            account.occupation = occupation;
            state.accounts.insert(id.value(), account);
            Ok(id)
        }

        async fn delete_account(&self, id: AccountId) -> Result<(), PortError> {
            let mut state = self.state.write().await;
            if state.accounts.remove(&id.value()).is_none() {
                return Err(PortError::not_found("Account", id));
            }
            state.movements.retain(|m| m.account_id != id);
            Ok(())
        }

        async fn get_account(&self, id: AccountId) -> Result<Account, PortError> {
            self.state
                .read()
                .await
                .accounts
                .get(&id.value())
                .cloned()
                .ok_or_else(|| PortError::not_found("Account", id))
        }

        async fn list_accounts(&self) -> Result<Vec<Account>, PortError> {
            Ok(self.state.read().await.accounts.values().cloned().collect())
        }

        async fn count_accounts(&self) -> Result<u64, PortError> {
            Ok(self.state.read().await.accounts.len() as u64)
        }

        async fn record_movement(
            &self,
            account_id: AccountId,
            kind: MovementKind,
            amount: Money,
        ) -> Result<MovementId, PortError> {
            let mut state = self.state.write().await;
            let account = state
                .accounts
                .get_mut(&account_id.value())
                .ok_or_else(|| PortError::not_found("Account", account_id))?;
            apply_delta(account, amount)?;

            state.next_movement_id += 1;
            let movement_id = MovementId::new(state.next_movement_id);
            state
                .movements
                .push(Movement::new(movement_id, account_id, kind, amount, Utc::now()));
            Ok(movement_id)
        }

        async fn record_transfer(
            &self,
            source: AccountId,
            destination: AccountId,
            amount: Money,
        ) -> Result<(), PortError> {
            let mut state = self.state.write().await;

            // Both ends must exist before any delta is applied, so a failed
            // transfer leaves the state untouched.
            if !state.accounts.contains_key(&destination.value()) {
                return Err(PortError::not_found("Account", destination));
            }
            let source_account = state
                .accounts
                .get_mut(&source.value())
                .ok_or_else(|| PortError::not_found("Account", source))?;
            apply_delta(source_account, -amount)?;

            // Deltas apply in sequence; a self transfer debits then credits
            // the same balance and nets to zero.
            let destination_account = state
                .accounts
                .get_mut(&destination.value())
                .ok_or_else(|| PortError::not_found("Account", destination))?;
            apply_delta(destination_account, amount)?;

            state.next_movement_id += 1;
            let out_id = MovementId::new(state.next_movement_id);
            state.movements.push(Movement::new(
                out_id,
                source,
                MovementKind::TransferOut,
                -amount,
                Utc::now(),
            ));

            state.next_movement_id += 1;
            let in_id = MovementId::new(state.next_movement_id);
            state.movements.push(Movement::new(
                in_id,
                destination,
                MovementKind::TransferIn,
                amount,
                Utc::now(),
            ));

            Ok(())
        }

        async fn movements_for_account(&self, id: AccountId) -> Result<Vec<Movement>, PortError> {
            Ok(self
                .state
                .read()
                .await
                .movements
                .iter()
                .filter(|m| m.account_id == id)
                .cloned()
                .collect())
        }
    }
}

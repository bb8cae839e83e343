//! SQLite Ledger Adapter
//!
//! This module provides the storage adapter for the ledger domain,
//! implementing the `LedgerStore` trait using SQLite via the
//! `LedgerRepository`.
//!
//! # Overview
//!
//! The `SqliteLedgerStore` serves as the bridge between the domain layer's
//! port interface and the database layer. It:
//!
//! - Translates domain requests into repository operations
//! - Converts database row types back to domain models
//! - Handles error translation between database and port errors
//!
//! Amounts cross this boundary as whole minor units: `Money` values are
//! converted on the way in and reconstructed on the way out, so the
//! database only ever stores integers.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool_from_url, run_migrations, SqliteLedgerStore};
//! use domain_ledger::LedgerStore;
//! use std::sync::Arc;
//!
//! let pool = create_pool_from_url("sqlite://ledger.db").await?;
//! run_migrations(&pool).await?;
//!
//! // Use it through the port trait
//! let store: Arc<dyn LedgerStore> = Arc::new(SqliteLedgerStore::new(pool));
//! let accounts = store.list_accounts().await?;
//! ```

use async_trait::async_trait;
use tracing::{debug, instrument};

use core_kernel::{AccountId, DomainPort, Money, MovementId, PortError};
use domain_ledger::{Account, LedgerStore, Movement, MovementKind};

use crate::error::DatabaseError;
use crate::pool::DatabasePool;
use crate::repository::{AccountRow, LedgerRepository, MovementRow};

/// SQLite-backed implementation of the LedgerStore trait
///
/// This adapter uses the `LedgerRepository` for all database operations
/// and provides the standard storage implementation of the ledger port.
///
/// # Error Handling
///
/// Database errors are translated to `PortError` variants:
/// - `DatabaseError::NotFound` -> `PortError::NotFound`
/// - Constraint violations -> `PortError::Conflict`
/// - Connection failures -> `PortError::Connection`
/// - Other errors -> `PortError::Internal`
#[derive(Debug, Clone)]
pub struct SqliteLedgerStore {
    repository: LedgerRepository,
}

impl SqliteLedgerStore {
    /// Creates a new SQLite ledger store
    ///
    /// # Arguments
    ///
    /// * `pool` - The SQLite connection pool
    pub fn new(pool: DatabasePool) -> Self {
        Self {
            repository: LedgerRepository::new(pool),
        }
    }
}

// Mark as a domain port
impl DomainPort for SqliteLedgerStore {}

#[async_trait]
impl LedgerStore for SqliteLedgerStore {
    #[instrument(skip(self, name, occupation))]
    async fn create_account(
        &self,
        name: String,
        occupation: Option<String>,
    ) -> Result<AccountId, PortError> {
        debug!("Creating account");

        let id = self
            .repository
            .insert_account(&name, occupation.as_deref())
            .await
            .map_err(db_to_port_error)?;

        Ok(AccountId::new(id))
    }

    #[instrument(skip(self), fields(account_id = %id))]
    async fn delete_account(&self, id: AccountId) -> Result<(), PortError> {
        debug!("Deleting account and its movements");

        self.repository
            .delete_account(id.value())
            .await
            .map_err(db_to_port_error)
    }

    #[instrument(skip(self), fields(account_id = %id))]
    async fn get_account(&self, id: AccountId) -> Result<Account, PortError> {
        debug!("Fetching account by ID");

        let row = self
            .repository
            .get_account(id.value())
            .await
            .map_err(db_to_port_error)?;

        Ok(account_from_row(row))
    }

    #[instrument(skip(self))]
    async fn list_accounts(&self) -> Result<Vec<Account>, PortError> {
        debug!("Listing accounts");

        let rows = self
            .repository
            .list_accounts()
            .await
            .map_err(db_to_port_error)?;

        Ok(rows.into_iter().map(account_from_row).collect())
    }

    #[instrument(skip(self))]
    async fn count_accounts(&self) -> Result<u64, PortError> {
        debug!("Counting accounts");

        let count = self
            .repository
            .count_accounts()
            .await
            .map_err(db_to_port_error)?;

        Ok(count as u64)
    }

    #[instrument(skip(self), fields(account_id = %account_id, kind = %kind, amount = %amount))]
    async fn record_movement(
        &self,
        account_id: AccountId,
        kind: MovementKind,
        amount: Money,
    ) -> Result<MovementId, PortError> {
        debug!("Recording movement");

        let minor = to_minor(amount)?;
        let id = self
            .repository
            .insert_movement(account_id.value(), kind.as_label(), minor)
            .await
            .map_err(db_to_port_error)?;

        Ok(MovementId::new(id))
    }

    #[instrument(skip(self), fields(source = %source, destination = %destination, amount = %amount))]
    async fn record_transfer(
        &self,
        source: AccountId,
        destination: AccountId,
        amount: Money,
    ) -> Result<(), PortError> {
        debug!("Recording transfer pair");

        let minor = to_minor(amount)?;
        self.repository
            .insert_transfer(
                source.value(),
                destination.value(),
                minor,
                MovementKind::TransferOut.as_label(),
                MovementKind::TransferIn.as_label(),
            )
            .await
            .map_err(db_to_port_error)
    }

    #[instrument(skip(self), fields(account_id = %id))]
    async fn movements_for_account(&self, id: AccountId) -> Result<Vec<Movement>, PortError> {
        debug!("Fetching movement history");

        let rows = self
            .repository
            .movements_for_account(id.value())
            .await
            .map_err(db_to_port_error)?;

        rows.into_iter().map(movement_from_row).collect()
    }
}

// =============================================================================
// Conversion Functions
// =============================================================================

/// Converts a database error to a port error
fn db_to_port_error(e: DatabaseError) -> PortError {
    match e {
        DatabaseError::NotFound { entity, id } => PortError::NotFound {
            entity_type: entity,
            id,
        },
        DatabaseError::DuplicateEntry(msg)
        | DatabaseError::ForeignKeyViolation(msg)
        | DatabaseError::ConstraintViolation(msg) => PortError::conflict(msg),
        DatabaseError::ConnectionFailed(msg) => PortError::connection(msg),
        DatabaseError::PoolExhausted => PortError::connection("connection pool exhausted"),
        other => PortError::internal(other.to_string()),
    }
}

/// Converts a domain amount to whole minor units for storage
fn to_minor(amount: Money) -> Result<i64, PortError> {
    amount
        .to_minor()
        .map_err(|e| PortError::validation(e.to_string()))
}

/// Converts a database account row to a domain Account
fn account_from_row(row: AccountRow) -> Account {
    Account {
        id: AccountId::new(row.id),
        name: row.name,
        balance: Money::from_minor(row.balance_minor),
        occupation: row.occupation,
        created_at: row.created_at,
    }
}

/// Converts a database movement row to a domain Movement
fn movement_from_row(row: MovementRow) -> Result<Movement, PortError> {
    let kind = MovementKind::from_label(&row.kind).ok_or_else(|| {
        PortError::internal(format!("unknown movement kind in storage: {}", row.kind))
    })?;

    Ok(Movement {
        id: MovementId::new(row.id),
        account_id: AccountId::new(row.account_id),
        kind,
        amount: Money::from_minor(row.amount_minor),
        created_at: row.created_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    #[test]
    fn test_account_from_row_restores_balance() {
        let row = AccountRow {
            id: 3,
            name: "Alice".to_string(),
            occupation: Some("Engineer".to_string()),
            balance_minor: 12_550,
            created_at: Utc::now(),
        };

        let account = account_from_row(row);
        assert_eq!(account.id, AccountId::new(3));
        assert_eq!(account.balance, Money::new(dec!(125.50)));
        assert_eq!(account.occupation.as_deref(), Some("Engineer"));
    }

    #[test]
    fn test_movement_from_row_restores_kind_and_sign() {
        let row = MovementRow {
            id: 9,
            account_id: 3,
            kind: "Transfer Out".to_string(),
            amount_minor: -2_000,
            created_at: Utc::now(),
        };

        let movement = movement_from_row(row).unwrap();
        assert_eq!(movement.kind, MovementKind::TransferOut);
        assert_eq!(movement.amount, Money::new(dec!(-20.00)));
    }

    #[test]
    fn test_movement_from_row_rejects_unknown_kind() {
        let row = MovementRow {
            id: 1,
            account_id: 1,
            kind: "Interest".to_string(),
            amount_minor: 100,
            created_at: Utc::now(),
        };

        let error = movement_from_row(row).unwrap_err();
        assert!(error.to_string().contains("unknown movement kind"));
    }

    #[test]
    fn test_db_error_mapping_preserves_not_found() {
        let error = db_to_port_error(DatabaseError::not_found("Account", 7));
        assert!(error.is_not_found());
        assert!(error.to_string().contains("Account"));
        assert!(error.to_string().contains("7"));
    }

    #[test]
    fn test_db_error_mapping_constraints_become_conflicts() {
        let error = db_to_port_error(DatabaseError::ConstraintViolation(
            "CHECK constraint failed: balance_minor >= 0".to_string(),
        ));
        assert!(matches!(error, PortError::Conflict { .. }));
    }
}

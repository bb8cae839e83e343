//! Ledger repository implementation
//!
//! This module provides database access for accounts and their movement
//! history. The balance column is only ever changed by applying signed
//! deltas, and every delta commits together with its movement row.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::error::DatabaseError;
use crate::pool::DatabasePool;

/// Repository for managing accounts and movements
///
/// The LedgerRepository handles all database operations for the ledger,
/// ensuring the balance column stays consistent with the movements table.
#[derive(Debug, Clone)]
pub struct LedgerRepository {
    pool: DatabasePool,
}

impl LedgerRepository {
    /// Creates a new LedgerRepository with the given connection pool
    ///
    /// # Arguments
    ///
    /// * `pool` - The SQLite connection pool
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// Inserts a new account with a zero balance
    ///
    /// # Returns
    ///
    /// The rowid of the inserted account
    pub async fn insert_account(
        &self,
        name: &str,
        occupation: Option<&str>,
    ) -> Result<i64, DatabaseError> {
        let result = sqlx::query(
            r#"
            INSERT INTO accounts (name, occupation, balance_minor, created_at)
            VALUES (?1, ?2, 0, ?3)
            "#,
        )
        .bind(name)
        .bind(occupation)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| DatabaseError::from(&e))?;

        Ok(result.last_insert_rowid())
    }

    /// Deletes an account; its movements are removed by the cascade
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no account has this id
    pub async fn delete_account(&self, id: i64) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM accounts WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DatabaseError::from(&e))?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::not_found("Account", id));
        }
        Ok(())
    }

    /// Retrieves an account by its id
    ///
    /// # Returns
    ///
    /// The account row or a `NotFound` error
    pub async fn get_account(&self, id: i64) -> Result<AccountRow, DatabaseError> {
        let account = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, name, occupation, balance_minor, created_at
            FROM accounts
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DatabaseError::from(&e))?;

        account.ok_or_else(|| DatabaseError::not_found("Account", id))
    }

    /// Lists all accounts ordered by id
    pub async fn list_accounts(&self) -> Result<Vec<AccountRow>, DatabaseError> {
        let accounts = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, name, occupation, balance_minor, created_at
            FROM accounts
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DatabaseError::from(&e))?;

        Ok(accounts)
    }

    /// Counts all accounts
    pub async fn count_accounts(&self) -> Result<i64, DatabaseError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM accounts")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DatabaseError::from(&e))?;

        Ok(count)
    }

    /// Applies a signed delta to an account's balance and appends the
    /// movement row in a single transaction
    ///
    /// This method ensures atomicity: either the balance changes together
    /// with its history row, or neither does.
    ///
    /// # Arguments
    ///
    /// * `account_id` - The account to apply the delta to
    /// * `kind` - The movement kind label to store
    /// * `amount_minor` - Signed delta in minor units
    ///
    /// # Returns
    ///
    /// The rowid of the inserted movement
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the account does not exist and
    /// `ConstraintViolation` if the delta would drive the balance negative
    pub async fn insert_movement(
        &self,
        account_id: i64,
        kind: &str,
        amount_minor: i64,
    ) -> Result<i64, DatabaseError> {
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query(
            r#"
            UPDATE accounts
            SET balance_minor = balance_minor + ?1
            WHERE id = ?2
            "#,
        )
        .bind(amount_minor)
        .bind(account_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| DatabaseError::from(&e))?;

        if updated.rows_affected() == 0 {
            return Err(DatabaseError::not_found("Account", account_id));
        }

        let inserted = sqlx::query(
            r#"
            INSERT INTO movements (account_id, kind, amount_minor, created_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(account_id)
        .bind(kind)
        .bind(amount_minor)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await
        .map_err(|e| DatabaseError::from(&e))?;

        let movement_id = inserted.last_insert_rowid();
        tx.commit().await?;
        Ok(movement_id)
    }

    /// Moves `amount_minor` between two accounts and appends both movement
    /// rows in a single transaction
    ///
    /// The debit and credit apply as sequential deltas, so moving money
    /// within the same account nets to zero.
    ///
    /// # Arguments
    ///
    /// * `source_id` - The account to debit
    /// * `destination_id` - The account to credit
    /// * `amount_minor` - Positive amount in minor units
    /// * `out_kind` - Movement kind label for the outgoing leg
    /// * `in_kind` - Movement kind label for the incoming leg
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if either account does not exist and
    /// `ConstraintViolation` if the debit would drive the balance negative;
    /// in both cases no write survives
    pub async fn insert_transfer(
        &self,
        source_id: i64,
        destination_id: i64,
        amount_minor: i64,
        out_kind: &str,
        in_kind: &str,
    ) -> Result<(), DatabaseError> {
        let mut tx = self.pool.begin().await?;
        let now = Utc::now();

        let debited = sqlx::query(
            r#"
            UPDATE accounts
            SET balance_minor = balance_minor - ?1
            WHERE id = ?2
            "#,
        )
        .bind(amount_minor)
        .bind(source_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| DatabaseError::from(&e))?;

        if debited.rows_affected() == 0 {
            return Err(DatabaseError::not_found("Account", source_id));
        }

        let credited = sqlx::query(
            r#"
            UPDATE accounts
            SET balance_minor = balance_minor + ?1
            WHERE id = ?2
            "#,
        )
        .bind(amount_minor)
        .bind(destination_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| DatabaseError::from(&e))?;

        if credited.rows_affected() == 0 {
            return Err(DatabaseError::not_found("Account", destination_id));
        }

        for (account_id, kind, amount) in [
            (source_id, out_kind, -amount_minor),
            (destination_id, in_kind, amount_minor),
        ] {
            sqlx::query(
                r#"
                INSERT INTO movements (account_id, kind, amount_minor, created_at)
                VALUES (?1, ?2, ?3, ?4)
                "#,
            )
            .bind(account_id)
            .bind(kind)
            .bind(amount)
            .bind(now)
            .execute(&mut *tx)
            .await
            .map_err(|e| DatabaseError::from(&e))?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// Retrieves all movements for an account in creation order
    pub async fn movements_for_account(
        &self,
        account_id: i64,
    ) -> Result<Vec<MovementRow>, DatabaseError> {
        let movements = sqlx::query_as::<_, MovementRow>(
            r#"
            SELECT id, account_id, kind, amount_minor, created_at
            FROM movements
            WHERE account_id = ?1
            ORDER BY id
            "#,
        )
        .bind(account_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DatabaseError::from(&e))?;

        Ok(movements)
    }
}

/// Database row for an account
#[derive(Debug, Clone, FromRow)]
pub struct AccountRow {
    pub id: i64,
    pub name: String,
    pub occupation: Option<String>,
    pub balance_minor: i64,
    pub created_at: DateTime<Utc>,
}

/// Database row for a movement
#[derive(Debug, Clone, FromRow)]
pub struct MovementRow {
    pub id: i64,
    pub account_id: i64,
    pub kind: String,
    pub amount_minor: i64,
    pub created_at: DateTime<Utc>,
}

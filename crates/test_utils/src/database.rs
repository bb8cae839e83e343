//! Database Test Utilities
//!
//! Provides in-memory SQLite pools with the real migrations applied, so
//! integration tests exercise the same schema the binary runs on without
//! touching disk.

use std::sync::Arc;

use core_kernel::AccountId;
use domain_ledger::LedgerStore;
use infra_db::{create_pool, run_migrations, DatabaseConfig, DatabasePool, SqliteLedgerStore};

/// Opens a fresh in-memory database with the schema applied
///
/// A single connection keeps every query on the same in-memory database;
/// with more, each pooled connection would see its own empty one.
///
/// # Panics
///
/// Panics if the pool cannot be opened or migrations fail; a broken test
/// database should stop the test immediately.
pub async fn memory_pool() -> DatabasePool {
    let config = DatabaseConfig::new("sqlite::memory:").max_connections(1);
    let pool = create_pool(config)
        .await
        .expect("Failed to open in-memory database");
    run_migrations(&pool)
        .await
        .expect("Failed to apply migrations");
    pool
}

/// Opens a ledger store over a fresh in-memory database
pub async fn memory_store() -> Arc<dyn LedgerStore> {
    Arc::new(SqliteLedgerStore::new(memory_pool().await))
}

/// Opens a pool seeded with empty accounts for the given names
///
/// Returns the pool together with the assigned identifiers, in the same
/// order as `names`.
pub async fn pool_with_accounts(names: &[&str]) -> (DatabasePool, Vec<AccountId>) {
    let pool = memory_pool().await;
    let store = SqliteLedgerStore::new(pool.clone());

    let mut ids = Vec::with_capacity(names.len());
    for name in names {
        let id = store
            .create_account(name.to_string(), None)
            .await
            .expect("Failed to seed test account");
        ids.push(id);
    }
    (pool, ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_pool_has_schema() {
        let pool = memory_pool().await;

        let accounts = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM accounts")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(accounts, 0);
    }

    #[tokio::test]
    async fn test_pool_with_accounts_assigns_ids_in_order() {
        let (_pool, ids) = pool_with_accounts(&["Alice", "Bob"]).await;

        assert_eq!(ids, vec![AccountId::new(1), AccountId::new(2)]);
    }
}

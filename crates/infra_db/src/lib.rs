//! Infrastructure Database Layer
//!
//! This crate provides the SQLite persistence layer for the ledger system,
//! implemented with SQLx.
//!
//! # Architecture
//!
//! The crate follows the repository pattern: `LedgerRepository` owns the SQL
//! and the row types, and `SqliteLedgerStore` adapts it to the domain's
//! `LedgerStore` port. The domain layer only ever sees `PortError`, never
//! SQLx or `DatabaseError`.
//!
//! # Storage Model
//!
//! Balances live on the `accounts` table and every change is mirrored by a
//! row in `movements`, written in the same transaction. Amounts are stored
//! as whole minor units, and a CHECK constraint keeps balances non-negative
//! even when a write bypasses the domain rules.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool_from_url, run_migrations, SqliteLedgerStore};
//!
//! let pool = create_pool_from_url("sqlite://ledger.db").await?;
//! run_migrations(&pool).await?;
//! let store = SqliteLedgerStore::new(pool);
//! ```

pub mod pool;
pub mod error;
pub mod repository;
pub mod store;

pub use pool::{create_pool, create_pool_from_url, run_migrations, DatabaseConfig, DatabasePool};
pub use error::DatabaseError;
pub use repository::LedgerRepository;
pub use store::SqliteLedgerStore;

//! Ledger Domain - Accounts and Movement History
//!
//! This crate implements the ledger behind the client-facing sessions:
//! a roster of accounts, each carrying a non-negative balance, and an
//! append-only history of signed movements that the balance must always
//! reconcile with.
//!
//! # Consistency Rules
//!
//! Every balance change writes a movement row in the same storage
//! transaction:
//! - Deposits and withdrawals write one signed row
//! - Transfers write a Transfer Out / Transfer In pair across the two
//!   accounts
//! - An account's balance always equals the sum of its movements' signed
//!   amounts
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_ledger::{AccountRegistry, TransactionEngine};
//! use std::sync::Arc;
//!
//! let registry = AccountRegistry::new(store.clone());
//! let engine = TransactionEngine::new(store);
//!
//! let alice = registry.open_account("Alice", None).await?;
//! engine.deposit(alice.id, amount).await?;
//! engine.transfer(alice.id, bob.id, amount).await?;
//! ```

pub mod account;
pub mod engine;
pub mod error;
pub mod movement;
pub mod ports;
pub mod registry;

pub use account::Account;
pub use engine::TransactionEngine;
pub use error::LedgerError;
pub use movement::{Movement, MovementKind};
pub use ports::LedgerStore;
pub use registry::AccountRegistry;

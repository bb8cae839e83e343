//! Text Front End
//!
//! This crate provides the interactive menu interface for the ledger system.
//!
//! # Architecture
//!
//! - **Menu**: tagged-variant command types parsed from numeric selections
//! - **Session**: the prompt/dispatch/render loop over generic I/O
//! - **Config**: environment-driven configuration
//! - **Error Handling**: domain rejections rendered as one-line menu messages
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_cli::build_cli;
//!
//! let cli = build_cli(pool);
//! cli.run(&mut input, &mut output).await?;
//! ```

pub mod config;
pub mod error;
pub mod menu;
pub mod session;

use std::sync::Arc;

use domain_ledger::{AccountRegistry, LedgerStore, TransactionEngine};
use infra_db::{DatabasePool, SqliteLedgerStore};

pub use config::LedgerConfig;
pub use error::CliError;
pub use menu::{MainMenuChoice, SessionChoice};
pub use session::LedgerCli;

/// Wires the front end over a database pool
///
/// # Arguments
///
/// * `pool` - SQLite connection pool with migrations applied
///
/// # Returns
///
/// A `LedgerCli` whose registry and engine share one store handle
pub fn build_cli(pool: DatabasePool) -> LedgerCli {
    let store: Arc<dyn LedgerStore> = Arc::new(SqliteLedgerStore::new(pool));
    let registry = AccountRegistry::new(store.clone());
    let engine = TransactionEngine::new(store);
    LedgerCli::new(registry, engine)
}

//! Ledger CLI Binary
//!
//! This binary runs the interactive menu front end for the ledger system.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration (sqlite://ledger.db)
//! cargo run --bin ledger-cli
//!
//! # Run with environment variables
//! LEDGER_DATABASE_URL=sqlite://my-ledger.db cargo run --bin ledger-cli
//! ```
//!
//! # Environment Variables
//!
//! * `LEDGER_DATABASE_URL` - SQLite connection string (default: sqlite://ledger.db)
//! * `LEDGER_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use anyhow::Context;

use infra_db::{create_pool, run_migrations, DatabaseConfig};
use interface_cli::{build_cli, LedgerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Main entry point for the ledger CLI.
///
/// Initializes logging, loads configuration, opens the database, applies
/// migrations, and runs the menu loop over stdin/stdout.
///
/// # Errors
///
/// Returns an error if:
/// - The database cannot be opened or migrated
/// - A storage failure interrupts the session
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    // Load configuration from environment
    let config = load_config();

    // Initialize tracing/logging
    init_tracing(&config.log_level);

    tracing::info!(database_url = %config.database_url, "Starting ledger CLI");

    // Open the database and apply the schema
    let pool = create_pool(DatabaseConfig::new(&config.database_url))
        .await
        .context("Failed to open database")?;
    run_migrations(&pool)
        .await
        .context("Failed to apply migrations")?;

    // Wire the services and run the menu loop over the terminal
    let cli = build_cli(pool.clone());
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();
    let result = cli.run(&mut input, &mut output).await;

    pool.close().await;
    tracing::info!("Ledger CLI shutdown complete");

    result.context("Session ended with a storage failure")
}

/// Loads CLI configuration from environment variables.
///
/// Falls back to individual variables or defaults if the prefixed set is
/// incomplete.
fn load_config() -> LedgerConfig {
    LedgerConfig::from_env().unwrap_or_else(|_| LedgerConfig {
        database_url: std::env::var("DATABASE_URL")
            .or_else(|_| std::env::var("LEDGER_DATABASE_URL"))
            .unwrap_or_else(|_| "sqlite://ledger.db".to_string()),
        log_level: std::env::var("LEDGER_LOG_LEVEL")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "info".to_string()),
    })
}

/// Initializes the tracing subscriber for structured logging.
///
/// Log lines go to stderr so they never interleave with the menu on stdout.
///
/// # Arguments
///
/// * `log_level` - The minimum log level to output (trace, debug, info, warn, error)
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}

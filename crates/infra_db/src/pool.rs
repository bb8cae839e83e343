//! Database connection pool management
//!
//! This module provides connection pool configuration and creation for SQLite
//! using SQLx, together with the embedded schema migrations.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::time::Duration;
use tracing::info;

use crate::error::DatabaseError;

/// Type alias for the SQLite connection pool
pub type DatabasePool = SqlitePool;

/// Configuration options for the database connection pool
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use infra_db::DatabaseConfig;
///
/// let config = DatabaseConfig::new("sqlite://ledger.db")
///     .max_connections(4)
///     .connect_timeout(Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// SQLite connection string
    pub url: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Connection timeout duration
    pub connect_timeout: Duration,
    /// Whether to create the database file if it does not exist
    pub create_if_missing: bool,
}

impl DatabaseConfig {
    /// Creates a new database configuration with the given connection URL
    ///
    /// # Arguments
    ///
    /// * `url` - SQLite connection string (e.g., "sqlite://ledger.db")
    ///
    /// # Returns
    ///
    /// A new `DatabaseConfig` with sensible defaults
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 5,
            connect_timeout: Duration::from_secs(30),
            create_if_missing: true,
        }
    }

    /// Sets the maximum number of connections in the pool
    ///
    /// # Arguments
    ///
    /// * `max` - Maximum connection count (default: 5)
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Sets the connection timeout duration
    ///
    /// # Arguments
    ///
    /// * `timeout` - Duration to wait for a connection (default: 30s)
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets whether a missing database file is created on first connect
    ///
    /// # Arguments
    ///
    /// * `create` - Create the file when absent (default: true)
    pub fn create_if_missing(mut self, create: bool) -> Self {
        self.create_if_missing = create;
        self
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::new("sqlite://ledger.db")
    }
}

/// Creates a database connection pool with the given configuration
///
/// Foreign key enforcement is switched on for every connection; deleting
/// an account relies on it to cascade into the movement history.
///
/// # Arguments
///
/// * `config` - Database configuration options
///
/// # Returns
///
/// A `Result` containing the connection pool or a database error
///
/// # Errors
///
/// Returns `DatabaseError::ConnectionFailed` if the URL cannot be parsed
/// or the pool cannot be created
///
/// # Example
///
/// ```rust,ignore
/// use infra_db::{DatabaseConfig, create_pool};
///
/// let config = DatabaseConfig::new("sqlite://ledger.db");
/// let pool = create_pool(config).await?;
/// ```
pub async fn create_pool(config: DatabaseConfig) -> Result<DatabasePool, DatabaseError> {
    info!(
        "Creating database pool for {} with max_connections={}",
        config.url, config.max_connections
    );

    let options = config
        .url
        .parse::<SqliteConnectOptions>()
        .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?
        .create_if_missing(config.create_if_missing)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.connect_timeout)
        .connect_with(options)
        .await
        .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

    info!("Database pool created successfully");
    Ok(pool)
}

/// Creates a connection pool from a URL string with default settings
///
/// This is a convenience function for simple use cases where default
/// pool settings are acceptable.
///
/// # Arguments
///
/// * `url` - SQLite connection string
///
/// # Returns
///
/// A `Result` containing the connection pool or a database error
pub async fn create_pool_from_url(url: &str) -> Result<DatabasePool, DatabaseError> {
    create_pool(DatabaseConfig::new(url)).await
}

/// Applies the embedded schema migrations
///
/// Safe to run on every startup; migrations that have already been
/// applied are skipped.
///
/// # Errors
///
/// Returns `DatabaseError::MigrationFailed` if a migration cannot be applied
pub async fn run_migrations(pool: &DatabasePool) -> Result<(), DatabaseError> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;

    info!("Database migrations applied");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = DatabaseConfig::new("sqlite://test.db")
            .max_connections(2)
            .connect_timeout(Duration::from_secs(60))
            .create_if_missing(false);

        assert_eq!(config.max_connections, 2);
        assert_eq!(config.connect_timeout, Duration::from_secs(60));
        assert!(!config.create_if_missing);
    }

    #[tokio::test]
    async fn test_in_memory_pool_and_migrations() {
        // A single connection keeps every query on the same in-memory database
        let config = DatabaseConfig::new("sqlite::memory:").max_connections(1);
        let pool = create_pool(config).await.unwrap();
        run_migrations(&pool).await.unwrap();

        let one = sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(one, 1);
    }
}

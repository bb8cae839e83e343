//! CLI configuration

use serde::Deserialize;

/// Ledger CLI configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerConfig {
    /// Database URL
    pub database_url: String,
    /// Log level
    pub log_level: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite://ledger.db".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl LedgerConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("LEDGER"))
            .build()?
            .try_deserialize()
    }
}

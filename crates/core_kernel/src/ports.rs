//! Ports and Adapters Infrastructure
//!
//! This module provides the foundational types for implementing the hexagonal
//! architecture (ports and adapters) pattern across the domain layer.
//!
//! # Architecture Overview
//!
//! Each domain defines a port trait describing what it needs from storage.
//! Adapters implement the trait against a concrete backend; the domain only
//! ever sees `PortError`, never the backend's own error type.
//!
//! ```rust,ignore
//! // In domain_ledger/src/ports.rs
//! #[async_trait]
//! pub trait LedgerStore: DomainPort {
//!     async fn get_account(&self, id: AccountId) -> Result<Account, PortError>;
//! }
//!
//! // In infra_db - SQLite adapter
//! impl LedgerStore for SqliteLedgerStore { ... }
//! ```

use std::fmt;
use thiserror::Error;

/// Error type for port operations
///
/// Provides a unified error type that all port implementations must use,
/// ensuring consistent error handling across adapters.
#[derive(Debug, Error)]
pub enum PortError {
    /// The requested entity was not found
    #[error("Not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    /// A validation error occurred
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// The operation conflicts with existing data
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// Connection to the underlying storage failed
    #[error("Connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An internal error occurred
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PortError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: impl Into<String>, id: impl fmt::Display) -> Self {
        PortError::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        PortError::Validation {
            message: message.into(),
            field: None,
        }
    }

    /// Creates a Validation error with field information
    pub fn validation_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        PortError::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Creates a Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        PortError::Conflict {
            message: message.into(),
        }
    }

    /// Creates a Connection error
    pub fn connection(message: impl Into<String>) -> Self {
        PortError::Connection {
            message: message.into(),
            source: None,
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Returns true if this error indicates a transient failure that may succeed on retry
    pub fn is_transient(&self) -> bool {
        matches!(self, PortError::Connection { .. })
    }

    /// Returns true if this error indicates the entity was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, PortError::NotFound { .. })
    }
}

/// Marker trait for all domain ports
///
/// All port traits should extend this marker to ensure they are
/// thread-safe and can be used in async contexts.
pub trait DomainPort: Send + Sync + 'static {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_error_not_found() {
        let error = PortError::not_found("Account", "123");
        assert!(error.is_not_found());
        assert!(!error.is_transient());
        assert!(error.to_string().contains("Account"));
        assert!(error.to_string().contains("123"));
    }

    #[test]
    fn test_port_error_transient() {
        let connection = PortError::connection("pool closed");
        assert!(connection.is_transient());

        let validation = PortError::validation("Name must not be empty");
        assert!(!validation.is_transient());
    }

    #[test]
    fn test_validation_field_carries_field() {
        let error = PortError::validation_field("must not be empty", "name");
        match error {
            PortError::Validation { field, .. } => assert_eq!(field.as_deref(), Some("name")),
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}

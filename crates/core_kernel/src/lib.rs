//! Core Kernel - Foundational types and utilities for the ledger manager
//!
//! This crate provides the fundamental building blocks used across all modules:
//! - Money type with precise decimal arithmetic
//! - Strongly-typed identifiers for accounts and movements
//! - Port infrastructure for the storage boundary

pub mod identifiers;
pub mod money;
pub mod ports;

pub use identifiers::{AccountId, MovementId};
pub use money::{Money, MoneyError, DECIMAL_PLACES};
pub use ports::{DomainPort, PortError};

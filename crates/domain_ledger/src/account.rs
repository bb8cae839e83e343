//! Account entity
//!
//! This module defines the account record owned by the ledger store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{AccountId, Money};

/// A client account as persisted in the ledger
///
/// An `Account` value is a snapshot materialized from storage, not a live
/// handle: mutating operations go through the transaction engine and the
/// snapshot is re-read afterwards. The balance is kept non-negative by the
/// engine and always equals the sum of the account's movement amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier, assigned by storage
    pub id: AccountId,
    /// Display name
    pub name: String,
    /// Current balance
    pub balance: Money,
    /// Optional occupation label
    pub occupation: Option<String>,
    /// When the account was opened
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new account snapshot with zero balance
    ///
    /// # Arguments
    ///
    /// * `id` - Storage-assigned identifier
    /// * `name` - Display name
    pub fn new(id: AccountId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            balance: Money::zero(),
            occupation: None,
            created_at: Utc::now(),
        }
    }

    /// Sets the occupation label
    pub fn with_occupation(mut self, occupation: impl Into<String>) -> Self {
        self.occupation = Some(occupation.into());
        self
    }

    /// Sets the balance
    pub fn with_balance(mut self, balance: Money) -> Self {
        self.balance = balance;
        self
    }
}

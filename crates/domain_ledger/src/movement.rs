//! Movement types
//!
//! This module defines the immutable, signed ledger entries that record
//! every inflow and outflow against an account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{AccountId, Money, MovementId};

/// Kind of ledger movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovementKind {
    /// Cash taken out of an account
    Withdraw,
    /// Cash paid into an account
    Deposit,
    /// Outgoing leg of a transfer
    TransferOut,
    /// Incoming leg of a transfer
    TransferIn,
}

impl MovementKind {
    /// Returns the label stored in the movements table
    pub fn as_label(&self) -> &'static str {
        match self {
            MovementKind::Withdraw => "Withdraw",
            MovementKind::Deposit => "Deposit",
            MovementKind::TransferOut => "Transfer Out",
            MovementKind::TransferIn => "Transfer In",
        }
    }

    /// Parses a stored label back into a kind
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Withdraw" => Some(MovementKind::Withdraw),
            "Deposit" => Some(MovementKind::Deposit),
            "Transfer Out" => Some(MovementKind::TransferOut),
            "Transfer In" => Some(MovementKind::TransferIn),
            _ => None,
        }
    }

    /// Returns true if this kind records money leaving the account
    pub fn is_outflow(&self) -> bool {
        matches!(self, MovementKind::Withdraw | MovementKind::TransferOut)
    }

    /// Applies this kind's sign convention to a positive magnitude
    ///
    /// Outflows are recorded with negative amounts, inflows with positive
    /// amounts, so an account's balance always equals the sum of its
    /// movements' signed amounts.
    pub fn signed(&self, magnitude: Money) -> Money {
        if self.is_outflow() {
            -magnitude
        } else {
            magnitude
        }
    }
}

impl fmt::Display for MovementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

/// An immutable ledger entry recording one inflow or outflow
///
/// Movements are append-only: they are never updated or deleted
/// individually, only removed en masse when their account is closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    /// Unique identifier, assigned by storage in creation order
    pub id: MovementId,
    /// The account this movement belongs to
    pub account_id: AccountId,
    /// Kind of movement
    pub kind: MovementKind,
    /// Signed amount: negative for outflow, positive for inflow
    pub amount: Money,
    /// When the movement was recorded
    pub created_at: DateTime<Utc>,
}

impl Movement {
    /// Creates a movement record
    pub fn new(
        id: MovementId,
        account_id: AccountId,
        kind: MovementKind,
        amount: Money,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            account_id,
            kind,
            amount,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_labels_round_trip() {
        let kinds = [
            MovementKind::Withdraw,
            MovementKind::Deposit,
            MovementKind::TransferOut,
            MovementKind::TransferIn,
        ];

        for kind in kinds {
            assert_eq!(MovementKind::from_label(kind.as_label()), Some(kind));
        }
    }

    #[test]
    fn test_unknown_label_is_rejected() {
        assert_eq!(MovementKind::from_label("Interest"), None);
    }

    #[test]
    fn test_outflow_kinds() {
        assert!(MovementKind::Withdraw.is_outflow());
        assert!(MovementKind::TransferOut.is_outflow());
        assert!(!MovementKind::Deposit.is_outflow());
        assert!(!MovementKind::TransferIn.is_outflow());
    }

    #[test]
    fn test_signed_applies_sign_convention() {
        let magnitude = Money::new(dec!(20.00));

        assert_eq!(
            MovementKind::Withdraw.signed(magnitude),
            Money::new(dec!(-20.00))
        );
        assert_eq!(
            MovementKind::TransferOut.signed(magnitude),
            Money::new(dec!(-20.00))
        );
        assert_eq!(MovementKind::Deposit.signed(magnitude), magnitude);
        assert_eq!(MovementKind::TransferIn.signed(magnitude), magnitude);
    }

    #[test]
    fn test_display_uses_storage_label() {
        assert_eq!(MovementKind::TransferOut.to_string(), "Transfer Out");
    }
}

//! Comprehensive tests for domain_ledger

use chrono::Utc;
use rust_decimal_macros::dec;

use core_kernel::{AccountId, Money, MovementId, PortError};

use domain_ledger::account::Account;
use domain_ledger::error::LedgerError;
use domain_ledger::movement::{Movement, MovementKind};

// ============================================================================
// Account Entity Tests
// ============================================================================

mod account_entity_tests {
    use super::*;

    #[test]
    fn test_new_account_defaults() {
        let account = Account::new(AccountId::new(1), "Alice");

        assert_eq!(account.id, AccountId::new(1));
        assert_eq!(account.name, "Alice");
        assert!(account.balance.is_zero());
        assert!(account.occupation.is_none());
    }

    #[test]
    fn test_builder_chain() {
        let account = Account::new(AccountId::new(2), "Bob")
            .with_occupation("Baker")
            .with_balance(Money::new(dec!(12.50)));

        assert_eq!(account.occupation.as_deref(), Some("Baker"));
        assert_eq!(account.balance, Money::new(dec!(12.50)));
    }
}

// ============================================================================
// Movement Kind Tests
// ============================================================================

mod movement_kind_tests {
    use super::*;

    #[test]
    fn test_storage_labels() {
        assert_eq!(MovementKind::Withdraw.as_label(), "Withdraw");
        assert_eq!(MovementKind::Deposit.as_label(), "Deposit");
        assert_eq!(MovementKind::TransferOut.as_label(), "Transfer Out");
        assert_eq!(MovementKind::TransferIn.as_label(), "Transfer In");
    }

    #[test]
    fn test_from_label_round_trip() {
        for kind in [
            MovementKind::Withdraw,
            MovementKind::Deposit,
            MovementKind::TransferOut,
            MovementKind::TransferIn,
        ] {
            assert_eq!(MovementKind::from_label(kind.as_label()), Some(kind));
        }
    }

    #[test]
    fn test_from_label_rejects_unknown() {
        assert_eq!(MovementKind::from_label("Fee"), None);
        assert_eq!(MovementKind::from_label("transfer out"), None);
    }

    #[test]
    fn test_signed_for_each_kind() {
        let magnitude = Money::new(dec!(15.00));

        assert!(MovementKind::Withdraw.signed(magnitude).is_negative());
        assert!(MovementKind::TransferOut.signed(magnitude).is_negative());
        assert!(MovementKind::Deposit.signed(magnitude).is_positive());
        assert!(MovementKind::TransferIn.signed(magnitude).is_positive());
    }
}

// ============================================================================
// Movement History Tests
// ============================================================================

mod movement_history_tests {
    use super::*;

    fn movement(id: i64, kind: MovementKind, magnitude: Money) -> Movement {
        Movement::new(
            MovementId::new(id),
            AccountId::new(1),
            kind,
            kind.signed(magnitude),
            Utc::now(),
        )
    }

    #[test]
    fn test_history_sums_to_balance() {
        let history = vec![
            movement(1, MovementKind::Deposit, Money::new(dec!(100.00))),
            movement(2, MovementKind::Withdraw, Money::new(dec!(30.00))),
            movement(3, MovementKind::TransferOut, Money::new(dec!(20.00))),
        ];

        let total = history.iter().fold(Money::zero(), |acc, m| acc + m.amount);
        assert_eq!(total, Money::new(dec!(50.00)));
    }

    #[test]
    fn test_transfer_legs_cancel_out() {
        let out = movement(1, MovementKind::TransferOut, Money::new(dec!(20.00)));
        let inbound = movement(2, MovementKind::TransferIn, Money::new(dec!(20.00)));

        assert!((out.amount + inbound.amount).is_zero());
    }
}

// ============================================================================
// Error Tests
// ============================================================================

mod error_tests {
    use super::*;

    #[test]
    fn test_messages_are_user_facing() {
        assert_eq!(
            LedgerError::AccountNotFound("5".into()).to_string(),
            "Account not found: 5"
        );
        assert_eq!(
            LedgerError::DestinationNotFound("9".into()).to_string(),
            "Destination account not found: 9"
        );

        let message = LedgerError::InsufficientFunds {
            requested: Money::new(dec!(1000.00)),
            available: Money::new(dec!(70.00)),
        }
        .to_string();
        assert!(message.contains("1000.00"));
        assert!(message.contains("70.00"));
    }

    #[test]
    fn test_predicates() {
        let storage = LedgerError::Storage(PortError::connection("no database file"));
        assert!(storage.is_storage());
        assert!(!storage.is_not_found());

        let missing = LedgerError::AccountNotFound("3".into());
        assert!(missing.is_not_found());
        assert!(!missing.is_storage());
    }
}

// ============================================================================
// Serialization Tests
// ============================================================================

mod serialization_tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_account_serializes_with_flat_fields() {
        let account = Account::new(AccountId::new(1), "Alice")
            .with_occupation("Engineer")
            .with_balance(Money::new(dec!(100.50)));

        let value = serde_json::to_value(&account).unwrap();
        assert_eq!(value["id"], json!(1));
        assert_eq!(value["name"], json!("Alice"));
        assert_eq!(value["balance"], json!("100.50"));
        assert_eq!(value["occupation"], json!("Engineer"));
    }

    #[test]
    fn test_movement_round_trips_through_json() {
        let movement = Movement::new(
            MovementId::new(7),
            AccountId::new(1),
            MovementKind::TransferIn,
            Money::new(dec!(20.00)),
            Utc::now(),
        );

        let serialized = serde_json::to_string(&movement).unwrap();
        let deserialized: Movement = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, movement);
    }

    #[test]
    fn test_kind_uses_variant_names_in_json() {
        // The JSON form uses variant names; the storage label is separate
        let serialized = serde_json::to_string(&MovementKind::TransferOut).unwrap();
        assert_eq!(serialized, "\"TransferOut\"");
        assert_eq!(MovementKind::TransferOut.as_label(), "Transfer Out");
    }
}

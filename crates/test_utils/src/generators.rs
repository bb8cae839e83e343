//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use core_kernel::Money;
use domain_ledger::MovementKind;
use proptest::prelude::*;

/// Strategy for generating valid positive amounts in minor units
pub fn positive_amount_minor_strategy() -> impl Strategy<Value = i64> {
    1i64..1_000_000_000i64
}

/// Strategy for generating signed amounts in minor units
pub fn amount_minor_strategy() -> impl Strategy<Value = i64> {
    -1_000_000_000i64..1_000_000_000i64
}

/// Strategy for generating positive Money values
pub fn positive_money_strategy() -> impl Strategy<Value = Money> {
    positive_amount_minor_strategy().prop_map(Money::from_minor)
}

/// Strategy for generating Money values of either sign
pub fn money_strategy() -> impl Strategy<Value = Money> {
    amount_minor_strategy().prop_map(Money::from_minor)
}

/// Strategy for generating movement kinds
pub fn movement_kind_strategy() -> impl Strategy<Value = MovementKind> {
    prop_oneof![
        Just(MovementKind::Withdraw),
        Just(MovementKind::Deposit),
        Just(MovementKind::TransferOut),
        Just(MovementKind::TransferIn),
    ]
}

/// Strategy for generating plausible client names
pub fn client_name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,11}"
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn positive_money_is_positive(amount in positive_money_strategy()) {
            prop_assert!(amount.is_positive());
        }

        #[test]
        fn movement_kind_labels_round_trip(kind in movement_kind_strategy()) {
            prop_assert_eq!(MovementKind::from_label(kind.as_label()), Some(kind));
        }

        #[test]
        fn client_names_are_non_empty(name in client_name_strategy()) {
            prop_assert!(!name.trim().is_empty());
        }
    }
}

//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use core_kernel::{AccountId, Money};
use domain_ledger::LedgerStore;

/// Asserts that a Money value is strictly positive
pub fn assert_money_positive(money: &Money) {
    assert!(money.is_positive(), "Expected positive money, got {}", money);
}

/// Asserts that a Money value is zero
pub fn assert_money_zero(money: &Money) {
    assert!(money.is_zero(), "Expected zero money, got {}", money);
}

/// Asserts that an account's balance equals the sum of its movement amounts
///
/// This is the consistency rule every ledger operation must preserve; call
/// it after any sequence of deposits, withdrawals, and transfers.
///
/// # Panics
///
/// Panics if the account cannot be loaded or the balance has drifted from
/// the movement history.
pub async fn assert_reconciled(store: &dyn LedgerStore, id: AccountId) {
    let account = store
        .get_account(id)
        .await
        .expect("Account should exist for reconciliation");
    let movements = store
        .movements_for_account(id)
        .await
        .expect("Movement history should load");

    let mut total = Money::zero();
    for movement in &movements {
        total = total
            .checked_add(&movement.amount)
            .expect("Movement sum should not overflow");
    }

    assert_eq!(
        account.balance, total,
        "Account {} balance {} does not equal movement sum {} over {} movements",
        id,
        account.balance,
        total,
        movements.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::TestAccountBuilder;
    use crate::database::memory_store;
    use domain_ledger::MovementKind;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_predicates() {
        assert_money_positive(&Money::new(dec!(0.01)));
        assert_money_zero(&Money::zero());
    }

    #[tokio::test]
    async fn test_reconciliation_holds_after_activity() {
        let store = memory_store().await;
        let account = TestAccountBuilder::new()
            .with_balance(Money::new(dec!(100.00)))
            .create(store.as_ref())
            .await;

        store
            .record_movement(account.id, MovementKind::Withdraw, Money::new(dec!(-40.00)))
            .await
            .unwrap();

        assert_reconciled(store.as_ref(), account.id).await;
    }
}

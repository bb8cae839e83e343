//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use chrono::Utc;
use core_kernel::{AccountId, Money};
use domain_ledger::{Account, LedgerStore, MovementKind};
use fake::faker::job::en::Title;
use fake::faker::name::en::FirstName;
use fake::Fake;

/// Builder for constructing test accounts
///
/// Defaults to a fake first name, no occupation, and a zero balance.
pub struct TestAccountBuilder {
    id: AccountId,
    name: String,
    occupation: Option<String>,
    balance: Money,
}

impl Default for TestAccountBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAccountBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            id: AccountId::new(1),
            name: FirstName().fake(),
            occupation: None,
            balance: Money::zero(),
        }
    }

    /// Sets the identifier (in-memory builds only; storage assigns its own)
    pub fn with_id(mut self, id: AccountId) -> Self {
        self.id = id;
        self
    }

    /// Sets the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the occupation label
    pub fn with_occupation(mut self, occupation: impl Into<String>) -> Self {
        self.occupation = Some(occupation.into());
        self
    }

    /// Sets the occupation to a fake job title
    pub fn with_fake_occupation(mut self) -> Self {
        self.occupation = Some(Title().fake());
        self
    }

    /// Sets the starting balance
    pub fn with_balance(mut self, balance: Money) -> Self {
        self.balance = balance;
        self
    }

    /// Builds an in-memory account snapshot
    pub fn build(self) -> Account {
        Account {
            id: self.id,
            name: self.name,
            balance: self.balance,
            occupation: self.occupation,
            created_at: Utc::now(),
        }
    }

    /// Persists the account through a store, funding any starting balance
    /// with an opening deposit so the movement history stays consistent
    ///
    /// # Panics
    ///
    /// Panics on store errors; a broken test store should stop the test.
    pub async fn create(self, store: &dyn LedgerStore) -> Account {
        let id = store
            .create_account(self.name, self.occupation)
            .await
            .expect("Failed to create test account");

        if self.balance.is_positive() {
            store
                .record_movement(id, MovementKind::Deposit, self.balance)
                .await
                .expect("Failed to fund test account");
        }

        store
            .get_account(id)
            .await
            .expect("Failed to load test account")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::memory_store;
    use rust_decimal_macros::dec;

    #[test]
    fn test_build_uses_defaults() {
        let account = TestAccountBuilder::new().build();

        assert!(!account.name.is_empty());
        assert!(account.occupation.is_none());
        assert!(account.balance.is_zero());
    }

    #[test]
    fn test_build_applies_overrides() {
        let account = TestAccountBuilder::new()
            .with_id(AccountId::new(7))
            .with_name("Alice")
            .with_occupation("Engineer")
            .with_balance(Money::new(dec!(50.00)))
            .build();

        assert_eq!(account.id, AccountId::new(7));
        assert_eq!(account.name, "Alice");
        assert_eq!(account.occupation.as_deref(), Some("Engineer"));
        assert_eq!(account.balance, Money::new(dec!(50.00)));
    }

    #[tokio::test]
    async fn test_create_funds_balance_through_a_deposit() {
        let store = memory_store().await;

        let account = TestAccountBuilder::new()
            .with_name("Alice")
            .with_balance(Money::new(dec!(75.00)))
            .create(store.as_ref())
            .await;

        assert_eq!(account.balance, Money::new(dec!(75.00)));

        let movements = store.movements_for_account(account.id).await.unwrap();
        assert_eq!(movements.len(), 1);
        assert_eq!(movements[0].kind, MovementKind::Deposit);
    }
}

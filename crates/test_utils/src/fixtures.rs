//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for common entities across the ledger
//! system. These fixtures are designed to be consistent and predictable for
//! unit tests.

use chrono::{DateTime, TimeZone, Utc};
use core_kernel::{AccountId, Money, MovementId};
use rust_decimal_macros::dec;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// A standard deposit amount
    pub fn hundred() -> Money {
        Money::new(dec!(100.00))
    }

    /// A standard withdrawal amount
    pub fn thirty() -> Money {
        Money::new(dec!(30.00))
    }

    /// A standard transfer amount
    pub fn twenty() -> Money {
        Money::new(dec!(20.00))
    }

    /// A zero amount
    pub fn zero() -> Money {
        Money::zero()
    }

    /// An amount larger than any fixture balance, for overdraft tests
    pub fn thousand() -> Money {
        Money::new(dec!(1000.00))
    }

    /// The smallest representable positive amount
    pub fn one_cent() -> Money {
        Money::from_minor(1)
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// A fixed account-opening timestamp (Jan 1, 2024)
    pub fn opened_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    /// A timestamp strictly after [`TemporalFixtures::opened_at`]
    pub fn later() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }
}

/// Fixture for common string values
pub struct StringFixtures;

impl StringFixtures {
    /// A standard client name
    pub fn client_name() -> &'static str {
        "Alice"
    }

    /// A second client name for transfer scenarios
    pub fn other_client_name() -> &'static str {
        "Bob"
    }

    /// A standard occupation label
    pub fn occupation() -> &'static str {
        "Engineer"
    }
}

/// Fixture for identifier values
pub struct IdFixtures;

impl IdFixtures {
    /// The first storage-assigned account id
    pub fn account_id() -> AccountId {
        AccountId::new(1)
    }

    /// A second account id for transfer scenarios
    pub fn other_account_id() -> AccountId {
        AccountId::new(2)
    }

    /// An id no fixture database ever assigns
    pub fn missing_account_id() -> AccountId {
        AccountId::new(999)
    }

    /// The first storage-assigned movement id
    pub fn movement_id() -> MovementId {
        MovementId::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_fixtures_are_positive() {
        assert!(MoneyFixtures::hundred().is_positive());
        assert!(MoneyFixtures::one_cent().is_positive());
        assert!(MoneyFixtures::zero().is_zero());
    }

    #[test]
    fn test_temporal_fixtures_are_ordered() {
        assert!(TemporalFixtures::opened_at() < TemporalFixtures::later());
    }
}

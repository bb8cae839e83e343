//! Money type with precise decimal arithmetic
//!
//! This module provides a type-safe representation of monetary values
//! using rust_decimal for precise calculations without floating-point errors.
//! The ledger is single-currency, so amounts carry no currency axis; they are
//! fixed-point values with two decimal places.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg, Sub};
use thiserror::Error;

/// Number of decimal places carried by every amount
pub const DECIMAL_PLACES: u32 = 2;

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Overflow during calculation")]
    Overflow,
}

/// A monetary amount with fixed-point precision
///
/// Money uses rust_decimal for precise arithmetic without floating-point
/// errors. Amounts are normalized to two decimal places on construction,
/// so minor-unit conversion is always exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money {
    amount: Decimal,
}

impl Money {
    /// Creates a new Money value, rounding to the standard precision
    pub fn new(amount: Decimal) -> Self {
        Self {
            amount: amount.round_dp(DECIMAL_PLACES),
        }
    }

    /// Creates Money from an integer amount in minor units (cents)
    pub fn from_minor(minor_units: i64) -> Self {
        Self {
            amount: Decimal::new(minor_units, DECIMAL_PLACES),
        }
    }

    /// Creates a zero amount
    pub fn zero() -> Self {
        Self { amount: dec!(0) }
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the amount in integer minor units (cents)
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::Overflow` if the amount does not fit in an i64
    /// minor-unit representation.
    pub fn to_minor(&self) -> Result<i64, MoneyError> {
        self.amount
            .checked_mul(Decimal::new(10_i64.pow(DECIMAL_PLACES), 0))
            .and_then(|scaled| scaled.round().to_i64())
            .ok_or(MoneyError::Overflow)
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Returns the absolute value
    pub fn abs(&self) -> Self {
        Self {
            amount: self.amount.abs(),
        }
    }

    /// Checked addition that returns an error on overflow
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        self.amount
            .checked_add(other.amount)
            .map(Self::new)
            .ok_or(MoneyError::Overflow)
    }

    /// Checked subtraction that returns an error on overflow
    pub fn checked_sub(&self, other: &Money) -> Result<Money, MoneyError> {
        self.amount
            .checked_sub(other.amount)
            .map(Self::new)
            .ok_or(MoneyError::Overflow)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.dp$}", self.amount, dp = DECIMAL_PLACES as usize)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.checked_add(&other).expect("Overflow in Money::add")
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.checked_sub(&other).expect("Overflow in Money::sub")
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_creation() {
        let m = Money::new(dec!(100.50));
        assert_eq!(m.amount(), dec!(100.50));
    }

    #[test]
    fn test_money_rounds_to_standard_precision() {
        let m = Money::new(dec!(10.005));
        assert_eq!(m.amount(), dec!(10.00));
    }

    #[test]
    fn test_money_from_minor() {
        let m = Money::from_minor(10050);
        assert_eq!(m.amount(), dec!(100.50));
    }

    #[test]
    fn test_money_to_minor() {
        let m = Money::new(dec!(100.50));
        assert_eq!(m.to_minor().unwrap(), 10050);
    }

    #[test]
    fn test_negative_minor_units() {
        let m = Money::from_minor(-2000);
        assert_eq!(m.amount(), dec!(-20.00));
        assert!(m.is_negative());
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::new(dec!(100.00));
        let b = Money::new(dec!(50.00));

        assert_eq!((a + b).amount(), dec!(150.00));
        assert_eq!((a - b).amount(), dec!(50.00));
    }

    #[test]
    fn test_money_ordering() {
        let small = Money::new(dec!(10.00));
        let large = Money::new(dec!(20.00));

        assert!(small < large);
        assert!(large > Money::zero());
    }

    #[test]
    fn test_sign_predicates() {
        assert!(Money::new(dec!(5)).is_positive());
        assert!(!Money::zero().is_positive());
        assert!(Money::new(dec!(-5)).is_negative());
        assert!(!Money::zero().is_negative());
    }

    #[test]
    fn test_negation() {
        let m = Money::new(dec!(25.00));
        assert_eq!((-m).amount(), dec!(-25.00));
        assert_eq!((-m).abs(), m);
    }
}

//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation so cart totals are exact sums
//! of `unit price * quantity`, with no floating-point drift.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

use crate::price::PriceParser;

/// Number of minor units in one major unit (centavos per real).
pub const CENTS_PER_UNIT: i64 = 100;

/// A monetary value in the menu's single currency.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Money {
    /// Amount in minor units (cents).
    pub amount_cents: i64,
}

impl Money {
    /// Create a new Money value from cents.
    pub const fn new(amount_cents: i64) -> Self {
        Self { amount_cents }
    }

    /// Create a Money value from a decimal amount, rounded to two places.
    ///
    /// ```
    /// use forno_commerce::money::Money;
    /// let price = Money::from_decimal(49.90);
    /// assert_eq!(price.amount_cents, 4990);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        Self::new((amount * CENTS_PER_UNIT as f64).round() as i64)
    }

    /// The zero amount.
    pub const fn zero() -> Self {
        Self::new(0)
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / CENTS_PER_UNIT as f64
    }

    /// Try to add another Money value, returning None on overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        self.amount_cents.checked_add(other.amount_cents).map(Money::new)
    }

    /// Try to multiply by a quantity, returning None on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.amount_cents.checked_mul(factor).map(Money::new)
    }

    /// Sum an iterator of Money values, returning None on overflow.
    pub fn try_sum<'a>(mut iter: impl Iterator<Item = &'a Money>) -> Option<Money> {
        iter.try_fold(Money::zero(), |acc, m| acc.try_add(m))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::new(self.amount_cents.saturating_add(other.amount_cents))
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        Money::new(self.amount_cents.saturating_mul(factor))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", PriceParser::default().format(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_decimal() {
        assert_eq!(Money::from_decimal(49.90).amount_cents, 4990);
        assert_eq!(Money::from_decimal(4.9).amount_cents, 490);
        assert_eq!(Money::from_decimal(0.005).amount_cents, 1);
    }

    #[test]
    fn test_money_to_decimal() {
        let m = Money::new(9980);
        assert!((m.to_decimal() - 99.80).abs() < 1e-9);
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::new(4990);
        let b = Money::new(5490);
        assert_eq!((a + b).amount_cents, 10480);
        assert_eq!((a * 2).amount_cents, 9980);
        assert_eq!(a.try_multiply(3), Some(Money::new(14970)));
    }

    #[test]
    fn test_money_overflow_is_detected() {
        let big = Money::new(i64::MAX);
        assert_eq!(big.try_add(&Money::new(1)), None);
        assert_eq!(big.try_multiply(2), None);
        assert_eq!((big + Money::new(1)).amount_cents, i64::MAX);
    }

    #[test]
    fn test_money_sum() {
        let values = [Money::new(100), Money::new(250)];
        assert_eq!(Money::try_sum(values.iter()), Some(Money::new(350)));
        assert_eq!(values.into_iter().sum::<Money>(), Money::new(350));
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(4990).to_string(), "R$ 49,90");
    }
}

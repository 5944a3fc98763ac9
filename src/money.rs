//! Drift-free monetary accumulator.
//!
//! [`Money`] counts minor units (cents) in an `i64`. Fractional major-unit amounts coming from
//! strategies are rounded half away from zero exactly once, when they enter the accumulator,
//! so summing many of them never accumulates representation error.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use rust_decimal::prelude::ToPrimitive as _;

/// Decimal places kept by [`Money`].
pub const MINOR_UNIT_SCALE: u32 = 2;

#[derive(Debug, Default, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Money(i64);

#[derive(thiserror::Error, Debug)]
pub enum MoneyError {
    #[error("amount out of range for minor units amount={amount}")]
    OutOfRange { amount: Decimal },
}

impl Money {
    pub const ZERO: Self = Self(0);

    pub const fn from_minor_units(minor_units: i64) -> Self {
        Self(minor_units)
    }

    /// Converts a major-unit amount, rounding half away from zero to the nearest minor unit.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::OutOfRange`] if the rounded amount does not fit an `i64` of minor units.
    pub fn from_major(amount: Decimal) -> Result<Self, MoneyError> {
        amount
            .round_dp_with_strategy(MINOR_UNIT_SCALE, RoundingStrategy::MidpointAwayFromZero)
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|minor_units| minor_units.to_i64())
            .map(Self)
            .ok_or(MoneyError::OutOfRange { amount })
    }

    pub const fn minor_units(self) -> i64 {
        self.0
    }

    /// Major-unit value with exactly [`MINOR_UNIT_SCALE`] decimal places.
    pub fn to_major(self) -> Decimal {
        Decimal::new(self.0, MINOR_UNIT_SCALE)
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_major())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;

    #[rstest]
    #[case(dec!(30), 3000)]
    #[case(dec!(0.005), 1)]
    #[case(dec!(0.004999), 0)]
    #[case(dec!(2.675), 268)]
    #[case(dec!(-2.675), -268)]
    #[case(dec!(-0.005), -1)]
    #[case(dec!(13.4999), 1350)]
    #[case(dec!(0), 0)]
    fn from_major_rounds_half_away_from_zero(#[case] amount: Decimal, #[case] expected_minor_units: i64) {
        assert2::let_assert!(Ok(money) = Money::from_major(amount));
        assert_eq!(money.minor_units(), expected_minor_units);
    }

    #[test]
    fn from_major_out_of_range_errors() {
        let amount = Decimal::MAX;
        assert2::let_assert!(Err(MoneyError::OutOfRange { amount: err_amount }) = Money::from_major(amount));
        assert_eq!(err_amount, amount);
    }

    #[rstest]
    #[case(3000, "30.00")]
    #[case(150, "1.50")]
    #[case(-5, "-0.05")]
    #[case(0, "0.00")]
    fn to_major_keeps_two_decimal_places(#[case] minor_units: i64, #[case] expected: &str) {
        assert_eq!(Money::from_minor_units(minor_units).to_major().to_string(), expected);
        assert_eq!(Money::from_minor_units(minor_units).to_string(), expected);
    }

    #[test]
    fn accumulating_many_small_amounts_does_not_drift() {
        let mut total = Money::ZERO;
        for _ in 0..10_000 {
            total = total.checked_add(Money::from_major(dec!(0.1)).unwrap()).unwrap();
        }
        assert_eq!(total.to_major(), dec!(1000.00));
    }

    #[test]
    fn converting_back_and_forth_is_idempotent() {
        let money = Money::from_major(dec!(1234.565)).unwrap();
        let again = Money::from_major(money.to_major()).unwrap();
        assert_eq!(money, again);
        assert_eq!(again.to_major().to_string(), "1234.57");
    }

    #[test]
    fn checked_add_and_sub_detect_overflow() {
        assert_eq!(Money::from_minor_units(i64::MAX).checked_add(Money::from_minor_units(1)), None);
        assert_eq!(Money::from_minor_units(i64::MIN).checked_sub(Money::from_minor_units(1)), None);
        assert_eq!(
            Money::from_minor_units(500).checked_sub(Money::from_minor_units(700)),
            Some(Money::from_minor_units(-200))
        );
    }
}

//! Monetary amounts charged to riders.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Number of fractional digits fares are rounded to.
pub const FARE_DECIMAL_PLACES: u32 = 2;

/// Error returned when a price per distance unit is not strictly positive.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid price per distance unit: {reason}")]
pub struct InvalidPrice {
    reason: &'static str,
}

/// A monetary amount.
///
/// Backed by a fixed-point decimal so that values such as `0.67` are exact.
/// Arithmetic never rounds implicitly; call [`Fare::rounded`] where the
/// fare rules ask for it.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fare(Decimal);

impl Fare {
    /// The zero amount.
    pub const ZERO: Fare = Fare(Decimal::ZERO);

    /// Wrap a decimal amount.
    pub fn new(amount: Decimal) -> Self {
        Fare(amount)
    }

    /// Build an amount from an integer count of hundredths.
    ///
    /// ```
    /// use shared_ride::domain::Fare;
    ///
    /// assert_eq!(Fare::from_cents(250).to_string(), "2.50");
    /// ```
    pub fn from_cents(cents: i64) -> Self {
        Fare(Decimal::new(cents, FARE_DECIMAL_PLACES))
    }

    /// Returns the underlying decimal.
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Round to [`FARE_DECIMAL_PLACES`] using banker's rounding
    /// (midpoints go to the even neighbour).
    ///
    /// ```
    /// use rust_decimal::Decimal;
    /// use shared_ride::domain::Fare;
    ///
    /// assert_eq!(Fare::new(Decimal::new(125, 3)).rounded(), Fare::from_cents(12));
    /// assert_eq!(Fare::new(Decimal::new(135, 3)).rounded(), Fare::from_cents(14));
    /// ```
    pub fn rounded(&self) -> Self {
        Fare(
            self.0
                .round_dp_with_strategy(FARE_DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven),
        )
    }

    /// Split this amount evenly between `ways` riders, rounded per rider.
    ///
    /// Returns `None` when `ways` is zero.
    pub fn split(&self, ways: usize) -> Option<Self> {
        if ways == 0 {
            return None;
        }
        Some(Fare(self.0 / Decimal::from(ways)).rounded())
    }

    /// Returns true if the amount is strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }
}

impl From<Decimal> for Fare {
    fn from(amount: Decimal) -> Self {
        Fare(amount)
    }
}

impl Add for Fare {
    type Output = Fare;

    fn add(self, rhs: Fare) -> Fare {
        Fare(self.0 + rhs.0)
    }
}

impl AddAssign for Fare {
    fn add_assign(&mut self, rhs: Fare) {
        self.0 += rhs.0;
    }
}

impl Sum for Fare {
    fn sum<I: Iterator<Item = Fare>>(iter: I) -> Self {
        iter.fold(Fare::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Fare> for Fare {
    fn sum<I: Iterator<Item = &'a Fare>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Debug for Fare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fare({})", self.0)
    }
}

impl fmt::Display for Fare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// The price of one distance unit. Always strictly positive.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use shared_ride::domain::UnitPrice;
///
/// let price = UnitPrice::new(Decimal::new(200, 2)).unwrap();
/// assert_eq!(price.to_string(), "2.00");
///
/// assert!(UnitPrice::new(Decimal::ZERO).is_err());
/// assert!(UnitPrice::new(Decimal::new(-250, 2)).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnitPrice(Fare);

impl UnitPrice {
    /// Validate a price per distance unit.
    pub fn new(amount: Decimal) -> Result<Self, InvalidPrice> {
        let fare = Fare::new(amount);
        if !fare.is_positive() {
            return Err(InvalidPrice {
                reason: "must be greater than zero",
            });
        }
        Ok(UnitPrice(fare))
    }

    /// Returns the price as a fare.
    pub fn fare(&self) -> Fare {
        self.0
    }
}

impl fmt::Debug for UnitPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UnitPrice({})", self.0)
    }
}

impl fmt::Display for UnitPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(cents: i64) -> Decimal {
        Decimal::new(cents, 2)
    }

    #[test]
    fn from_cents() {
        assert_eq!(Fare::from_cents(200).amount(), dec(200));
        assert_eq!(Fare::from_cents(67).amount(), dec(67));
    }

    #[test]
    fn split_one_way_is_exact() {
        let price = Fare::from_cents(200);
        assert_eq!(price.split(1), Some(price));
    }

    #[test]
    fn split_two_ways() {
        assert_eq!(Fare::from_cents(200).split(2), Some(Fare::from_cents(100)));
    }

    #[test]
    fn split_three_ways_rounds_up() {
        assert_eq!(Fare::from_cents(200).split(3), Some(Fare::from_cents(67)));
    }

    #[test]
    fn split_zero_ways_is_none() {
        assert_eq!(Fare::from_cents(200).split(0), None);
    }

    #[test]
    fn rounding_is_bankers() {
        // 0.125 -> 0.12, 0.375 -> 0.38
        assert_eq!(Fare::new(Decimal::new(125, 3)).rounded(), Fare::from_cents(12));
        assert_eq!(Fare::new(Decimal::new(375, 3)).rounded(), Fare::from_cents(38));
        // Non-midpoint rounds to nearest
        assert_eq!(Fare::new(Decimal::new(126, 3)).rounded(), Fare::from_cents(13));
    }

    #[test]
    fn sum_and_add_assign() {
        let fares = [Fare::from_cents(67), Fare::from_cents(67), Fare::from_cents(67)];
        let total: Fare = fares.iter().sum();
        assert_eq!(total, Fare::from_cents(201));

        let mut balance = Fare::ZERO;
        balance += Fare::from_cents(100);
        balance += Fare::from_cents(50);
        assert_eq!(balance, Fare::from_cents(150));
    }

    #[test]
    fn display_and_debug() {
        let fare = Fare::from_cents(201);
        assert_eq!(fare.to_string(), "2.01");
        assert_eq!(format!("{:?}", fare), "Fare(2.01)");
    }

    #[test]
    fn unit_price_rejects_non_positive() {
        assert!(UnitPrice::new(Decimal::ZERO).is_err());
        assert!(UnitPrice::new(dec(-250)).is_err());
        assert!(UnitPrice::new(dec(1)).is_ok());
    }

    #[test]
    fn invalid_price_display() {
        let err = UnitPrice::new(Decimal::ZERO).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid price per distance unit: must be greater than zero"
        );
    }

    #[test]
    fn serde_transparent() {
        let fare: Fare = serde_json::from_str("\"0.67\"").unwrap();
        assert_eq!(fare, Fare::from_cents(67));
        assert_eq!(serde_json::to_string(&fare).unwrap(), "\"0.67\"");
    }
}

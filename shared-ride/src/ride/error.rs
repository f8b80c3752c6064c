//! Ride error types.
//!
//! These errors are caller contract violations. Riders being turned away
//! for lack of seats or consent is a normal outcome and is reported through
//! [`Boarding`](super::Boarding), not here.

use crate::domain::{InvalidCapacity, InvalidPrice};

/// Errors from building or driving a ride.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RideError {
    /// Boarding was requested with no candidates
    #[error("no new riders given")]
    EmptyBatch,

    /// The candidates of one batch wait at different places
    #[error("all new riders must share one pick-up location ({distinct} given)")]
    MixedPickUpLocations { distinct: usize },

    /// A distance unit elapsed with nobody aboard
    #[error("there must be riders aboard when distance costs are collected")]
    EmptyVehicle,

    /// The vehicle has no seats
    #[error(transparent)]
    InvalidCapacity(#[from] InvalidCapacity),

    /// The price per distance unit is not positive
    #[error(transparent)]
    InvalidPrice(#[from] InvalidPrice),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SeatCapacity, UnitPrice};
    use rust_decimal::Decimal;

    #[test]
    fn error_display() {
        let err = RideError::EmptyBatch;
        assert_eq!(err.to_string(), "no new riders given");

        let err = RideError::MixedPickUpLocations { distinct: 2 };
        assert_eq!(
            err.to_string(),
            "all new riders must share one pick-up location (2 given)"
        );

        let err = RideError::EmptyVehicle;
        assert_eq!(
            err.to_string(),
            "there must be riders aboard when distance costs are collected"
        );

        let err = RideError::from(SeatCapacity::new(0).unwrap_err());
        assert_eq!(
            err.to_string(),
            "invalid seat capacity: there must be at least one passenger seat"
        );

        let err = RideError::from(UnitPrice::new(Decimal::ZERO).unwrap_err());
        assert_eq!(
            err.to_string(),
            "invalid price per distance unit: must be greater than zero"
        );
    }
}

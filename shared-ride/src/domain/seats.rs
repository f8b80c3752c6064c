//! Seat capacity of a vehicle.

use std::fmt;
use std::num::NonZeroU8;

/// Error returned when a vehicle is configured without passenger seats.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid seat capacity: {reason}")]
pub struct InvalidCapacity {
    reason: &'static str,
}

/// Number of passenger seats in a vehicle. Always at least one.
///
/// # Examples
///
/// ```
/// use shared_ride::domain::SeatCapacity;
///
/// let seats = SeatCapacity::new(4).unwrap();
/// assert_eq!(seats.get(), 4);
///
/// assert!(SeatCapacity::new(0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SeatCapacity(NonZeroU8);

impl SeatCapacity {
    /// Validate a seat count.
    pub fn new(seats: u8) -> Result<Self, InvalidCapacity> {
        NonZeroU8::new(seats)
            .map(SeatCapacity)
            .ok_or(InvalidCapacity {
                reason: "there must be at least one passenger seat",
            })
    }

    /// Returns the number of seats.
    pub fn get(&self) -> usize {
        usize::from(self.0.get())
    }
}

impl fmt::Debug for SeatCapacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SeatCapacity({})", self.0)
    }
}

impl fmt::Display for SeatCapacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_seats_rejected() {
        let err = SeatCapacity::new(0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid seat capacity: there must be at least one passenger seat"
        );
    }

    #[test]
    fn one_seat_accepted() {
        assert_eq!(SeatCapacity::new(1).unwrap().get(), 1);
    }

    #[test]
    fn max_seats_accepted() {
        assert_eq!(SeatCapacity::new(u8::MAX).unwrap().get(), 255);
    }

    #[test]
    fn display_and_debug() {
        let seats = SeatCapacity::new(4).unwrap();
        assert_eq!(seats.to_string(), "4");
        assert_eq!(format!("{:?}", seats), "SeatCapacity(4)");
    }
}

//! Domain value types for the shared ride engine.
//!
//! Every type here enforces its invariants at construction time, so code
//! that receives one can trust its validity.

mod fare;
mod seats;

pub use fare::{FARE_DECIMAL_PLACES, Fare, InvalidPrice, UnitPrice};
pub use seats::{InvalidCapacity, SeatCapacity};

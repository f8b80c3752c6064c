//! A shared ride: boarding, fare sharing and settlement.
//!
//! A [`Ride`] owns the riders aboard one vehicle. The host drives it with
//! three events:
//!
//! - [`Ride::request_boarding`] when riders ask to join at a pick-up,
//! - [`Ride::tick`] each time the vehicle covers one distance unit,
//! - [`Ride::arrive_at`] when the vehicle reaches a stop.
//!
//! Everything runs synchronously on the caller's thread. A ride shared
//! between callers must be serialized by the host.

mod admission;
mod config;
mod error;
mod meter;
mod roster;

use std::path::Path;

use rust_decimal::Decimal;
use tracing::debug;

use crate::domain::{Fare, SeatCapacity, UnitPrice};
use crate::rider::BoardedRider;

pub use admission::{Boarding, Rejection};
pub use config::{ConfigError, RideConfig};
pub use error::RideError;
pub use roster::Roster;

/// One vehicle's shared ride.
#[derive(Debug)]
pub struct Ride<R> {
    roster: Roster<R>,
    price: UnitPrice,
}

impl<R: BoardedRider> Ride<R> {
    /// Create an empty ride.
    ///
    /// Fails if there are no seats or the price is not positive.
    pub fn new(seats: u8, price_per_unit: Decimal) -> Result<Self, RideError> {
        let seats = SeatCapacity::new(seats)?;
        let price = UnitPrice::new(price_per_unit)?;
        Ok(Self::with_capacity(seats, price))
    }

    /// Create an empty ride from already validated values.
    pub fn with_capacity(seats: SeatCapacity, price: UnitPrice) -> Self {
        Self {
            roster: Roster::new(seats),
            price,
        }
    }

    /// Create an empty ride from configuration.
    pub fn from_config(config: &RideConfig) -> Result<Self, RideError> {
        let (seats, price) = config.validate()?;
        Ok(Self::with_capacity(seats, price))
    }

    /// Create an empty ride from a JSON configuration file.
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = RideConfig::from_json_file(path)?;
        Ok(Self::from_config(&config)?)
    }

    /// Ask to board a batch of candidates waiting at one pick-up.
    ///
    /// Errors if the batch is empty or its candidates wait at different
    /// places. Otherwise the batch either boards as a whole or is handed
    /// back with the reason; see [`Boarding`].
    pub fn request_boarding(
        &mut self,
        candidates: Vec<R::Candidate>,
    ) -> Result<Boarding<R::Candidate>, RideError> {
        admission::admit(&mut self.roster, candidates)
    }

    /// One distance unit elapsed. Charges each rider aboard an equal share.
    ///
    /// Returns the share charged, or [`RideError::EmptyVehicle`] if nobody
    /// is aboard.
    pub fn tick(&mut self) -> Result<Fare, RideError> {
        meter::tick(&mut self.roster, self.price)
    }

    /// The vehicle reached `location`. Every rider leaving here pays.
    ///
    /// Returns how many riders left. Reaching a stop nobody is heading to
    /// changes nothing.
    pub fn arrive_at(&mut self, location: &R::Location) -> usize {
        let leaving = self.roster.drop_off_at(location);
        let settled = leaving.len();
        for rider in leaving {
            rider.pay();
        }
        if settled > 0 {
            debug!(
                location = ?location,
                settled,
                aboard = self.roster.len(),
                "Riders dropped off"
            );
        }
        settled
    }

    /// Number of riders aboard.
    pub fn occupancy(&self) -> usize {
        self.roster.len()
    }

    /// Returns true if nobody is aboard.
    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    /// Seats not taken right now.
    pub fn free_seats(&self) -> usize {
        self.roster.free_seats()
    }

    /// Returns the seat capacity.
    pub fn capacity(&self) -> SeatCapacity {
        self.roster.capacity()
    }

    /// Returns the price of one distance unit.
    pub fn price_per_unit(&self) -> UnitPrice {
        self.price
    }

    /// Iterate over the riders aboard.
    pub fn occupants(&self) -> impl Iterator<Item = &R> {
        self.roster.iter()
    }
}

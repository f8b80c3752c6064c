//! Splitting the cost of each distance unit among the riders aboard.

use tracing::{debug, trace, warn};

use crate::domain::{Fare, UnitPrice};
use crate::rider::BoardedRider;

use super::error::RideError;
use super::roster::Roster;

/// Charge every rider aboard an equal share of one distance unit.
///
/// The share is `price / riders aboard`, rounded to cents on every call.
/// Rounding per tick means the shares of one tick may not add up to the
/// price exactly (three riders on a 2.00 unit pay 0.67 each, 2.01 in
/// total). Returns the share charged to each rider.
pub fn tick<R: BoardedRider>(roster: &mut Roster<R>, price: UnitPrice) -> Result<Fare, RideError> {
    let Some(share) = price.fare().split(roster.len()) else {
        warn!("Distance unit elapsed with an empty vehicle");
        return Err(RideError::EmptyVehicle);
    };

    for rider in roster.iter_mut() {
        trace!(drop_off = ?rider.drop_off_location(), %share, "Charging rider");
        rider.add_cost(share);
    }

    debug!(aboard = roster.len(), %price, %share, "Distance unit charged");
    Ok(share)
}

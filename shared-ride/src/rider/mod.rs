//! Riders and the places they board and leave.
//!
//! The ride engine only talks to riders through the traits in this module.
//! [`RideRequest`] and [`Passenger`] are ready-made implementations for
//! hosts that have no rider model of their own.

mod ledger;
mod passenger;
mod policy;
mod route_stop;

use std::fmt;

use crate::domain::Fare;

pub use ledger::{Ledger, Receipt};
pub use passenger::{Passenger, RideRequest};
pub use policy::SharingPolicy;
pub use route_stop::RouteStop;

/// A place where riders are picked up or dropped off.
///
/// Locations are compared by equality when riders leave, and ordered by
/// closeness (along the vehicle's route) when deciding who leaves before a
/// new pick-up.
pub trait Location: PartialEq + fmt::Debug {
    /// Returns true if the vehicle reaches `self` strictly before `other`.
    fn is_closer_than(&self, other: &Self) -> bool;
}

/// A pending request to board.
pub trait CandidateRider {
    /// Location type shared with the boarded rider.
    type Location: Location;

    /// The rider this request turns into once admitted.
    type Boarded;

    /// Where the candidate waits to be picked up.
    fn pick_up_location(&self) -> &Self::Location;

    /// Materialize into a boarded rider.
    fn board(self) -> Self::Boarded;
}

/// A rider currently in the vehicle.
pub trait BoardedRider: Sized {
    /// Location type used for drop-off.
    type Location: Location;

    /// Candidates this rider is asked to share the vehicle with.
    type Candidate: CandidateRider<Location = Self::Location, Boarded = Self>;

    /// Where this rider leaves the vehicle. Fixed at boarding.
    fn drop_off_location(&self) -> &Self::Location;

    /// Vote on a batch of candidates who want to join.
    fn accept_new_riders(&self, candidates: &[Self::Candidate]) -> bool;

    /// Add one share of a distance unit's cost to the balance.
    fn add_cost(&mut self, amount: Fare);

    /// Settle the accumulated balance. Consumes the rider.
    fn pay(self);
}

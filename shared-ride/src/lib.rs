//! Shared ride admission and fare-sharing engine.
//!
//! Models a vehicle that picks up groups of riders along its route, splits
//! the cost of every distance unit among whoever is aboard, and settles
//! each rider's fare when they reach their drop-off.
//!
//! ```
//! use rust_decimal::Decimal;
//! use shared_ride::domain::Fare;
//! use shared_ride::ride::Ride;
//! use shared_ride::rider::{Ledger, Passenger, RideRequest, RouteStop};
//!
//! let ledger = Ledger::new();
//! let mut ride: Ride<Passenger<RouteStop>> = Ride::new(4, Decimal::new(200, 2)).unwrap();
//!
//! let request = RideRequest::new("ada", RouteStop::new(0), RouteStop::new(2), &ledger);
//! assert!(ride.request_boarding(vec![request]).unwrap().is_admitted());
//!
//! ride.tick().unwrap();
//! ride.tick().unwrap();
//! ride.arrive_at(&RouteStop::new(2));
//!
//! assert_eq!(ledger.total(), Fare::from_cents(400));
//! ```

pub mod domain;
#[cfg(test)]
mod fakes;
pub mod ride;
pub mod rider;

//! Stops identified by their position along the route.

use std::fmt;

use super::Location;

/// A stop on the vehicle's route, numbered in the order the vehicle
/// reaches it.
///
/// # Examples
///
/// ```
/// use shared_ride::rider::{Location, RouteStop};
///
/// let station = RouteStop::new(3);
/// let airport = RouteStop::new(7);
///
/// assert!(station.is_closer_than(&airport));
/// assert!(!airport.is_closer_than(&station));
/// assert!(!station.is_closer_than(&station));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RouteStop(u32);

impl RouteStop {
    /// Create a stop at the given position along the route.
    pub fn new(position: u32) -> Self {
        RouteStop(position)
    }

    /// Returns the position along the route.
    pub fn position(&self) -> u32 {
        self.0
    }
}

impl Location for RouteStop {
    fn is_closer_than(&self, other: &Self) -> bool {
        self.0 < other.0
    }
}

impl fmt::Debug for RouteStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteStop({})", self.0)
    }
}

impl fmt::Display for RouteStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stop {}", self.0)
    }
}

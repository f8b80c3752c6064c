//! Ready-made rider implementations.

use tracing::debug;

use crate::domain::Fare;

use super::{BoardedRider, CandidateRider, Ledger, Location, SharingPolicy};

/// A named request to ride from one stop to another.
#[derive(Debug, Clone)]
pub struct RideRequest<L> {
    name: String,
    pick_up: L,
    drop_off: L,
    policy: SharingPolicy,
    ledger: Ledger,
}

impl<L: Location> RideRequest<L> {
    /// Create a request that settles into `ledger` and accepts any company.
    pub fn new(name: impl Into<String>, pick_up: L, drop_off: L, ledger: &Ledger) -> Self {
        Self {
            name: name.into(),
            pick_up,
            drop_off,
            policy: SharingPolicy::default(),
            ledger: ledger.clone(),
        }
    }

    /// Set how the passenger will vote once aboard.
    pub fn with_policy(mut self, policy: SharingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the rider's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the requested drop-off.
    pub fn drop_off(&self) -> &L {
        &self.drop_off
    }
}

impl<L: Location> CandidateRider for RideRequest<L> {
    type Location = L;
    type Boarded = Passenger<L>;

    fn pick_up_location(&self) -> &L {
        &self.pick_up
    }

    fn board(self) -> Passenger<L> {
        Passenger {
            name: self.name,
            drop_off: self.drop_off,
            policy: self.policy,
            balance: Fare::ZERO,
            ledger: self.ledger,
        }
    }
}

/// A rider in the vehicle, accruing a fare balance until drop-off.
#[derive(Debug)]
pub struct Passenger<L> {
    name: String,
    drop_off: L,
    policy: SharingPolicy,
    balance: Fare,
    ledger: Ledger,
}

impl<L> Passenger<L> {
    /// Returns the rider's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the fare accrued so far.
    pub fn balance(&self) -> Fare {
        self.balance
    }

    /// Returns the sharing policy.
    pub fn policy(&self) -> SharingPolicy {
        self.policy
    }
}

impl<L: Location> BoardedRider for Passenger<L> {
    type Location = L;
    type Candidate = RideRequest<L>;

    fn drop_off_location(&self) -> &L {
        &self.drop_off
    }

    fn accept_new_riders(&self, candidates: &[RideRequest<L>]) -> bool {
        self.policy.accepts(candidates.len())
    }

    fn add_cost(&mut self, amount: Fare) {
        self.balance += amount;
    }

    fn pay(self) {
        debug!(rider = %self.name, amount = %self.balance, "Passenger settled fare");
        self.ledger.record(self.name, self.balance);
    }
}

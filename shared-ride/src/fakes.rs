//! Recording rider doubles for unit tests.
//!
//! Every fake rider writes what happens to it into a shared [`RiderLog`],
//! which outlives the rider so tests can inspect it after payment.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::domain::Fare;
use crate::rider::{BoardedRider, CandidateRider, RouteStop};

/// What happened to one rider.
#[derive(Debug, Default)]
pub struct RiderLog {
    costs: RefCell<Vec<Fare>>,
    votes: Cell<usize>,
    payments: Cell<usize>,
    last_batch_len: Cell<Option<usize>>,
}

impl RiderLog {
    /// Every amount passed to `add_cost`, in order.
    pub fn costs(&self) -> Vec<Fare> {
        self.costs.borrow().clone()
    }

    /// Number of `add_cost` calls with exactly `amount`.
    pub fn cost_count(&self, amount: Fare) -> usize {
        self.costs.borrow().iter().filter(|c| **c == amount).count()
    }

    /// Sum of all costs.
    pub fn charged(&self) -> Fare {
        self.costs.borrow().iter().sum()
    }

    /// Number of times the rider was asked to vote.
    pub fn votes(&self) -> usize {
        self.votes.get()
    }

    /// Size of the last batch the rider voted on.
    pub fn last_batch_len(&self) -> Option<usize> {
        self.last_batch_len.get()
    }

    /// Number of `pay` calls.
    pub fn payments(&self) -> usize {
        self.payments.get()
    }
}

/// A candidate with a scripted vote for once it is aboard.
#[derive(Debug, Clone)]
pub struct FakeCandidate {
    pub pick_up: RouteStop,
    pub drop_off: RouteStop,
    pub accepts: bool,
    pub log: Rc<RiderLog>,
}

impl FakeCandidate {
    /// A candidate that will accept any company.
    pub fn new(pick_up: u32, drop_off: u32) -> Self {
        Self {
            pick_up: RouteStop::new(pick_up),
            drop_off: RouteStop::new(drop_off),
            accepts: true,
            log: Rc::default(),
        }
    }

    /// A candidate that will veto every batch once aboard.
    pub fn refusing(pick_up: u32, drop_off: u32) -> Self {
        Self {
            accepts: false,
            ..Self::new(pick_up, drop_off)
        }
    }

    /// Handle on this rider's log.
    pub fn log(&self) -> Rc<RiderLog> {
        Rc::clone(&self.log)
    }
}

impl CandidateRider for FakeCandidate {
    type Location = RouteStop;
    type Boarded = FakeRider;

    fn pick_up_location(&self) -> &RouteStop {
        &self.pick_up
    }

    fn board(self) -> FakeRider {
        FakeRider {
            drop_off: self.drop_off,
            accepts: self.accepts,
            log: self.log,
        }
    }
}

/// A boarded fake rider.
#[derive(Debug)]
pub struct FakeRider {
    drop_off: RouteStop,
    accepts: bool,
    log: Rc<RiderLog>,
}

impl BoardedRider for FakeRider {
    type Location = RouteStop;
    type Candidate = FakeCandidate;

    fn drop_off_location(&self) -> &RouteStop {
        &self.drop_off
    }

    fn accept_new_riders(&self, candidates: &[FakeCandidate]) -> bool {
        self.log.votes.set(self.log.votes.get() + 1);
        self.log.last_batch_len.set(Some(candidates.len()));
        self.accepts
    }

    fn add_cost(&mut self, amount: Fare) {
        self.log.costs.borrow_mut().push(amount);
    }

    fn pay(self) {
        self.log.payments.set(self.log.payments.get() + 1);
    }
}

/// `n` accepting candidates waiting at `pick_up`, all heading to `drop_off`.
pub fn batch(n: usize, pick_up: u32, drop_off: u32) -> Vec<FakeCandidate> {
    (0..n).map(|_| FakeCandidate::new(pick_up, drop_off)).collect()
}

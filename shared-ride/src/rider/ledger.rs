//! Record of settled fares.

use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::Fare;

/// One settled fare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// Who paid.
    pub rider: String,

    /// How much.
    pub amount: Fare,
}

/// Shared, single-threaded record of settlements.
///
/// Clones share the same underlying record, so every passenger of a ride can
/// hold its own handle.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    receipts: Rc<RefCell<Vec<Receipt>>>,
}

impl Ledger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a settlement.
    pub fn record(&self, rider: impl Into<String>, amount: Fare) {
        self.receipts.borrow_mut().push(Receipt {
            rider: rider.into(),
            amount,
        });
    }

    /// Returns a snapshot of all receipts, oldest first.
    pub fn receipts(&self) -> Vec<Receipt> {
        self.receipts.borrow().clone()
    }

    /// Returns the receipt for the named rider, if they have paid.
    pub fn receipt_for(&self, rider: &str) -> Option<Receipt> {
        self.receipts
            .borrow()
            .iter()
            .find(|r| r.rider == rider)
            .cloned()
    }

    /// Sum of all settled amounts.
    pub fn total(&self) -> Fare {
        self.receipts.borrow().iter().map(|r| r.amount).sum()
    }

    /// Number of settlements recorded.
    pub fn len(&self) -> usize {
        self.receipts.borrow().len()
    }

    /// Returns true if nobody has paid yet.
    pub fn is_empty(&self) -> bool {
        self.receipts.borrow().is_empty()
    }
}

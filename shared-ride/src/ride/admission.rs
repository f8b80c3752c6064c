//! Deciding whether a batch of candidates may board.
//!
//! A batch is admitted only if all of the following hold, checked in order:
//!
//! 1. it is not empty (contract),
//! 2. every candidate waits at the same pick-up location (contract),
//! 3. the vehicle has room for the whole batch once riders leaving before
//!    the pick-up are out,
//! 4. every rider still aboard at the pick-up agrees to share.
//!
//! Failing 1 or 2 is an error. Failing 3 or 4 turns the batch away.
//! Admission is all-or-nothing: the roster changes only when the whole
//! batch boards.

use tracing::{debug, trace, warn};

use crate::rider::{BoardedRider, CandidateRider, Location};

use super::error::RideError;
use super::roster::Roster;

/// Why a batch was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Not enough seats at the pick-up.
    NoCapacity,

    /// A rider still aboard at the pick-up refused to share.
    Vetoed,
}

/// Outcome of a boarding request.
#[derive(Debug)]
pub enum Boarding<C> {
    /// The whole batch is aboard.
    Admitted {
        /// Number of riders who boarded.
        riders: usize,
    },

    /// Nobody boarded. The candidates are handed back.
    Rejected {
        reason: Rejection,
        candidates: Vec<C>,
    },
}

impl<C> Boarding<C> {
    /// Returns true if the batch boarded.
    pub fn is_admitted(&self) -> bool {
        matches!(self, Boarding::Admitted { .. })
    }

    /// Returns the rejection reason, if the batch was turned away.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Boarding::Admitted { .. } => None,
            Boarding::Rejected { reason, .. } => Some(*reason),
        }
    }

    /// Take back rejected candidates. Empty if the batch boarded.
    pub fn into_candidates(self) -> Vec<C> {
        match self {
            Boarding::Admitted { .. } => Vec::new(),
            Boarding::Rejected { candidates, .. } => candidates,
        }
    }
}

/// Run the full admission decision and board the batch if it passes.
pub fn admit<R: BoardedRider>(
    roster: &mut Roster<R>,
    candidates: Vec<R::Candidate>,
) -> Result<Boarding<R::Candidate>, RideError> {
    let pick_up = shared_pick_up(&candidates)?;
    let batch_len = candidates.len();

    if !roster.fits_new_riders(pick_up, batch_len) {
        debug!(
            batch = batch_len,
            aboard = roster.len(),
            capacity = roster.capacity().get(),
            pick_up = ?pick_up,
            "Batch rejected: not enough seats"
        );
        return Ok(Boarding::Rejected {
            reason: Rejection::NoCapacity,
            candidates,
        });
    }

    if !reach_consensus(roster, pick_up, &candidates) {
        debug!(batch = batch_len, pick_up = ?pick_up, "Batch rejected: vetoed by a rider aboard");
        return Ok(Boarding::Rejected {
            reason: Rejection::Vetoed,
            candidates,
        });
    }

    roster.add(candidates);
    debug!(
        batch = batch_len,
        aboard = roster.len(),
        "Batch admitted"
    );
    Ok(Boarding::Admitted { riders: batch_len })
}

/// Returns the one pick-up location every candidate shares.
fn shared_pick_up<C: CandidateRider>(candidates: &[C]) -> Result<&C::Location, RideError> {
    let Some(first) = candidates.first() else {
        warn!("Boarding requested with no candidates");
        return Err(RideError::EmptyBatch);
    };

    let mut distinct: Vec<&C::Location> = vec![first.pick_up_location()];
    for candidate in &candidates[1..] {
        let location = candidate.pick_up_location();
        if !distinct.contains(&location) {
            distinct.push(location);
        }
    }

    if distinct.len() > 1 {
        warn!(distinct = distinct.len(), "Batch has mixed pick-up locations");
        return Err(RideError::MixedPickUpLocations {
            distinct: distinct.len(),
        });
    }

    Ok(first.pick_up_location())
}

/// Ask every rider still aboard at `pick_up` whether they accept the batch.
///
/// Riders leaving before `pick_up` never meet the newcomers and do not
/// vote. Asking stops at the first refusal.
fn reach_consensus<R: BoardedRider>(
    roster: &Roster<R>,
    pick_up: &R::Location,
    candidates: &[R::Candidate],
) -> bool {
    roster.iter().all(|rider| {
        let drop_off = rider.drop_off_location();
        if drop_off.is_closer_than(pick_up) {
            trace!(drop_off = ?drop_off, "Rider leaves before pick-up, not voting");
            return true;
        }
        let accepted = rider.accept_new_riders(candidates);
        trace!(drop_off = ?drop_off, accepted, "Rider voted");
        accepted
    })
}

//! The riders currently aboard.

use crate::domain::SeatCapacity;
use crate::rider::{BoardedRider, CandidateRider, Location};

/// Riders in the vehicle, bounded by its seat capacity.
///
/// Order carries no meaning; only membership and each rider's drop-off do.
/// The roster never checks capacity on insertion. Callers ask
/// [`Roster::fits_new_riders`] first.
#[derive(Debug)]
pub struct Roster<R> {
    riders: Vec<R>,
    capacity: SeatCapacity,
}

impl<R: BoardedRider> Roster<R> {
    /// Create an empty roster.
    pub fn new(capacity: SeatCapacity) -> Self {
        Self {
            riders: Vec::with_capacity(capacity.get()),
            capacity,
        }
    }

    /// Number of riders aboard.
    pub fn len(&self) -> usize {
        self.riders.len()
    }

    /// Returns true if nobody is aboard.
    pub fn is_empty(&self) -> bool {
        self.riders.is_empty()
    }

    /// Returns true if at least one rider is aboard.
    pub fn any(&self) -> bool {
        !self.is_empty()
    }

    /// Returns the seat capacity.
    pub fn capacity(&self) -> SeatCapacity {
        self.capacity
    }

    /// Seats not taken right now.
    pub fn free_seats(&self) -> usize {
        self.capacity.get().saturating_sub(self.riders.len())
    }

    /// Board every candidate.
    pub fn add<I>(&mut self, candidates: I)
    where
        I: IntoIterator<Item = R::Candidate>,
    {
        self.riders
            .extend(candidates.into_iter().map(|candidate| candidate.board()));
    }

    /// Remove and return every rider leaving at `location`.
    ///
    /// Matches by equality. Riders whose stop is merely closer stay aboard.
    pub fn drop_off_at(&mut self, location: &R::Location) -> Vec<R> {
        let (leaving, staying): (Vec<R>, Vec<R>) = std::mem::take(&mut self.riders)
            .into_iter()
            .partition(|rider| rider.drop_off_location() == location);
        self.riders = staying;
        leaving
    }

    /// Returns true if `new_count` riders picked up at `pick_up` would fit.
    ///
    /// Riders who leave before `pick_up` free their seat in time, so they
    /// do not count against capacity.
    pub fn fits_new_riders(&self, pick_up: &R::Location, new_count: usize) -> bool {
        let leaving_before = self
            .riders
            .iter()
            .filter(|rider| rider.drop_off_location().is_closer_than(pick_up))
            .count();
        self.riders.len() + new_count - leaving_before <= self.capacity.get()
    }

    /// Iterate over the riders aboard.
    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.riders.iter()
    }

    /// Iterate mutably over the riders aboard.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut R> {
        self.riders.iter_mut()
    }
}

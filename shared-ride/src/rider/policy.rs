//! How a passenger votes on sharing the vehicle.

/// A passenger's stance on new riders joining mid-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SharingPolicy {
    /// Any batch is welcome.
    #[default]
    AlwaysAccept,

    /// No newcomers, ever.
    NeverShare,

    /// Accept batches of at most this many newcomers.
    UpTo(usize),
}

impl SharingPolicy {
    /// Decide on a batch of `newcomers` riders.
    pub fn accepts(&self, newcomers: usize) -> bool {
        match self {
            SharingPolicy::AlwaysAccept => true,
            SharingPolicy::NeverShare => false,
            SharingPolicy::UpTo(limit) => newcomers <= *limit,
        }
    }
}

//! Locked-balance schedule entries.

/// A scheduled future release of a fixed token amount. Entries are appended
/// and swap-removed; their order within a provider's list carries no meaning,
/// only membership and count do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct LockedBalance {
    /// Locked amount; always positive.
    pub amount: u128,

    /// Point in time after which the amount is eligible for release by an
    /// external collaborator.
    pub expiration_time: u64,
}

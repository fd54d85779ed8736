//! # Event Definitions
//!
//! Observable side-channel for off-host indexers. Events are appended to the
//! store's internal log by mutating operations and drained by the host via
//! [`ProtectionStore::take_events`](crate::store::ProtectionStore::take_events);
//! the engine never consumes them itself. Seeding emits nothing.

use crate::types::{Address, PositionId};

/// Everything the engine reports to observers.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum StoreEvent {
    /// A protected position was created.
    PositionAdded {
        id: PositionId,
        provider: Address,
        pool_token: Address,
        reserve_token: Address,
        pool_amount: u128,
        reserve_amount: u128,
    },

    /// A position's amounts changed in place.
    ///
    /// Deltas are `previous - new`, so a positive delta signals a decrease.
    /// The sign convention comes from the predecessor deployment's indexers
    /// and is preserved for compatibility.
    PositionUpdated {
        id: PositionId,
        pool_amount_delta: i128,
        reserve_amount_delta: i128,
    },

    /// A protected position was destroyed.
    PositionRemoved {
        id: PositionId,
        provider: Address,
        pool_token: Address,
        reserve_token: Address,
        pool_amount: u128,
        reserve_amount: u128,
    },

    /// A locked-balance entry was scheduled.
    BalanceLocked {
        provider: Address,
        amount: u128,
        expiration_time: u64,
    },

    /// A locked-balance entry was released. Carries no expiration, matching
    /// the predecessor deployment's event shape.
    BalanceUnlocked { provider: Address, amount: u128 },

    /// A per-token system balance changed.
    SystemBalanceUpdated {
        token: Address,
        prev_amount: u128,
        new_amount: u128,
    },
}

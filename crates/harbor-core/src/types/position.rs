//! Protected-liquidity position state.

use ethnum::U256;

use crate::types::Address;

/// One protected liquidity deposit, owned by the Position Ledger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProtectedPosition {
    /// Owning provider.
    pub provider: Address,

    /// Where this position's id sits in its provider's id list.
    /// Maintained so removal can swap-with-last in O(1).
    pub index_in_owner_list: usize,

    /// Pool whose liquidity is protected.
    pub pool_token: Address,

    /// The specific reserve asset protected.
    pub reserve_token: Address,

    /// Pool-token amount.
    pub pool_amount: u128,

    /// Reserve-token amount.
    pub reserve_amount: u128,

    /// Packed (numerator, denominator, timestamp) rate snapshot: the rate of
    /// one unit of `reserve_token` in units of the pool's other reserve, as
    /// observed at the packed timestamp.
    pub rate: U256,
}

/// Fully decoded read view of a position.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionInfo {
    pub provider: Address,
    pub pool_token: Address,
    pub reserve_token: Address,
    pub pool_amount: u128,
    pub reserve_amount: u128,
    pub rate_numerator: u128,
    pub rate_denominator: u128,
    pub rate_timestamp: u32,
    /// Index of this position's id within its provider's id list.
    pub index_in_owner_list: usize,
}

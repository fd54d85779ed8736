//! # Protection Store
//!
//! The engine root. A [`ProtectionStore`] is an owned value the host threads
//! through every call; it holds the position ledger, the per-provider
//! locked-balance schedules, the aggregate balances derived from live
//! positions, and the event log.
//!
//! Every mutating operation validates its inputs and pre-computes all
//! fallible arithmetic before the first write, so a rejection never leaves
//! partial effects behind. The engine contains no locking; a multi-threaded
//! host must serialize access with a single exclusive boundary.

mod locks;
mod positions;
mod seed;

use std::collections::BTreeMap;

use crate::errors::{StoreError, StoreResult};
use crate::events::StoreEvent;
use crate::types::{Address, LockedBalance, PositionId, ProtectedPosition};

/// In-memory liquidity-protection ledger.
#[derive(Clone, Debug, Default)]
pub struct ProtectionStore {
    /// The store's own identity. Operations reject identifiers equal to it,
    /// mirroring the predecessor's self-reference guard.
    address: Address,

    /// Next position id; strictly increasing, never reused.
    next_position_id: PositionId,

    /// Live positions keyed by id.
    positions: BTreeMap<PositionId, ProtectedPosition>,

    /// Per-provider dense lists of position ids. Each position records its
    /// own index in this list so removal is swap-with-last, O(1).
    provider_ids: BTreeMap<Address, Vec<PositionId>>,

    /// Per-provider locked-balance schedules.
    locked_balances: BTreeMap<Address, Vec<LockedBalance>>,

    /// Per-token system balances, independent of positions.
    system_balances: BTreeMap<Address, u128>,

    /// Sum of `pool_amount` over live positions, per pool.
    total_pool_amounts: BTreeMap<Address, u128>,

    /// Sum of `reserve_amount` over live positions, per (pool, reserve).
    total_reserve_amounts: BTreeMap<(Address, Address), u128>,

    /// Pending events, drained by the host.
    events: Vec<StoreEvent>,
}

impl ProtectionStore {
    /// Create an empty store that knows its own identity.
    pub fn new(address: Address) -> Self {
        Self {
            address,
            ..Self::default()
        }
    }

    /// The store's own identity.
    pub fn address(&self) -> Address {
        self.address
    }

    // ========================================================================
    // Events
    // ========================================================================

    /// Events recorded since the last drain, oldest first.
    pub fn events(&self) -> &[StoreEvent] {
        &self.events
    }

    /// Drain the event log, handing ownership to the host.
    pub fn take_events(&mut self) -> Vec<StoreEvent> {
        std::mem::take(&mut self.events)
    }

    // ========================================================================
    // System Balances
    // ========================================================================

    /// Current system balance for a token (0 if never touched).
    pub fn system_balance(&self, token: Address) -> u128 {
        self.system_balances.get(&token).copied().unwrap_or(0)
    }

    /// Add to a token's system balance.
    pub fn increase_system_balance(&mut self, token: Address, amount: u128) -> StoreResult<()> {
        if token.is_zero() {
            return Err(StoreError::InvalidAddress);
        }
        let prev_amount = self.system_balance(token);
        let new_amount = prev_amount
            .checked_add(amount)
            .ok_or(StoreError::AmountTooHigh)?;
        self.system_balances.insert(token, new_amount);
        self.events.push(StoreEvent::SystemBalanceUpdated {
            token,
            prev_amount,
            new_amount,
        });
        Ok(())
    }

    /// Subtract from a token's system balance. An amount above the current
    /// balance is caller misuse and rejects with [`StoreError::Underflow`],
    /// leaving the balance untouched.
    pub fn decrease_system_balance(&mut self, token: Address, amount: u128) -> StoreResult<()> {
        if token.is_zero() {
            return Err(StoreError::InvalidAddress);
        }
        let prev_amount = self.system_balance(token);
        let new_amount = prev_amount
            .checked_sub(amount)
            .ok_or(StoreError::Underflow)?;
        self.system_balances.insert(token, new_amount);
        self.events.push(StoreEvent::SystemBalanceUpdated {
            token,
            prev_amount,
            new_amount,
        });
        Ok(())
    }

    // ========================================================================
    // Position-Derived Aggregates (mutated only via the Position Ledger)
    // ========================================================================

    /// Sum of `pool_amount` over live positions for a pool.
    pub fn total_protected_pool_amount(&self, pool_token: Address) -> u128 {
        self.total_pool_amounts
            .get(&pool_token)
            .copied()
            .unwrap_or(0)
    }

    /// Sum of `reserve_amount` over live positions for a (pool, reserve) pair.
    pub fn total_protected_reserve_amount(
        &self,
        pool_token: Address,
        reserve_token: Address,
    ) -> u128 {
        self.total_reserve_amounts
            .get(&(pool_token, reserve_token))
            .copied()
            .unwrap_or(0)
    }

    // ========================================================================
    // Internal Guards
    // ========================================================================

    /// Reject the null identifier and the store's own identity.
    pub(crate) fn require_external(&self, address: Address) -> StoreResult<()> {
        if address.is_zero() || address == self.address {
            return Err(StoreError::InvalidAddress);
        }
        Ok(())
    }

    pub(crate) fn push_event(&mut self, event: StoreEvent) {
        self.events.push(event);
    }
}

/// `previous - new` as a signed delta; positive when the amount decreased.
/// Saturates at the `i128` bounds, which only an adversarial `u128` spread
/// can reach.
pub(crate) fn signed_delta(previous: u128, current: u128) -> i128 {
    if previous >= current {
        i128::try_from(previous - current).unwrap_or(i128::MAX)
    } else {
        i128::try_from(current - previous)
            .map(i128::wrapping_neg)
            .unwrap_or(i128::MIN)
    }
}

//! # Position Ledger
//!
//! Create / update / remove operations for protected positions, plus their
//! read accessors. Every mutation adjusts the position-derived aggregates in
//! the same step, so the aggregates always equal the sums over live
//! positions.
//!
//! Membership is tracked as a dense per-provider list of ids; each position
//! records its own index in that list, and removal swaps the last id into the
//! freed slot. Removing a position therefore touches at most one other
//! position's stored index, whatever the provider's position count.

use crate::constants::MAX_RATE_COMPONENT;
use crate::errors::{StoreError, StoreResult};
use crate::events::StoreEvent;
use crate::math::{encode_rate, rate_denominator, rate_numerator, rate_timestamp};
use crate::store::{signed_delta, ProtectionStore};
use crate::types::{Address, PositionId, PositionInfo, ProtectedPosition};

impl ProtectionStore {
    /// Record a new protected position and fold its amounts into the
    /// aggregates. Returns the freshly allocated id.
    #[allow(clippy::too_many_arguments)]
    pub fn add_position(
        &mut self,
        provider: Address,
        pool_token: Address,
        reserve_token: Address,
        pool_amount: u128,
        reserve_amount: u128,
        rate_numerator: u128,
        rate_denominator: u128,
        rate_timestamp: u32,
    ) -> StoreResult<PositionId> {
        self.require_external(provider)?;
        self.require_external(pool_token)?;
        self.require_external(reserve_token)?;
        if pool_amount == 0
            || reserve_amount == 0
            || rate_numerator == 0
            || rate_denominator == 0
            || rate_timestamp == 0
        {
            return Err(StoreError::ZeroValue);
        }
        if rate_numerator > MAX_RATE_COMPONENT || rate_denominator > MAX_RATE_COMPONENT {
            return Err(StoreError::AmountTooHigh);
        }

        // All fallible arithmetic happens before the first write.
        let pool_total = self
            .total_protected_pool_amount(pool_token)
            .checked_add(pool_amount)
            .ok_or(StoreError::AmountTooHigh)?;
        let reserve_total = self
            .total_protected_reserve_amount(pool_token, reserve_token)
            .checked_add(reserve_amount)
            .ok_or(StoreError::AmountTooHigh)?;

        let id = self.next_position_id;
        self.next_position_id += 1;

        let owner_list = self.provider_ids.entry(provider).or_default();
        let index_in_owner_list = owner_list.len();
        owner_list.push(id);

        self.positions.insert(
            id,
            ProtectedPosition {
                provider,
                index_in_owner_list,
                pool_token,
                reserve_token,
                pool_amount,
                reserve_amount,
                rate: encode_rate(rate_numerator, rate_denominator, rate_timestamp),
            },
        );
        self.total_pool_amounts.insert(pool_token, pool_total);
        self.total_reserve_amounts
            .insert((pool_token, reserve_token), reserve_total);

        self.push_event(StoreEvent::PositionAdded {
            id,
            provider,
            pool_token,
            reserve_token,
            pool_amount,
            reserve_amount,
        });
        Ok(id)
    }

    /// Replace a position's amounts in place, adjusting both aggregates by
    /// the difference. The previous amounts are consumed, not re-added.
    pub fn update_position_amounts(
        &mut self,
        id: PositionId,
        new_pool_amount: u128,
        new_reserve_amount: u128,
    ) -> StoreResult<()> {
        if new_pool_amount == 0 || new_reserve_amount == 0 {
            return Err(StoreError::ZeroValue);
        }
        let position = self.positions.get(&id).ok_or(StoreError::InvalidId)?;
        let pool_token = position.pool_token;
        let reserve_token = position.reserve_token;
        let prev_pool_amount = position.pool_amount;
        let prev_reserve_amount = position.reserve_amount;

        let pool_total = self
            .total_protected_pool_amount(pool_token)
            .checked_sub(prev_pool_amount)
            .ok_or(StoreError::Underflow)?
            .checked_add(new_pool_amount)
            .ok_or(StoreError::AmountTooHigh)?;
        let reserve_total = self
            .total_protected_reserve_amount(pool_token, reserve_token)
            .checked_sub(prev_reserve_amount)
            .ok_or(StoreError::Underflow)?
            .checked_add(new_reserve_amount)
            .ok_or(StoreError::AmountTooHigh)?;

        if let Some(position) = self.positions.get_mut(&id) {
            position.pool_amount = new_pool_amount;
            position.reserve_amount = new_reserve_amount;
        }
        self.total_pool_amounts.insert(pool_token, pool_total);
        self.total_reserve_amounts
            .insert((pool_token, reserve_token), reserve_total);

        self.push_event(StoreEvent::PositionUpdated {
            id,
            pool_amount_delta: signed_delta(prev_pool_amount, new_pool_amount),
            reserve_amount_delta: signed_delta(prev_reserve_amount, new_reserve_amount),
        });
        Ok(())
    }

    /// Destroy a position, deducting its amounts from the aggregates.
    ///
    /// Removal from the provider's id list is swap-with-last driven by the
    /// position's stored index; if the removed id was not last, the formerly
    /// last position's stored index is patched to the freed slot.
    pub fn remove_position(&mut self, id: PositionId) -> StoreResult<()> {
        let position = self
            .positions
            .get(&id)
            .cloned()
            .ok_or(StoreError::InvalidId)?;

        let pool_total = self
            .total_protected_pool_amount(position.pool_token)
            .checked_sub(position.pool_amount)
            .ok_or(StoreError::Underflow)?;
        let reserve_total = self
            .total_protected_reserve_amount(position.pool_token, position.reserve_token)
            .checked_sub(position.reserve_amount)
            .ok_or(StoreError::Underflow)?;

        let owner_list = self
            .provider_ids
            .get_mut(&position.provider)
            .ok_or(StoreError::InvalidId)?;
        let freed_slot = position.index_in_owner_list;
        if freed_slot >= owner_list.len() || owner_list[freed_slot] != id {
            // Only reachable through an inconsistent seed.
            return Err(StoreError::InvalidIndex);
        }
        owner_list.swap_remove(freed_slot);
        if freed_slot < owner_list.len() {
            let moved_id = owner_list[freed_slot];
            if let Some(moved) = self.positions.get_mut(&moved_id) {
                moved.index_in_owner_list = freed_slot;
            }
        }

        self.positions.remove(&id);
        if pool_total == 0 {
            self.total_pool_amounts.remove(&position.pool_token);
        } else {
            self.total_pool_amounts
                .insert(position.pool_token, pool_total);
        }
        let reserve_key = (position.pool_token, position.reserve_token);
        if reserve_total == 0 {
            self.total_reserve_amounts.remove(&reserve_key);
        } else {
            self.total_reserve_amounts.insert(reserve_key, reserve_total);
        }

        self.push_event(StoreEvent::PositionRemoved {
            id,
            provider: position.provider,
            pool_token: position.pool_token,
            reserve_token: position.reserve_token,
            pool_amount: position.pool_amount,
            reserve_amount: position.reserve_amount,
        });
        Ok(())
    }

    // ========================================================================
    // Read Accessors
    // ========================================================================

    /// All position ids owned by a provider, in current storage order.
    pub fn position_ids(&self, provider: Address) -> &[PositionId] {
        self.provider_ids
            .get(&provider)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of positions a provider currently owns.
    pub fn position_count(&self, provider: Address) -> usize {
        self.position_ids(provider).len()
    }

    /// A position's fully decoded tuple.
    pub fn position(&self, id: PositionId) -> StoreResult<PositionInfo> {
        let position = self.positions.get(&id).ok_or(StoreError::InvalidId)?;
        Ok(PositionInfo {
            provider: position.provider,
            pool_token: position.pool_token,
            reserve_token: position.reserve_token,
            pool_amount: position.pool_amount,
            reserve_amount: position.reserve_amount,
            rate_numerator: rate_numerator(position.rate),
            rate_denominator: rate_denominator(position.rate),
            rate_timestamp: rate_timestamp(position.rate),
            index_in_owner_list: position.index_in_owner_list,
        })
    }
}

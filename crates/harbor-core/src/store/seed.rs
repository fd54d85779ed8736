//! # Seeding Interface
//!
//! One-time bulk import of state from a predecessor deployment. Each call
//! takes parallel arrays in the predecessor's persisted layout, writes
//! directly into the internal maps, and trusts the caller to supply mutually
//! consistent snapshots: no aggregate recomputation, no uniqueness checking,
//! no events. The only validation is array-length agreement, plus the
//! one-shot guard on provider id lists.

use crate::errors::{StoreError, StoreResult};
use crate::math::encode_rate;
use crate::store::ProtectionStore;
use crate::types::{Address, LockedBalance, PositionId, ProtectedPosition};

impl ProtectionStore {
    /// Bulk-load position records. Repeatable across batches; the id counter
    /// is advanced past the largest seeded id so post-migration allocation
    /// cannot collide with a live position.
    #[allow(clippy::too_many_arguments)]
    pub fn seed_positions(
        &mut self,
        ids: &[PositionId],
        providers: &[Address],
        owner_indices: &[usize],
        pool_tokens: &[Address],
        reserve_tokens: &[Address],
        pool_amounts: &[u128],
        reserve_amounts: &[u128],
        rate_numerators: &[u128],
        rate_denominators: &[u128],
        rate_timestamps: &[u32],
    ) -> StoreResult<()> {
        let len = ids.len();
        if providers.len() != len
            || owner_indices.len() != len
            || pool_tokens.len() != len
            || reserve_tokens.len() != len
            || pool_amounts.len() != len
            || reserve_amounts.len() != len
            || rate_numerators.len() != len
            || rate_denominators.len() != len
            || rate_timestamps.len() != len
        {
            return Err(StoreError::LengthMismatch);
        }

        for i in 0..len {
            self.positions.insert(
                ids[i],
                ProtectedPosition {
                    provider: providers[i],
                    index_in_owner_list: owner_indices[i],
                    pool_token: pool_tokens[i],
                    reserve_token: reserve_tokens[i],
                    pool_amount: pool_amounts[i],
                    reserve_amount: reserve_amounts[i],
                    rate: encode_rate(rate_numerators[i], rate_denominators[i], rate_timestamps[i]),
                },
            );
            self.next_position_id = self.next_position_id.max(ids[i] + 1);
        }
        Ok(())
    }

    /// Install a provider's id list wholesale. One-shot: a provider whose
    /// list is already non-empty cannot be seeded again.
    pub fn seed_provider_ids(&mut self, provider: Address, ids: &[PositionId]) -> StoreResult<()> {
        let existing = self.provider_ids.entry(provider).or_default();
        if !existing.is_empty() {
            return Err(StoreError::AlreadySeeded);
        }
        existing.extend_from_slice(ids);
        Ok(())
    }

    /// Bulk-append locked-balance entries. Repeatable across batches.
    pub fn seed_locked_balances(
        &mut self,
        providers: &[Address],
        amounts: &[u128],
        expiration_times: &[u64],
    ) -> StoreResult<()> {
        let len = providers.len();
        if amounts.len() != len || expiration_times.len() != len {
            return Err(StoreError::LengthMismatch);
        }

        for i in 0..len {
            self.locked_balances
                .entry(providers[i])
                .or_default()
                .push(LockedBalance {
                    amount: amounts[i],
                    expiration_time: expiration_times[i],
                });
        }
        Ok(())
    }

    /// Bulk-load balances and aggregates. Per tuple: the token's system
    /// balance, the pool aggregate keyed by the same token, and the two
    /// (pool, reserve) aggregates. Repeatable; later batches overwrite.
    #[allow(clippy::too_many_arguments)]
    pub fn seed_system_balances(
        &mut self,
        tokens: &[Address],
        system_balances: &[u128],
        pool_amounts: &[u128],
        reserve0s: &[Address],
        reserve1s: &[Address],
        reserve0_amounts: &[u128],
        reserve1_amounts: &[u128],
    ) -> StoreResult<()> {
        let len = tokens.len();
        if system_balances.len() != len
            || pool_amounts.len() != len
            || reserve0s.len() != len
            || reserve1s.len() != len
            || reserve0_amounts.len() != len
            || reserve1_amounts.len() != len
        {
            return Err(StoreError::LengthMismatch);
        }

        for i in 0..len {
            self.system_balances.insert(tokens[i], system_balances[i]);
            self.total_pool_amounts.insert(tokens[i], pool_amounts[i]);
            self.total_reserve_amounts
                .insert((tokens[i], reserve0s[i]), reserve0_amounts[i]);
            self.total_reserve_amounts
                .insert((tokens[i], reserve1s[i]), reserve1_amounts[i]);
        }
        Ok(())
    }
}

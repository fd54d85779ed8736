//! # Lock Schedule Store
//!
//! Per-provider ordered-but-reorderable lists of locked balances. Append and
//! swap-remove are O(1); only membership and count are meaningful, never
//! order.

use crate::errors::{StoreError, StoreResult};
use crate::events::StoreEvent;
use crate::store::ProtectionStore;
use crate::types::{Address, LockedBalance};

impl ProtectionStore {
    /// Schedule a locked balance for a provider. Returns the new entry's
    /// index (length - 1 after the append).
    pub fn add_locked_balance(
        &mut self,
        provider: Address,
        amount: u128,
        expiration_time: u64,
    ) -> StoreResult<usize> {
        self.require_external(provider)?;
        if amount == 0 || expiration_time == 0 {
            return Err(StoreError::ZeroValue);
        }

        let entries = self.locked_balances.entry(provider).or_default();
        entries.push(LockedBalance {
            amount,
            expiration_time,
        });
        let index = entries.len() - 1;

        self.push_event(StoreEvent::BalanceLocked {
            provider,
            amount,
            expiration_time,
        });
        Ok(index)
    }

    /// Release a locked balance by index, swap-removing it. The freed slot is
    /// backfilled by the formerly last entry, so surviving indices may move.
    pub fn remove_locked_balance(&mut self, provider: Address, index: usize) -> StoreResult<()> {
        let entries = self
            .locked_balances
            .get_mut(&provider)
            .ok_or(StoreError::InvalidIndex)?;
        if index >= entries.len() {
            return Err(StoreError::InvalidIndex);
        }
        let removed = entries.swap_remove(index);

        self.push_event(StoreEvent::BalanceUnlocked {
            provider,
            amount: removed.amount,
        });
        Ok(())
    }

    /// A single locked-balance entry.
    pub fn locked_balance(&self, provider: Address, index: usize) -> StoreResult<LockedBalance> {
        self.locked_balance_slice(provider)
            .get(index)
            .copied()
            .ok_or(StoreError::InvalidIndex)
    }

    /// Amounts and expirations for `[start, end)` in current storage order.
    /// `end` is clamped to the list length; the clamped end must be strictly
    /// after `start`.
    pub fn locked_balance_range(
        &self,
        provider: Address,
        start: usize,
        end: usize,
    ) -> StoreResult<(Vec<u128>, Vec<u64>)> {
        let entries = self.locked_balance_slice(provider);
        let end = end.min(entries.len());
        if end <= start {
            return Err(StoreError::InvalidIndices);
        }

        let window = &entries[start..end];
        let amounts = window.iter().map(|entry| entry.amount).collect();
        let expirations = window.iter().map(|entry| entry.expiration_time).collect();
        Ok((amounts, expirations))
    }

    /// Number of locked-balance entries a provider currently has.
    pub fn locked_balance_count(&self, provider: Address) -> usize {
        self.locked_balance_slice(provider).len()
    }

    fn locked_balance_slice(&self, provider: Address) -> &[LockedBalance] {
        self.locked_balances
            .get(&provider)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(tag: u8) -> Address {
        Address([tag; 32])
    }

    fn store() -> ProtectionStore {
        ProtectionStore::new(addr(0xee))
    }

    #[test]
    fn test_add_then_remove_leaves_empty_schedule() {
        let mut store = store();
        let provider = addr(1);

        let index = store.add_locked_balance(provider, 500, 1_000_000).unwrap();
        assert_eq!(index, 0);
        assert_eq!(store.locked_balance_count(provider), 1);

        store.remove_locked_balance(provider, 0).unwrap();
        assert_eq!(store.locked_balance_count(provider), 0);
    }

    #[test]
    fn test_add_rejects_bad_provider_and_zero_values() {
        let mut store = store();
        let own = store.address();

        assert_eq!(
            store.add_locked_balance(Address::ZERO, 500, 100),
            Err(StoreError::InvalidAddress)
        );
        assert_eq!(
            store.add_locked_balance(own, 500, 100),
            Err(StoreError::InvalidAddress)
        );
        assert_eq!(
            store.add_locked_balance(addr(1), 0, 100),
            Err(StoreError::ZeroValue)
        );
        assert_eq!(
            store.add_locked_balance(addr(1), 500, 0),
            Err(StoreError::ZeroValue)
        );
    }

    #[test]
    fn test_indices_grow_with_each_append() {
        let mut store = store();
        let provider = addr(1);
        for expected in 0usize..4 {
            let index = store
                .add_locked_balance(provider, 10 + expected as u128, 100)
                .unwrap();
            assert_eq!(index, expected);
        }
    }

    #[test]
    fn test_remove_swaps_last_into_freed_slot() {
        let mut store = store();
        let provider = addr(1);
        for amount in [10, 20, 30] {
            store.add_locked_balance(provider, amount, 100).unwrap();
        }

        store.remove_locked_balance(provider, 0).unwrap();

        assert_eq!(store.locked_balance_count(provider), 2);
        // The formerly last entry backfilled slot 0.
        assert_eq!(store.locked_balance(provider, 0).unwrap().amount, 30);
        assert_eq!(store.locked_balance(provider, 1).unwrap().amount, 20);
    }

    #[test]
    fn test_remove_out_of_bounds_rejects() {
        let mut store = store();
        let provider = addr(1);

        assert_eq!(
            store.remove_locked_balance(provider, 0),
            Err(StoreError::InvalidIndex)
        );
        store.add_locked_balance(provider, 10, 100).unwrap();
        assert_eq!(
            store.remove_locked_balance(provider, 1),
            Err(StoreError::InvalidIndex)
        );
    }

    #[test]
    fn test_range_clamps_end_to_length() {
        let mut store = store();
        let provider = addr(1);
        store.add_locked_balance(provider, 10, 100).unwrap();
        store.add_locked_balance(provider, 20, 200).unwrap();

        let (amounts, expirations) = store.locked_balance_range(provider, 0, 1000).unwrap();
        assert_eq!(amounts, vec![10, 20]);
        assert_eq!(expirations, vec![100, 200]);
    }

    #[test]
    fn test_range_rejects_empty_windows() {
        let mut store = store();
        let provider = addr(1);
        store.add_locked_balance(provider, 10, 100).unwrap();

        assert_eq!(
            store.locked_balance_range(provider, 1, 1),
            Err(StoreError::InvalidIndices)
        );
        assert_eq!(
            store.locked_balance_range(provider, 2, 5),
            Err(StoreError::InvalidIndices)
        );
        assert_eq!(
            store.locked_balance_range(addr(9), 0, 10),
            Err(StoreError::InvalidIndices)
        );
    }

    #[test]
    fn test_unlock_event_carries_amount_only() {
        let mut store = store();
        let provider = addr(1);
        store.add_locked_balance(provider, 500, 9000).unwrap();
        store.take_events();

        store.remove_locked_balance(provider, 0).unwrap();
        assert_eq!(
            store.take_events(),
            vec![StoreEvent::BalanceUnlocked {
                provider,
                amount: 500
            }]
        );
    }

    #[test]
    fn test_lock_event_carries_expiration() {
        let mut store = store();
        let provider = addr(1);
        store.add_locked_balance(provider, 500, 9000).unwrap();
        assert_eq!(
            store.take_events(),
            vec![StoreEvent::BalanceLocked {
                provider,
                amount: 500,
                expiration_time: 9000
            }]
        );
    }
}

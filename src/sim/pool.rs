//! Fixed-capacity slot pool for transient entities
//!
//! Hazards and pickups churn constantly, so they live in reusable slots
//! with an explicit active tag instead of being allocated per spawn.
//! A full pool is backpressure, not an error: `allocate` returns `None`
//! and the spawn is silently skipped.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Slot<T> {
    active: bool,
    value: T,
}

/// Slot array with stable index-order iteration over active entries.
///
/// Stale data in a freed slot is never read; the next occupant overwrites
/// it through the `&mut T` handed back by [`SlotPool::allocate`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotPool<T> {
    slots: Vec<Slot<T>>,
}

impl<T: Default> SlotPool<T> {
    pub fn new(capacity: usize) -> Self {
        let slots = (0..capacity)
            .map(|_| Slot {
                active: false,
                value: T::default(),
            })
            .collect();
        Self { slots }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.active).count()
    }

    /// Claim the first inactive slot, or `None` when every slot is live.
    /// The returned value still holds its previous occupant's data; the
    /// caller initializes it before anything else reads it.
    pub fn allocate(&mut self) -> Option<(usize, &mut T)> {
        let slot = self
            .slots
            .iter_mut()
            .enumerate()
            .find(|(_, s)| !s.active)?;
        slot.1.active = true;
        Some((slot.0, &mut slot.1.value))
    }

    /// Release a slot for reuse. Freeing an already-free slot is a no-op.
    pub fn free(&mut self, index: usize) {
        self.slots[index].active = false;
    }

    /// Release every slot (session reset)
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.active = false;
        }
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        let slot = &self.slots[index];
        slot.active.then_some(&slot.value)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let slot = &mut self.slots[index];
        slot.active.then_some(&mut slot.value)
    }

    /// Active slots in index order
    pub fn iter_active(&self) -> impl Iterator<Item = (usize, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.active)
            .map(|(i, s)| (i, &s.value))
    }

    pub fn iter_active_mut(&mut self) -> impl Iterator<Item = (usize, &mut T)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter(|(_, s)| s.active)
            .map(|(i, s)| (i, &mut s.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_allocate_fills_lowest_slot_first() {
        let mut pool: SlotPool<u32> = SlotPool::new(3);
        let (i0, _) = pool.allocate().unwrap();
        let (i1, _) = pool.allocate().unwrap();
        assert_eq!((i0, i1), (0, 1));

        pool.free(0);
        let (again, _) = pool.allocate().unwrap();
        assert_eq!(again, 0);
    }

    #[test]
    fn test_full_pool_refuses_allocation() {
        let mut pool: SlotPool<u32> = SlotPool::new(2);
        assert!(pool.allocate().is_some());
        assert!(pool.allocate().is_some());
        assert!(pool.allocate().is_none());
        assert_eq!(pool.active_count(), 2);
    }

    #[test]
    fn test_freed_slot_is_invisible_until_reused() {
        let mut pool: SlotPool<u32> = SlotPool::new(2);
        let (idx, v) = pool.allocate().unwrap();
        *v = 7;
        pool.free(idx);
        assert!(pool.get(idx).is_none());
        assert_eq!(pool.iter_active().count(), 0);

        // Double free is harmless
        pool.free(idx);
        assert_eq!(pool.active_count(), 0);
    }

    #[test]
    fn test_iter_active_is_index_ordered() {
        let mut pool: SlotPool<u32> = SlotPool::new(4);
        for n in 0..4 {
            let (_, v) = pool.allocate().unwrap();
            *v = n;
        }
        pool.free(1);
        let seen: Vec<usize> = pool.iter_active().map(|(i, _)| i).collect();
        assert_eq!(seen, vec![0, 2, 3]);
    }

    proptest! {
        /// Any alloc/free sequence keeps the active count within capacity,
        /// and allocation on a full pool changes nothing.
        #[test]
        fn prop_capacity_invariant(ops in proptest::collection::vec((any::<bool>(), 0usize..8), 0..64)) {
            let mut pool: SlotPool<u32> = SlotPool::new(8);
            for (is_alloc, index) in ops {
                if is_alloc {
                    let before = pool.active_count();
                    let got = pool.allocate().is_some();
                    prop_assert_eq!(got, before < pool.capacity());
                } else {
                    pool.free(index);
                }
                prop_assert!(pool.active_count() <= pool.capacity());
            }
        }
    }
}

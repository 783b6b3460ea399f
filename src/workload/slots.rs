//! Fixed-capacity owning slot array

use crate::common::error::BenchResult;
use crate::config_err;
use crate::workload::object::KernelObject;

/// Ordered, fixed-size set of slots, each owning at most one object.
///
/// Storing into an occupied slot drops the previous occupant, so the live
/// working set never exceeds the capacity.
#[derive(Debug)]
pub struct SlotArray {
    slots: Vec<Option<Box<KernelObject>>>,
}

impl SlotArray {
    pub fn new(capacity: usize) -> BenchResult<Self> {
        if capacity == 0 {
            return Err(config_err!("slot array capacity must be positive"));
        }
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Ok(Self { slots })
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Slot used for the given iteration
    #[inline]
    pub fn index_for(&self, iteration: u64) -> usize {
        (iteration % self.slots.len() as u64) as usize
    }

    /// Store `object` at `index`, releasing the prior occupant, and return
    /// a mutable reference to the stored object.
    ///
    /// Panics if `index` is out of range; callers derive it from `index_for`.
    #[inline]
    pub fn store(&mut self, index: usize, object: Box<KernelObject>) -> &mut KernelObject {
        self.slots[index].insert(object)
    }

    pub fn get(&self, index: usize) -> Option<&KernelObject> {
        self.slots.get(index).and_then(|slot| slot.as_deref())
    }

    /// Number of occupied slots
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_capacity_rejected() {
        assert!(SlotArray::new(0).is_err());
    }

    #[test]
    fn test_index_is_cyclic() {
        let slots = SlotArray::new(1000).unwrap();
        assert_eq!(slots.index_for(0), 0);
        assert_eq!(slots.index_for(999), 999);
        assert_eq!(slots.index_for(1000), 0);
        assert_eq!(slots.index_for(99_999_999), 999);
    }

    #[test]
    fn test_store_replaces_occupant() {
        let mut slots = SlotArray::new(2).unwrap();
        assert_eq!(slots.occupied(), 0);

        slots.store(0, KernelObject::boxed(0));
        slots.store(1, KernelObject::boxed(1));
        assert_eq!(slots.occupied(), 2);

        slots.store(0, KernelObject::boxed(2));
        assert_eq!(slots.occupied(), 2);
        assert_eq!(slots.get(0).map(KernelObject::id), Some(2));
        assert_eq!(slots.get(1).map(KernelObject::id), Some(1));
        assert!(slots.get(2).is_none());
    }
}

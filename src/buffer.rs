use std::mem;
use std::ops::{Index, IndexMut};

use log::debug;

use crate::error::{DsaError, Result};

/// Fixed-length slot storage: `len()` is always the capacity of the owning
/// container, and slots past the container's logical end are stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SlotBuffer<T> {
    slots: Box<[T]>,
    grows: usize,
}

impl<T: Default> SlotBuffer<T> {
    /// A zero capacity is bumped to one slot.
    pub(crate) fn new(capacity: usize) -> Self {
        SlotBuffer {
            slots: Self::fresh(capacity.max(1)).into_boxed_slice(),
            grows: 0,
        }
    }

    pub(crate) fn try_new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(DsaError::InvalidCapacity(capacity));
        }
        Ok(Self::new(capacity))
    }

    /// Doubles the slot count, moving every old slot (stale ones too) into
    /// the front of the new allocation.
    pub(crate) fn grow(&mut self) {
        let old_capacity = self.slots.len();
        let new_capacity = old_capacity * 2;

        let mut grown = Vec::with_capacity(new_capacity);
        grown.extend(mem::take(&mut self.slots).into_vec());
        grown.extend(Self::fresh(new_capacity - old_capacity));

        self.slots = grown.into_boxed_slice();
        self.grows += 1;
        debug!("resized buffer from {old_capacity} to {new_capacity} slots");
    }

    fn fresh(count: usize) -> Vec<T> {
        std::iter::repeat_with(T::default).take(count).collect()
    }
}

impl<T> SlotBuffer<T> {
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn grows(&self) -> usize {
        self.grows
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        &self.slots
    }
}

impl<T> Index<usize> for SlotBuffer<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.slots[index]
    }
}

impl<T> IndexMut<usize> for SlotBuffer<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.slots[index]
    }
}

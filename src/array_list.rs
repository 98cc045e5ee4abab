use std::fmt;

use crate::buffer::SlotBuffer;
use crate::config::GrowthConfig;
use crate::error::{DsaError, Result};

/// Append-only dynamic array that doubles its slot buffer when full.
#[derive(Debug, Clone)]
pub struct ArrayList<T> {
    data: SlotBuffer<T>,
    size: usize,
}

impl<T: Default> ArrayList<T> {
    pub fn new() -> Self {
        Self::with_config(&GrowthConfig::default())
    }

    /// A hand-built config with `initial_capacity == 0` gets a single slot.
    pub fn with_config(config: &GrowthConfig) -> Self {
        ArrayList {
            data: SlotBuffer::new(config.initial_capacity),
            size: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Ok(ArrayList {
            data: SlotBuffer::try_new(capacity)?,
            size: 0,
        })
    }

    pub fn insert(&mut self, value: T) {
        if self.size == self.data.capacity() {
            self.data.grow();
        }
        self.data[self.size] = value;
        self.size += 1;
    }
}

impl<T> ArrayList<T> {
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    pub fn try_get(&self, index: usize) -> Result<&T> {
        self.get(index).ok_or(DsaError::IndexOutOfBounds {
            index,
            len: self.size,
        })
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data.as_slice()[..self.size]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }
}

impl<T: Default> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

// Every element is followed by a space, including the last one.
impl<T: fmt::Display> fmt::Display for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in self.iter() {
            write!(f, "{item} ")?;
        }
        Ok(())
    }
}

impl<T: Default> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Default> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = ArrayList::new();
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

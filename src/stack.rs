//! Growable LIFO stack over a doubling slot buffer.
//!
//! A push onto a full stack doubles the capacity first, so pushes are
//! amortized O(1). Popping an empty stack is an error and never a sentinel
//! value.

use std::fmt;
use std::mem;

use itertools::Itertools;
use log::warn;

use crate::buffer::SlotBuffer;
use crate::config::GrowthConfig;
use crate::error::{DsaError, Result};

// =============================================================================
// Core: construction, state queries, push/pop
// =============================================================================

#[derive(Debug, Clone)]
pub struct Stack<T> {
    data: SlotBuffer<T>,
    // top + 1; zero means empty
    len: usize,
}

impl<T: Default> Stack<T> {
    pub fn new() -> Self {
        Self::with_config(&GrowthConfig::default())
    }

    /// Builds an empty stack sized from `config`. A hand-built config with
    /// `initial_capacity == 0` gets a single slot; use [`Stack::with_capacity`]
    /// to have zero rejected instead.
    pub fn with_config(config: &GrowthConfig) -> Self {
        Stack {
            data: SlotBuffer::new(config.initial_capacity),
            len: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Ok(Stack {
            data: SlotBuffer::try_new(capacity)?,
            len: 0,
        })
    }

    pub fn push(&mut self, value: T) {
        if self.is_full() {
            self.resize();
        }
        self.data[self.len] = value;
        self.len += 1;
    }

    /// Removes and returns the top element. The stack is left untouched when
    /// it is already empty.
    pub fn pop(&mut self) -> Result<T> {
        if self.is_empty() {
            warn!("pop on an empty stack");
            return Err(DsaError::EmptyStack);
        }
        self.len -= 1;
        Ok(mem::take(&mut self.data[self.len]))
    }

    fn resize(&mut self) {
        self.data.grow();
    }
}

impl<T> Stack<T> {
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.data.capacity()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Index of the most recently pushed element.
    pub fn top(&self) -> Option<usize> {
        self.len.checked_sub(1)
    }

    pub fn resize_count(&self) -> usize {
        self.data.grows()
    }

    pub fn peek(&self) -> Option<&T> {
        self.top().map(|top| &self.data[top])
    }

    /// Forgets every element; the capacity stays where it is.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Logical contents, bottom to top.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.as_slice()[..self.len].iter()
    }

    /// The whole backing buffer, stale slots included.
    pub fn slots(&self) -> &[T] {
        self.data.as_slice()
    }
}

impl<T: Default> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Equal when the logical contents match; capacity, resize history and stale
// slots are ignored.
impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Stack<T> {}

impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.iter().join(" "))
    }
}

// =============================================================================
// Iterator integration
// =============================================================================

impl<T: Default> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: Default> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Stack::new();
        stack.extend(iter);
        stack
    }
}

/// Drains a stack in pop order.
pub struct IntoIter<T> {
    stack: Stack<T>,
}

impl<T: Default> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.stack.is_empty() {
            return None;
        }
        self.stack.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.stack.len();
        (len, Some(len))
    }
}

impl<T: Default> ExactSizeIterator for IntoIter<T> {}

impl<T: Default> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { stack: self }
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

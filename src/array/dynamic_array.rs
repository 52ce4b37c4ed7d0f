//! Core dynamic array implementation.
//!
//! This module contains the `DynamicArray` struct and its operations. All
//! structural mutations route through a single resize decision point before
//! touching the storage.

use std::fmt;

use tracing::{debug, trace};

use crate::array::error::{ArrayError, Result};
use crate::array::policy::{self, Resize};

/// A growable array supporting insertion and removal at both ends and at
/// arbitrary positions.
///
/// # Design
///
/// - Storage is a boxed slice of `Option<T>` slots; `None` marks an unset slot
/// - Positions `[0, len)` always hold `Some`, positions `[len, capacity)` always hold `None`
/// - Capacity only changes through `set_size`, which swaps in a freshly built store
/// - Growth doubles, shrinking halves (see [`policy`](crate::array::policy))
#[derive(Clone)]
pub struct DynamicArray<T> {
    /// Number of live elements
    len: usize,
    /// The backing store; its length is the capacity
    storage: Box<[Option<T>]>,
}

impl<T> DynamicArray<T> {
    /// Creates an empty array with no allocated slots.
    pub fn new() -> Self {
        DynamicArray {
            len: 0,
            storage: Box::default(),
        }
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Reallocates storage to exactly `length` slots, keeping elements at
    /// their positions. Slots past `length` are dropped, new slots are unset.
    fn set_size(&mut self, length: usize) {
        debug_assert!(self.len <= length, "resize would drop live elements");

        let old = std::mem::take(&mut self.storage);
        let mut storage: Vec<Option<T>> = Vec::with_capacity(length);
        storage.extend(old.into_vec().into_iter().take(length));
        storage.resize_with(length, || None);

        self.storage = storage.into_boxed_slice();
    }

    fn expand(&mut self, new_len: usize) {
        let from = self.capacity();
        let mut to = policy::expanded(from);
        while new_len > to {
            to = policy::expanded(to);
        }
        debug!(from, to, len = new_len, "expanding storage");
        self.set_size(to);
    }

    fn shrink(&mut self) {
        let from = self.capacity();
        let to = policy::shrunk(from);
        debug!(from, to, len = self.len, "shrinking storage");
        self.set_size(to);
    }

    /// Evaluates the resize policy against the size the array is about to
    /// have. Called before every structural mutation.
    fn resize(&mut self, new_len: usize) {
        match policy::decide(new_len, self.capacity()) {
            Resize::Expand => self.expand(new_len),
            Resize::Shrink => self.shrink(),
            Resize::Keep => {}
        }
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// * `IndexOutOfRange` - if `index >= len`
    pub fn get(&self, index: usize) -> Result<&T> {
        if index < self.len {
            if let Some(value) = self.storage[index].as_ref() {
                return Ok(value);
            }
        }
        Err(ArrayError::IndexOutOfRange {
            index,
            len: self.len,
        })
    }

    /// Returns the elements at positions `[start, stop)`.
    ///
    /// `stop` must be strictly less than `len`, so the last element can never
    /// be part of a range.
    ///
    /// # Errors
    ///
    /// * `IndexOutOfRange` - if `stop >= len` or `start > stop`
    pub fn range(&self, start: usize, stop: usize) -> Result<Vec<&T>> {
        if stop >= self.len {
            return Err(ArrayError::IndexOutOfRange {
                index: stop,
                len: self.len,
            });
        }
        if start > stop {
            return Err(ArrayError::IndexOutOfRange {
                index: start,
                len: self.len,
            });
        }
        Ok(self.storage[start..stop]
            .iter()
            .filter_map(Option::as_ref)
            .collect())
    }

    /// Returns all live elements in order.
    pub fn elements(&self) -> Vec<&T> {
        self.storage[..self.len]
            .iter()
            .filter_map(Option::as_ref)
            .collect()
    }

    /// Places `value` at position 0, shifting everything else right by one.
    pub fn prepend_val(&mut self, value: T) {
        let new_len = self.len + 1;
        self.resize(new_len);

        self.storage[..new_len].rotate_right(1);
        self.storage[0] = Some(value);

        self.len = new_len;
        trace!(len = self.len, "prepended value");
    }

    /// Places `values` at positions `[0, k)` in their given order, shifting
    /// existing elements right by `k`.
    pub fn prepend_vals<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        let values: Vec<T> = values.into_iter().collect();
        let count = values.len();
        if count == 0 {
            return;
        }

        let new_len = self.len + count;
        self.resize(new_len);

        // The unset slots at [len, new_len) rotate round to the front
        self.storage[..new_len].rotate_right(count);
        for (slot, value) in self.storage[..count].iter_mut().zip(values) {
            *slot = Some(value);
        }

        self.len = new_len;
        trace!(count, len = self.len, "prepended values");
    }

    /// Places `value` after the last element.
    pub fn append_val(&mut self, value: T) {
        let new_len = self.len + 1;
        self.resize(new_len);

        self.storage[self.len] = Some(value);

        self.len = new_len;
        trace!(len = self.len, "appended value");
    }

    /// Places `values` after the last element, in their given order.
    pub fn append_vals<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        let values: Vec<T> = values.into_iter().collect();
        let count = values.len();
        if count == 0 {
            return;
        }

        let new_len = self.len + count;
        self.resize(new_len);

        for (slot, value) in self.storage[self.len..new_len].iter_mut().zip(values) {
            *slot = Some(value);
        }

        self.len = new_len;
        trace!(count, len = self.len, "appended values");
    }

    /// Inserts `value` at `index`, shifting elements at `index..` right by one.
    ///
    /// `index == len` appends.
    ///
    /// # Errors
    ///
    /// * `InvalidIndex` - if `index > len`; the array is left untouched
    pub fn insert_val(&mut self, value: T, index: usize) -> Result<()> {
        if index > self.len {
            return Err(ArrayError::InvalidIndex {
                index,
                len: self.len,
            });
        }

        let new_len = self.len + 1;
        self.resize(new_len);

        self.storage[index..new_len].rotate_right(1);
        self.storage[index] = Some(value);

        self.len = new_len;
        trace!(index, len = self.len, "inserted value");
        Ok(())
    }

    /// Removes and returns the first element, shifting the rest left by one.
    ///
    /// # Errors
    ///
    /// * `Underflow` - if the array is empty
    pub fn remove_left(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(ArrayError::Underflow);
        }

        let new_len = self.len - 1;
        self.resize(new_len);

        let removed = self.storage[0].take();
        self.storage[..self.len].rotate_left(1);

        self.len = new_len;
        trace!(len = self.len, "removed first value");
        removed.ok_or(ArrayError::Underflow)
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// * `Underflow` - if the array is empty
    pub fn remove_right(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(ArrayError::Underflow);
        }

        let new_len = self.len - 1;
        self.resize(new_len);

        let removed = self.storage[new_len].take();

        self.len = new_len;
        trace!(len = self.len, "removed last value");
        removed.ok_or(ArrayError::Underflow)
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &self.elements())
            .finish()
    }
}

//! Contiguous growable buffer backend
//!
//! Capacity is managed explicitly: it starts at [`INITIAL_CAPACITY`] and
//! doubles whenever an append finds the buffer full, giving amortized O(1)
//! appends. The cursor walks by index over a size captured at creation.

use tracing::debug;

use super::Collection;
use crate::cursor::{BoxCursor, Cursor};

/// Capacity reserved by a fresh [`ArrayCollection`].
pub const INITIAL_CAPACITY: usize = 4;

/// Collection backed by a capacity-doubling contiguous buffer.
#[derive(Debug, Clone)]
pub struct ArrayCollection<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> ArrayCollection<T> {
    /// Create an empty collection with [`INITIAL_CAPACITY`] slots.
    pub fn new() -> Self {
        Self {
            items: Vec::with_capacity(INITIAL_CAPACITY),
            capacity: INITIAL_CAPACITY,
        }
    }

    /// Slots available before the next doubling.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Items as a slice, in insertion order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Index cursor over the current contents.
    pub fn cursor(&self) -> ArrayCursor<'_, T> {
        ArrayCursor::new(&self.items)
    }

    fn grow(&mut self) {
        let new_capacity = self.capacity * 2;
        self.items.reserve_exact(new_capacity - self.items.len());
        debug!(from = self.capacity, to = new_capacity, "array collection grew");
        self.capacity = new_capacity;
    }
}

impl<T> Default for ArrayCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Collection<T> for ArrayCollection<T> {
    fn add(&mut self, item: T) {
        if self.items.len() >= self.capacity {
            self.grow();
        }
        self.items.push(item);
    }

    fn count(&self) -> usize {
        self.items.len()
    }

    fn get_at(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    fn make_cursor<'a>(&'a self) -> BoxCursor<'a, &'a T>
    where
        T: 'a,
    {
        Box::new(self.cursor())
    }
}

impl<T> Extend<T> for ArrayCollection<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T> FromIterator<T> for ArrayCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut collection = Self::new();
        collection.extend(iter);
        collection
    }
}

/// Index-walking cursor over an [`ArrayCollection`].
#[derive(Debug, Clone)]
pub struct ArrayCursor<'a, T> {
    items: &'a [T],
    size: usize,
    index: usize,
}

impl<'a, T> ArrayCursor<'a, T> {
    fn new(items: &'a [T]) -> Self {
        Self {
            items,
            size: items.len(),
            index: 0,
        }
    }

    /// Current index (equals the size once done).
    pub fn position(&self) -> usize {
        self.index
    }
}

impl<'a, T> Cursor for ArrayCursor<'a, T> {
    type Item = &'a T;

    fn first(&mut self) {
        self.index = 0;
    }

    fn advance(&mut self) {
        if self.index < self.size {
            self.index += 1;
        }
    }

    fn is_done(&self) -> bool {
        self.index >= self.size
    }

    fn current(&self) -> Option<&'a T> {
        // out of range yields the sentinel, never a panic
        if self.index < self.size {
            self.items.get(self.index)
        } else {
            None
        }
    }
}

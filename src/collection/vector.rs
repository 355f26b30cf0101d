//! Native dynamic array backend

use super::Collection;
use crate::cursor::{BoxCursor, Cursor};

/// Collection backed by a plain `Vec`.
#[derive(Debug, Clone)]
pub struct VecCollection<T> {
    items: Vec<T>,
}

impl<T> VecCollection<T> {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Items as a slice, in insertion order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Give up the items, in insertion order.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Native-iterator cursor over the current contents.
    pub fn cursor(&self) -> VecCursor<'_, T> {
        VecCursor::new(&self.items)
    }
}

impl<T> Default for VecCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Collection<T> for VecCollection<T> {
    fn add(&mut self, item: T) {
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

impl<T> Extend<T> for VecCollection<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> FromIterator<T> for VecCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

/// Cursor driven by the native `std::slice::Iter`.
#[derive(Debug, Clone)]
pub struct VecCursor<'a, T> {
    items: &'a [T],
    iter: std::slice::Iter<'a, T>,
}

impl<'a, T> VecCursor<'a, T> {
    fn new(items: &'a [T]) -> Self {
        Self {
            items,
            iter: items.iter(),
        }
    }
}

impl<'a, T> Cursor for VecCursor<'a, T> {
    type Item = &'a T;

    fn first(&mut self) {
        self.iter = self.items.iter();
    }

    fn advance(&mut self) {
        self.iter.next();
    }

    fn is_done(&self) -> bool {
        self.iter.as_slice().is_empty()
    }

    fn current(&self) -> Option<&'a T> {
        self.iter.as_slice().first()
    }
}

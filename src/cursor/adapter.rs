//! Foreign-container adapter
//!
//! Exposes any borrowed ordered std container (`LinkedList`, `VecDeque`,
//! slices, ...) through the [`Cursor`] contract using the container's own
//! iterator. The container is borrowed, never copied or owned, so it must
//! outlive the adapter and cannot be mutated while the adapter is live.

use std::fmt;

use super::Cursor;

/// Cursor over a foreign container `C` borrowed for `'a`.
pub struct ForeignCursor<'a, C>
where
    C: ?Sized,
    &'a C: IntoIterator,
{
    container: &'a C,
    iter: <&'a C as IntoIterator>::IntoIter,
    current: Option<<&'a C as IntoIterator>::Item>,
}

impl<'a, C> ForeignCursor<'a, C>
where
    C: ?Sized,
    &'a C: IntoIterator,
{
    /// Bind to `container`, positioned at its first element.
    pub fn new(container: &'a C) -> Self {
        let mut iter = container.into_iter();
        let current = iter.next();
        Self {
            container,
            iter,
            current,
        }
    }

    /// The borrowed container.
    pub fn container(&self) -> &'a C {
        self.container
    }
}

impl<'a, C> Cursor for ForeignCursor<'a, C>
where
    C: ?Sized,
    &'a C: IntoIterator,
    <&'a C as IntoIterator>::Item: Clone,
{
    type Item = <&'a C as IntoIterator>::Item;

    fn first(&mut self) {
        self.iter = self.container.into_iter();
        self.current = self.iter.next();
    }

    fn advance(&mut self) {
        if self.current.is_some() {
            self.current = self.iter.next();
        }
    }

    fn is_done(&self) -> bool {
        self.current.is_none()
    }

    fn current(&self) -> Option<Self::Item> {
        self.current.clone()
    }
}

impl<'a, C> fmt::Debug for ForeignCursor<'a, C>
where
    C: ?Sized + fmt::Debug,
    &'a C: IntoIterator,
    <&'a C as IntoIterator>::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForeignCursor")
            .field("container", &self.container)
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{LinkedList, VecDeque};

    use super::*;
    use crate::cursor::CursorExt;

    #[test]
    fn test_linked_list_order() {
        let list: LinkedList<&str> = ["a", "b", "c", "d"].into_iter().collect();
        let native: Vec<&str> = list.iter().copied().collect();
        let adapted: Vec<&str> = ForeignCursor::new(&list).walk().copied().collect();
        assert_eq!(adapted, native);
    }

    #[test]
    fn test_first_rewinds() {
        let deque: VecDeque<u8> = (1..=3).collect();
        let mut cursor = ForeignCursor::new(&deque);
        cursor.advance();
        cursor.advance();
        cursor.advance();
        assert!(cursor.is_done());
        cursor.advance();
        assert!(cursor.is_done());

        cursor.first();
        assert_eq!(cursor.current(), Some(&1));
    }

    #[test]
    fn test_empty_and_slice() {
        let empty: LinkedList<u8> = LinkedList::new();
        let mut cursor = ForeignCursor::new(&empty);
        cursor.first();
        assert!(cursor.is_done());
        assert_eq!(cursor.current(), None);

        let slice: &[u8] = &[4, 5, 6];
        let skipped: Vec<u8> = ForeignCursor::new(slice).skipping().walk().copied().collect();
        assert_eq!(skipped, vec![4, 6]);
    }
}

//! Cursor contract
//!
//! A cursor is a stateful traversal position over exactly one sequence,
//! or over one wrapped cursor when used through a decorator.
//!
//! Invariants every implementation keeps:
//! - `first()` repositions to the logical start
//! - `is_done()` is true iff the position is past the last element
//! - `current()` returns `None` whenever `is_done()` is true
//! - `advance()` moves exactly one logical step

mod adapter;
mod decorator;

pub use adapter::ForeignCursor;
pub use decorator::{Counting, Decorator, Filter, IsKind, Predicate, Skip, Tally};

/// Polymorphic traversal contract.
///
/// Items are handed out by value, so handles should be cheap to copy
/// (typically `&T` borrowed from the owning collection).
pub trait Cursor {
    /// Handle yielded at each position.
    type Item;

    /// Reposition to the start of the underlying sequence.
    fn first(&mut self);

    /// Move one logical element forward. No-op once done for base cursors.
    fn advance(&mut self);

    /// Whether traversal has run past the last element.
    fn is_done(&self) -> bool;

    /// Item at the current position, `None` once done.
    fn current(&self) -> Option<Self::Item>;

    /// Bridge into `std::iter::Iterator`.
    ///
    /// Calls `first()` once, then yields every non-sentinel item.
    fn walk(self) -> Walk<Self>
    where
        Self: Sized,
    {
        Walk {
            cursor: self,
            started: false,
        }
    }
}

/// Boxed cursor trait object, as returned by collections.
pub type BoxCursor<'a, T> = Box<dyn Cursor<Item = T> + 'a>;

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Item = C::Item;

    fn first(&mut self) {
        (**self).first()
    }

    fn advance(&mut self) {
        (**self).advance()
    }

    fn is_done(&self) -> bool {
        (**self).is_done()
    }

    fn current(&self) -> Option<Self::Item> {
        (**self).current()
    }
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Item = C::Item;

    fn first(&mut self) {
        (**self).first()
    }

    fn advance(&mut self) {
        (**self).advance()
    }

    fn is_done(&self) -> bool {
        (**self).is_done()
    }

    fn current(&self) -> Option<Self::Item> {
        (**self).current()
    }
}

/// Iterator over a cursor, created by [`Cursor::walk`].
#[derive(Debug)]
pub struct Walk<C> {
    cursor: C,
    started: bool,
}

impl<C> Walk<C> {
    /// Give back the cursor, e.g. to read a counter after iteration.
    pub fn into_inner(self) -> C {
        self.cursor
    }
}

impl<C: Cursor> Iterator for Walk<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.started {
            self.cursor.advance();
        } else {
            self.cursor.first();
            self.started = true;
        }
        while !self.cursor.is_done() {
            if let Some(item) = self.cursor.current() {
                return Some(item);
            }
            self.cursor.advance();
        }
        None
    }
}

/// Builder-style wrappers available on every sized cursor.
pub trait CursorExt: Cursor + Sized {
    /// Wrap in a [`Counting`] decorator.
    fn counting(self) -> Counting<Self> {
        Counting::new(self)
    }

    /// Wrap in a [`Skip`] decorator.
    fn skipping(self) -> Skip<Self> {
        Skip::new(self)
    }

    /// Wrap in a [`Filter`] decorator with the given predicate.
    fn filtered<P>(self, predicate: P) -> Filter<Self, P>
    where
        P: Predicate<Self::Item>,
    {
        Filter::new(self, predicate)
    }

    /// Erase the concrete type.
    fn boxed<'a>(self) -> BoxCursor<'a, Self::Item>
    where
        Self: 'a,
    {
        Box::new(self)
    }
}

impl<C: Cursor> CursorExt for C {}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal index cursor over a slice for contract tests.
    struct SliceCursor<'a> {
        items: &'a [u32],
        index: usize,
    }

    impl<'a> Cursor for SliceCursor<'a> {
        type Item = &'a u32;

        fn first(&mut self) {
            self.index = 0;
        }

        fn advance(&mut self) {
            if self.index < self.items.len() {
                self.index += 1;
            }
        }

        fn is_done(&self) -> bool {
            self.index >= self.items.len()
        }

        fn current(&self) -> Option<Self::Item> {
            self.items.get(self.index)
        }
    }

    #[test]
    fn test_walk_calls_first_once() {
        let items = [1, 2, 3];
        let mut cursor = SliceCursor {
            items: &items,
            index: 2,
        };
        cursor.advance();
        assert!(cursor.is_done());

        let seen: Vec<u32> = cursor.walk().copied().collect();
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn test_boxed_and_borrowed_forwarding() {
        let items = [7, 8];
        let mut cursor = SliceCursor {
            items: &items,
            index: 0,
        };

        fn second<C: Cursor>(mut cursor: C) -> Option<C::Item> {
            cursor.first();
            cursor.advance();
            cursor.current()
        }

        assert_eq!(second(&mut cursor), Some(&8));
        assert_eq!(cursor.current(), Some(&8));

        let mut boxed = cursor.boxed();
        boxed.advance();
        assert!(boxed.is_done());
        assert_eq!(boxed.current(), None);
    }
}

//! Cursor decorators
//!
//! Each decorator owns exactly one wrapped cursor (moved in at construction)
//! and forwards the contract to it, overriding selectively. Chains are a
//! linear ownership list: dropping the outermost decorator drops them all.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use tracing::trace;

use super::Cursor;
use crate::appliance::{Appliance, ApplianceKind};

/// Access to the cursor a decorator wraps.
pub trait Decorator {
    /// Wrapped cursor type.
    type Inner: Cursor;

    /// Borrow the wrapped cursor.
    fn inner(&self) -> &Self::Inner;

    /// Unwrap, handing ownership of the wrapped cursor back.
    fn into_inner(self) -> Self::Inner;
}

/// Counts forwarded steps that land on an element.
///
/// Driving N items to completion yields `N - 1` (and `0` for an empty
/// sequence): the initial element is reached by `first()`, not counted.
///
/// The counter is a lifetime total. `first()` does NOT reset it, so a second
/// pass accumulates on top of the first; call [`Counting::reset_count`] for
/// per-pass numbers.
#[derive(Debug)]
pub struct Counting<C> {
    wrapped: C,
    counter: Rc<Cell<usize>>,
}

/// Read-only view of a [`Counting`] counter.
///
/// Stays readable after the decorator has been boxed into a longer chain.
#[derive(Debug, Clone)]
pub struct Tally(Rc<Cell<usize>>);

impl Tally {
    /// Current counter value.
    pub fn get(&self) -> usize {
        self.0.get()
    }
}

impl<C: Cursor> Counting<C> {
    /// Wrap `cursor` with a counter starting at zero.
    pub fn new(cursor: C) -> Self {
        Self {
            wrapped: cursor,
            counter: Rc::new(Cell::new(0)),
        }
    }

    /// Number of steps that landed on an element so far.
    pub fn count_seen(&self) -> usize {
        self.counter.get()
    }

    /// Zero the counter.
    pub fn reset_count(&mut self) {
        self.counter.set(0);
    }

    /// Handle for reading the counter once this decorator is wrapped further.
    pub fn tally(&self) -> Tally {
        Tally(Rc::clone(&self.counter))
    }
}

impl<C: Cursor> Cursor for Counting<C> {
    type Item = C::Item;

    fn first(&mut self) {
        self.wrapped.first();
    }

    fn advance(&mut self) {
        self.wrapped.advance();
        if !self.wrapped.is_done() {
            self.counter.set(self.counter.get() + 1);
        }
    }

    fn is_done(&self) -> bool {
        self.wrapped.is_done()
    }

    fn current(&self) -> Option<Self::Item> {
        self.wrapped.current()
    }
}

impl<C: Cursor> Decorator for Counting<C> {
    type Inner = C;

    fn inner(&self) -> &C {
        &self.wrapped
    }

    fn into_inner(self) -> C {
        self.wrapped
    }
}

/// Visits every other element, starting from the first.
#[derive(Debug)]
pub struct Skip<C> {
    wrapped: C,
}

impl<C: Cursor> Skip<C> {
    /// Wrap `cursor`.
    pub fn new(cursor: C) -> Self {
        Self { wrapped: cursor }
    }
}

impl<C: Cursor> Cursor for Skip<C> {
    type Item = C::Item;

    fn first(&mut self) {
        self.wrapped.first();
    }

    fn advance(&mut self) {
        self.wrapped.advance();
        // never step past the end on the second hop
        if !self.wrapped.is_done() {
            self.wrapped.advance();
        }
    }

    fn is_done(&self) -> bool {
        self.wrapped.is_done()
    }

    fn current(&self) -> Option<Self::Item> {
        self.wrapped.current()
    }
}

impl<C: Cursor> Decorator for Skip<C> {
    type Inner = C;

    fn inner(&self) -> &C {
        &self.wrapped
    }

    fn into_inner(self) -> C {
        self.wrapped
    }
}

/// Test applied by [`Filter`] to each candidate item.
///
/// Implemented for any `Fn(&T) -> bool` closure and for [`IsKind`].
pub trait Predicate<T> {
    /// Whether `item` should be visited.
    fn matches(&self, item: &T) -> bool;
}

impl<T, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    fn matches(&self, item: &T) -> bool {
        self(item)
    }
}

/// Matches appliances of one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsKind(pub ApplianceKind);

impl<'a, A> Predicate<&'a A> for IsKind
where
    A: Appliance + ?Sized,
{
    fn matches(&self, item: &&'a A) -> bool {
        item.kind() == self.0
    }
}

/// Visits only items satisfying a predicate fixed at construction.
///
/// Whenever `is_done()` is false, `current()` satisfies the predicate.
pub struct Filter<C, P> {
    wrapped: C,
    predicate: P,
}

impl<C, P> Filter<C, P>
where
    C: Cursor,
    P: Predicate<C::Item>,
{
    /// Wrap `cursor`, keeping only items accepted by `predicate`.
    pub fn new(cursor: C, predicate: P) -> Self {
        Self {
            wrapped: cursor,
            predicate,
        }
    }

    fn skip_rejected(&mut self) {
        let mut skipped = 0usize;
        while !self.wrapped.is_done() {
            match self.wrapped.current() {
                Some(item) if self.predicate.matches(&item) => break,
                _ => {
                    self.wrapped.advance();
                    skipped += 1;
                }
            }
        }
        if skipped > 0 {
            trace!(skipped, "filter skipped rejected items");
        }
    }
}

impl<C: Cursor> Filter<C, IsKind> {
    /// Keep only appliances of `kind`.
    pub fn kind(cursor: C, kind: ApplianceKind) -> Self {
        Self {
            wrapped: cursor,
            predicate: IsKind(kind),
        }
    }
}

impl<C, P> Cursor for Filter<C, P>
where
    C: Cursor,
    P: Predicate<C::Item>,
{
    type Item = C::Item;

    fn first(&mut self) {
        self.wrapped.first();
        self.skip_rejected();
    }

    fn advance(&mut self) {
        self.wrapped.advance();
        self.skip_rejected();
    }

    fn is_done(&self) -> bool {
        self.wrapped.is_done()
    }

    fn current(&self) -> Option<Self::Item> {
        self.wrapped.current()
    }
}

impl<C, P> Decorator for Filter<C, P>
where
    C: Cursor,
    P: Predicate<C::Item>,
{
    type Inner = C;

    fn inner(&self) -> &C {
        &self.wrapped
    }

    fn into_inner(self) -> C {
        self.wrapped
    }
}

impl<C: fmt::Debug, P> fmt::Debug for Filter<C, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter")
            .field("wrapped", &self.wrapped)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::{ArrayCollection, Collection, VecCollection};
    use crate::cursor::CursorExt;

    fn letters() -> VecCollection<char> {
        "ABCDE".chars().collect()
    }

    #[test]
    fn test_skip_visits_every_other() {
        let items = letters();
        let seen: String = Skip::new(items.make_cursor()).walk().collect();
        assert_eq!(seen, "ACE");
    }

    #[test]
    fn test_skip_even_length_stops_cleanly() {
        let items: ArrayCollection<char> = "ABCD".chars().collect();
        let mut cursor = items.make_cursor().skipping();
        cursor.first();
        assert_eq!(cursor.current(), Some(&'A'));
        cursor.advance();
        assert_eq!(cursor.current(), Some(&'C'));
        cursor.advance();
        assert!(cursor.is_done());
        cursor.advance();
        assert!(cursor.is_done());
    }

    #[test]
    fn test_counting_boundaries() {
        for (len, expected) in [(0usize, 0usize), (1, 0), (2, 1), (5, 4)] {
            let items: VecCollection<usize> = (0..len).collect();
            let mut cursor = Counting::new(items.make_cursor());
            cursor.first();
            while !cursor.is_done() {
                cursor.advance();
            }
            assert_eq!(cursor.count_seen(), expected, "len {len}");
        }
    }

    #[test]
    fn test_counting_is_not_reset_by_first() {
        let items = letters();
        let mut cursor = items.make_cursor().counting();
        for _ in 0..2 {
            cursor.first();
            while !cursor.is_done() {
                cursor.advance();
            }
        }
        assert_eq!(cursor.count_seen(), 8);

        cursor.reset_count();
        assert_eq!(cursor.count_seen(), 0);
    }

    #[test]
    fn test_tally_survives_boxing() {
        let items = letters();
        let counting = items.make_cursor().counting();
        let tally = counting.tally();
        let seen: Vec<&char> = counting.skipping().boxed().walk().collect();
        assert_eq!(seen, vec![&'A', &'C', &'E']);
        assert_eq!(tally.get(), 4);
    }

    #[test]
    fn test_filter_closure() {
        let items: ArrayCollection<u32> = (1..=10).collect();
        let evens: Vec<u32> = items
            .make_cursor()
            .filtered(|n: &&u32| **n % 2 == 0)
            .walk()
            .copied()
            .collect();
        assert_eq!(evens, vec![2, 4, 6, 8, 10]);
    }

    #[test]
    fn test_filter_none_matching_is_done_after_first() {
        let items = letters();
        let mut cursor = items.make_cursor().filtered(|c: &&char| **c == 'Z');
        cursor.first();
        assert!(cursor.is_done());
        assert_eq!(cursor.current(), None);
    }

    #[test]
    fn test_into_inner_returns_wrapped_position() {
        let items = letters();
        let mut cursor = items.make_cursor().skipping().counting();
        cursor.first();
        cursor.advance();
        assert_eq!(cursor.count_seen(), 1);
        assert_eq!(cursor.inner().current(), Some(&'C'));

        let skip = cursor.into_inner();
        let mut base = skip.into_inner();
        assert_eq!(base.current(), Some(&'C'));
        base.advance();
        assert_eq!(base.current(), Some(&'D'));
    }
}

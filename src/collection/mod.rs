//! Owning collections
//!
//! Two interchangeable storage strategies behind one [`Collection`]
//! contract. Both preserve insertion order, bounds-check indexed access and
//! hand out independent cursors positioned at the first element.

mod array;
mod vector;

pub use array::{ArrayCollection, ArrayCursor, INITIAL_CAPACITY};
pub use vector::{VecCollection, VecCursor};

use crate::cursor::BoxCursor;

/// Owning, append-only, ordered container.
pub trait Collection<T> {
    /// Append `item`, taking ownership of it.
    fn add(&mut self, item: T);

    /// Number of items held.
    fn count(&self) -> usize;

    /// Item at `index`, `None` outside `[0, count())`.
    fn get_at(&self, index: usize) -> Option<&T>;

    /// Fresh cursor starting at the first element.
    ///
    /// Each call is independent: advancing one cursor never moves another.
    fn make_cursor<'a>(&'a self) -> BoxCursor<'a, &'a T>
    where
        T: 'a;

    /// Whether the collection holds no items.
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;

    fn fill<C: Collection<u32>>(collection: &mut C, n: u32) {
        for i in 0..n {
            collection.add(i * 10);
        }
    }

    fn drain_order<C: Collection<u32>>(collection: &C) -> Vec<u32> {
        let mut cursor = collection.make_cursor();
        let mut seen = Vec::new();
        cursor.first();
        while !cursor.is_done() {
            if let Some(item) = cursor.current() {
                seen.push(*item);
            }
            cursor.advance();
        }
        seen
    }

    #[test]
    fn test_backends_agree() {
        let mut array: ArrayCollection<u32> = ArrayCollection::new();
        let mut vector: VecCollection<u32> = VecCollection::new();
        fill(&mut array, 9);
        fill(&mut vector, 9);

        assert_eq!(array.count(), vector.count());
        assert_eq!(drain_order(&array), drain_order(&vector));
        for i in 0..11 {
            assert_eq!(array.get_at(i), vector.get_at(i), "index {i}");
        }
    }

    #[test]
    fn test_empty_collection() {
        let array: ArrayCollection<u32> = ArrayCollection::new();
        assert!(array.is_empty());
        assert!(array.make_cursor().is_done());
        assert_eq!(array.get_at(0), None);
    }
}

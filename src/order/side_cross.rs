//! Side-cross cursor: alternately the smallest and largest remaining
//! element of a sorted snapshot.

use std::fmt;
use std::iter::FusedIterator;

use super::Cursor;
use super::ReferenceCounter;
use super::ascending::sorted_ascending;

/// A cursor that alternates between both ends of a sorted snapshot.
///
/// The traversal yields the smallest element, then the largest, then the
/// second smallest, the second largest and so on, meeting in the middle.
/// For an odd number of elements the last one yielded is the median.
///
/// The cursor keeps two indices into the ascending snapshot, `left` from
/// the front and `right` from the back, and a `count` of yielded elements.
/// An even `count` reads at `left`, an odd one at `right`. Cursors are
/// compared by `count` alone.
///
/// # Examples
///
/// ```rust
/// use order_views::Container;
///
/// let container: Container<i32> = [7, 15, 6, 1, 2].into_iter().collect();
/// let elements: Vec<i32> = container.side_cross_order().collect();
/// assert_eq!(elements, vec![1, 15, 2, 7, 6]);
/// ```
pub struct SideCrossOrder<T> {
    sorted: ReferenceCounter<[T]>,
    left: usize,
    right: usize,
    count: usize,
}

impl<T: Clone + Ord> SideCrossOrder<T> {
    pub(crate) fn new(elements: &[T]) -> Self {
        let sorted = sorted_ascending(elements);
        tracing::trace!(order = "side-cross", length = sorted.len(), "materialized snapshot");
        Self {
            right: sorted.len().saturating_sub(1),
            sorted: ReferenceCounter::from(sorted),
            left: 0,
            count: 0,
        }
    }
}

impl<T> SideCrossOrder<T> {
    /// Returns the ascending snapshot the cursor alternates over.
    #[inline]
    pub fn sorted(&self) -> &[T] {
        &self.sorted
    }

    #[inline]
    const fn reads_left(&self) -> bool {
        self.count % 2 == 0
    }
}

impl<T> Cursor for SideCrossOrder<T> {
    type Item = T;

    fn current(&self) -> Option<&T> {
        if self.count >= self.sorted.len() {
            return None;
        }
        if self.reads_left() {
            self.sorted.get(self.left)
        } else {
            self.sorted.get(self.right)
        }
    }

    fn advance(&mut self) -> &mut Self {
        if self.count >= self.sorted.len() {
            return self;
        }
        if self.reads_left() {
            self.left += 1;
        } else {
            self.right = self.right.saturating_sub(1);
        }
        self.count += 1;
        self
    }

    #[inline]
    fn offset(&self) -> usize {
        self.count
    }

    #[inline]
    fn total(&self) -> usize {
        self.sorted.len()
    }

    fn to_end(&self) -> Self {
        Self {
            sorted: ReferenceCounter::clone(&self.sorted),
            left: 0,
            right: self.sorted.len().saturating_sub(1),
            count: self.sorted.len(),
        }
    }
}

impl<T: Clone> Iterator for SideCrossOrder<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.current()?.clone();
        self.advance();
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.sorted.len().saturating_sub(self.count);
        (remaining, Some(remaining))
    }
}

impl<T: Clone> ExactSizeIterator for SideCrossOrder<T> {}

impl<T: Clone> FusedIterator for SideCrossOrder<T> {}

impl<T> Clone for SideCrossOrder<T> {
    fn clone(&self) -> Self {
        Self {
            sorted: ReferenceCounter::clone(&self.sorted),
            left: self.left,
            right: self.right,
            count: self.count,
        }
    }
}

impl<T> PartialEq for SideCrossOrder<T> {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count
    }
}

impl<T> Eq for SideCrossOrder<T> {}

impl<T> fmt::Debug for SideCrossOrder<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SideCrossOrder")
            .field("left", &self.left)
            .field("right", &self.right)
            .field("count", &self.count)
            .field("total", &self.sorted.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(vec![], vec![])]
    #[case(vec![9], vec![9])]
    #[case(vec![2, 1], vec![1, 2])]
    #[case(vec![7, 15, 6, 1, 2], vec![1, 15, 2, 7, 6])]
    #[case(vec![4, 3, 2, 1], vec![1, 4, 2, 3])]
    #[case(vec![1, 1, 2, 2], vec![1, 2, 1, 2])]
    fn test_alternates_ends(#[case] elements: Vec<i32>, #[case] expected: Vec<i32>) {
        let cursor = SideCrossOrder::new(&elements);
        assert_eq!(cursor.collect::<Vec<_>>(), expected);
    }

    #[rstest]
    fn test_indices_converge() {
        let mut cursor = SideCrossOrder::new(&[5, 1, 3]);
        assert_eq!((cursor.left, cursor.right, cursor.count), (0, 2, 0));
        cursor.advance();
        assert_eq!((cursor.left, cursor.right, cursor.count), (1, 2, 1));
        cursor.advance();
        assert_eq!((cursor.left, cursor.right, cursor.count), (1, 1, 2));
        assert_eq!(cursor.current(), Some(&3));
        cursor.advance();
        assert!(cursor.is_exhausted());
        assert_eq!(cursor, cursor.to_end());
    }

    #[rstest]
    fn test_empty_starts_at_end() {
        let cursor: SideCrossOrder<i32> = SideCrossOrder::new(&[]);
        assert_eq!(cursor.right, 0);
        assert_eq!(cursor, cursor.to_end());
    }
}

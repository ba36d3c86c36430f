//! Ascending-order cursor over a sorted snapshot.

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;

use super::Cursor;
use super::snapshot::Snapshot;

/// Orders two elements by the `<` relation alone.
fn by_less_than<T: PartialOrd>(left: &T, right: &T) -> Ordering {
    if left < right {
        Ordering::Less
    } else if right < left {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Copies `elements` and sorts the copy by `<`.
///
/// The sort is stable: equal elements keep their insertion order.
pub(super) fn sorted_ascending<T: Clone + Ord>(elements: &[T]) -> Vec<T> {
    let mut sorted = elements.to_vec();
    sorted.sort_by(by_less_than);
    sorted
}

/// A cursor over a sorted copy of a container's elements, smallest first.
///
/// The copy is taken and sorted once, when the cursor is created. Mutating
/// the container afterwards does not affect the cursor.
///
/// # Time Complexity
///
/// | Operation    | Complexity |
/// |--------------|------------|
/// | construction | O(n log n) |
/// | `advance`    | O(1)       |
/// | `to_end`     | O(1)       |
///
/// # Examples
///
/// ```rust
/// use order_views::Container;
///
/// let container: Container<i32> = [7, 15, 6, 1, 2].into_iter().collect();
/// let elements: Vec<i32> = container.ascending_order().collect();
/// assert_eq!(elements, vec![1, 2, 6, 7, 15]);
/// ```
pub struct AscendingOrder<T> {
    snapshot: Snapshot<T>,
}

impl<T: Clone + Ord> AscendingOrder<T> {
    pub(crate) fn new(elements: &[T]) -> Self {
        let sorted = sorted_ascending(elements);
        tracing::trace!(order = "ascending", length = sorted.len(), "materialized snapshot");
        Self {
            snapshot: Snapshot::new(sorted),
        }
    }
}

impl<T> AscendingOrder<T> {
    /// Returns the whole sorted snapshot, independent of the cursor position.
    #[inline]
    pub fn sorted(&self) -> &[T] {
        self.snapshot.elements()
    }
}

impl<T> Cursor for AscendingOrder<T> {
    type Item = T;

    #[inline]
    fn current(&self) -> Option<&T> {
        self.snapshot.current()
    }

    #[inline]
    fn advance(&mut self) -> &mut Self {
        self.snapshot.advance();
        self
    }

    #[inline]
    fn offset(&self) -> usize {
        self.snapshot.position()
    }

    #[inline]
    fn total(&self) -> usize {
        self.snapshot.len()
    }

    fn to_end(&self) -> Self {
        Self {
            snapshot: self.snapshot.to_end(),
        }
    }
}

impl<T: Clone> Iterator for AscendingOrder<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.snapshot.next_cloned()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.snapshot.remaining();
        (remaining, Some(remaining))
    }
}

impl<T: Clone> ExactSizeIterator for AscendingOrder<T> {}

impl<T: Clone> FusedIterator for AscendingOrder<T> {}

impl<T> Clone for AscendingOrder<T> {
    fn clone(&self) -> Self {
        Self {
            snapshot: self.snapshot.clone(),
        }
    }
}

impl<T> PartialEq for AscendingOrder<T> {
    fn eq(&self, other: &Self) -> bool {
        self.snapshot.position() == other.snapshot.position()
    }
}

impl<T> Eq for AscendingOrder<T> {}

impl<T> fmt::Debug for AscendingOrder<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("AscendingOrder")
            .field("position", &self.snapshot.position())
            .field("total", &self.snapshot.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(vec![], vec![])]
    #[case(vec![4], vec![4])]
    #[case(vec![7, 15, 6, 1, 2], vec![1, 2, 6, 7, 15])]
    #[case(vec![3, 1, 3, 1], vec![1, 1, 3, 3])]
    fn test_sorts_smallest_first(#[case] elements: Vec<i32>, #[case] expected: Vec<i32>) {
        let cursor = AscendingOrder::new(&elements);
        assert_eq!(cursor.collect::<Vec<_>>(), expected);
    }

    #[rstest]
    fn test_sorted_is_independent_of_position() {
        let mut cursor = AscendingOrder::new(&[2, 1]);
        cursor.advance();
        assert_eq!(cursor.sorted(), &[1, 2]);
        assert_eq!(cursor.current(), Some(&2));
    }

    #[rstest]
    fn test_by_less_than_treats_unordered_as_equal() {
        assert_eq!(by_less_than(&f64::NAN, &1.0), Ordering::Equal);
        assert_eq!(by_less_than(&0.5, &1.0), Ordering::Less);
    }
}

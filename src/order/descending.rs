//! Descending-order cursor over a sorted snapshot.

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;

use super::Cursor;
use super::snapshot::Snapshot;

/// Orders two elements by the `>` relation alone.
fn by_greater_than<T: PartialOrd>(left: &T, right: &T) -> Ordering {
    if left > right {
        Ordering::Less
    } else if right > left {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// A cursor over a sorted copy of a container's elements, largest first.
///
/// The copy is sorted with `>` directly rather than by reversing an
/// ascending sort. The sort is stable, so equal elements keep their
/// insertion order here exactly as they do in
/// [`AscendingOrder`](super::AscendingOrder).
///
/// # Examples
///
/// ```rust
/// use order_views::Container;
///
/// let container: Container<i32> = [7, 15, 6, 1, 2].into_iter().collect();
/// let elements: Vec<i32> = container.descending_order().collect();
/// assert_eq!(elements, vec![15, 7, 6, 2, 1]);
/// ```
pub struct DescendingOrder<T> {
    snapshot: Snapshot<T>,
}

impl<T: Clone + Ord> DescendingOrder<T> {
    pub(crate) fn new(elements: &[T]) -> Self {
        let mut sorted = elements.to_vec();
        sorted.sort_by(by_greater_than);
        tracing::trace!(order = "descending", length = sorted.len(), "materialized snapshot");
        Self {
            snapshot: Snapshot::new(sorted),
        }
    }
}

impl<T> DescendingOrder<T> {
    /// Returns the whole sorted snapshot, independent of the cursor position.
    #[inline]
    pub fn sorted(&self) -> &[T] {
        self.snapshot.elements()
    }
}

impl<T> Cursor for DescendingOrder<T> {
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

impl<T: Clone> Iterator for DescendingOrder<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.snapshot.next_cloned()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.snapshot.remaining();
        (remaining, Some(remaining))
    }
}

impl<T: Clone> ExactSizeIterator for DescendingOrder<T> {}

impl<T: Clone> FusedIterator for DescendingOrder<T> {}

impl<T> Clone for DescendingOrder<T> {
    fn clone(&self) -> Self {
        Self {
            snapshot: self.snapshot.clone(),
        }
    }
}

impl<T> PartialEq for DescendingOrder<T> {
    fn eq(&self, other: &Self) -> bool {
        self.snapshot.position() == other.snapshot.position()
    }
}

impl<T> Eq for DescendingOrder<T> {}

impl<T> fmt::Debug for DescendingOrder<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("DescendingOrder")
            .field("position", &self.snapshot.position())
            .field("total", &self.snapshot.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    /// Ordered by `rank` only, so `label` reveals the relative order of ties.
    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Ranked {
        rank: u8,
        label: char,
    }

    impl PartialOrd for Ranked {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Ranked {
        fn cmp(&self, other: &Self) -> Ordering {
            self.rank.cmp(&other.rank)
        }
    }

    #[rstest]
    fn test_sorts_largest_first() {
        let cursor = DescendingOrder::new(&[7, 15, 6, 1, 2]);
        assert_eq!(cursor.collect::<Vec<_>>(), vec![15, 7, 6, 2, 1]);
    }

    #[rstest]
    fn test_ties_keep_insertion_order() {
        let elements = vec![
            Ranked { rank: 1, label: 'a' },
            Ranked { rank: 2, label: 'b' },
            Ranked { rank: 1, label: 'c' },
        ];
        let labels: String = DescendingOrder::new(&elements)
            .map(|ranked| ranked.label)
            .collect();
        // A reversed ascending sort would give "bca".
        assert_eq!(labels, "bac");
    }

    #[rstest]
    fn test_empty_begin_equals_end() {
        let cursor: DescendingOrder<i32> = DescendingOrder::new(&[]);
        assert_eq!(cursor, cursor.to_end());
        assert_eq!(cursor.current(), None);
    }
}

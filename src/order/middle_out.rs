//! Middle-out cursor: from the middle of the insertion order outwards.

use std::fmt;
use std::iter::FusedIterator;

use super::Cursor;
use super::ReferenceCounter;

/// Computes the middle-out visiting order for `length` elements.
///
/// The first index is `(length - 1) / 2`. After it come the neighbours
/// `middle - 1`, `middle + 1`, `middle - 2`, `middle + 2` and so on. Indices
/// outside `0..length` are skipped, so once one side runs out the other
/// continues alone. The result is a permutation of `0..length`.
///
/// # Examples
///
/// ```rust
/// use order_views::order::middle_out_indices;
///
/// assert_eq!(middle_out_indices(5), vec![2, 1, 3, 0, 4]);
/// assert_eq!(middle_out_indices(4), vec![1, 0, 2, 3]);
/// assert!(middle_out_indices(0).is_empty());
/// ```
pub fn middle_out_indices(length: usize) -> Vec<usize> {
    let mut indices = Vec::with_capacity(length);
    if length == 0 {
        return indices;
    }

    let middle = (length - 1) / 2;
    indices.push(middle);

    let mut distance = 1;
    while indices.len() < length {
        if let Some(left) = middle.checked_sub(distance) {
            indices.push(left);
        }
        let right = middle + distance;
        if right < length {
            indices.push(right);
        }
        distance += 1;
    }
    indices
}

/// A cursor that starts at the middle element and spirals outwards.
///
/// The cursor copies the container's elements in insertion order and keeps
/// the index permutation from [`middle_out_indices`]; both are computed once
/// on creation. Because the elements are copied, the cursor is isolated
/// from later mutation of the container just like the sorted cursors.
///
/// # Examples
///
/// ```rust
/// use order_views::Container;
///
/// let container: Container<i32> = [7, 15, 6, 1, 2].into_iter().collect();
/// let elements: Vec<i32> = container.middle_out_order().collect();
/// assert_eq!(elements, vec![6, 15, 1, 7, 2]);
/// ```
pub struct MiddleOutOrder<T> {
    elements: ReferenceCounter<[T]>,
    indices: ReferenceCounter<[usize]>,
    position: usize,
}

impl<T: Clone> MiddleOutOrder<T> {
    pub(crate) fn new(elements: &[T]) -> Self {
        let indices = middle_out_indices(elements.len());
        tracing::trace!(order = "middle-out", length = elements.len(), "materialized snapshot");
        Self {
            elements: ReferenceCounter::from(elements),
            indices: ReferenceCounter::from(indices),
            position: 0,
        }
    }
}

impl<T> MiddleOutOrder<T> {
    /// Returns the visiting order as indices into the insertion order.
    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    fn element_at(&self, position: usize) -> Option<&T> {
        self.indices
            .get(position)
            .and_then(|&index| self.elements.get(index))
    }
}

impl<T> Cursor for MiddleOutOrder<T> {
    type Item = T;

    #[inline]
    fn current(&self) -> Option<&T> {
        self.element_at(self.position)
    }

    #[inline]
    fn advance(&mut self) -> &mut Self {
        if self.position < self.indices.len() {
            self.position += 1;
        }
        self
    }

    #[inline]
    fn offset(&self) -> usize {
        self.position
    }

    #[inline]
    fn total(&self) -> usize {
        self.indices.len()
    }

    fn to_end(&self) -> Self {
        Self {
            elements: ReferenceCounter::clone(&self.elements),
            indices: ReferenceCounter::clone(&self.indices),
            position: self.indices.len(),
        }
    }
}

impl<T: Clone> Iterator for MiddleOutOrder<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.element_at(self.position)?.clone();
        self.position += 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.indices.len().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl<T: Clone> ExactSizeIterator for MiddleOutOrder<T> {}

impl<T: Clone> FusedIterator for MiddleOutOrder<T> {}

impl<T> Clone for MiddleOutOrder<T> {
    fn clone(&self) -> Self {
        Self {
            elements: ReferenceCounter::clone(&self.elements),
            indices: ReferenceCounter::clone(&self.indices),
            position: self.position,
        }
    }
}

impl<T> PartialEq for MiddleOutOrder<T> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl<T> Eq for MiddleOutOrder<T> {}

impl<T> fmt::Debug for MiddleOutOrder<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("MiddleOutOrder")
            .field("position", &self.position)
            .field("indices", &self.indices)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, vec![])]
    #[case(1, vec![0])]
    #[case(2, vec![0, 1])]
    #[case(3, vec![1, 0, 2])]
    #[case(4, vec![1, 0, 2, 3])]
    #[case(5, vec![2, 1, 3, 0, 4])]
    #[case(6, vec![2, 1, 3, 0, 4, 5])]
    fn test_middle_out_indices(#[case] length: usize, #[case] expected: Vec<usize>) {
        assert_eq!(middle_out_indices(length), expected);
    }

    #[rstest]
    fn test_indices_are_a_permutation() {
        for length in 0..64 {
            let mut indices = middle_out_indices(length);
            indices.sort_unstable();
            assert_eq!(indices, (0..length).collect::<Vec<_>>());
        }
    }

    #[rstest]
    fn test_reads_through_insertion_order() {
        let cursor = MiddleOutOrder::new(&["a", "b", "c", "d"]);
        assert_eq!(cursor.indices(), &[1, 0, 2, 3]);
        assert_eq!(cursor.collect::<Vec<_>>(), vec!["b", "a", "c", "d"]);
    }
}

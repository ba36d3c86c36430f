//! Insertion-order cursor over the live elements of a container.

use std::fmt;
use std::iter::FusedIterator;

use super::Cursor;

/// A cursor over a container's elements in the order they were added.
///
/// `InsertionOrder` borrows the container's storage and copies nothing.
/// Two cursors at the same position compare equal.
///
/// # Examples
///
/// ```rust
/// use order_views::Container;
///
/// let container: Container<i32> = [7, 15, 6, 1, 2].into_iter().collect();
/// let elements: Vec<&i32> = container.begin_order().collect();
/// assert_eq!(elements, vec![&7, &15, &6, &1, &2]);
/// ```
pub struct InsertionOrder<'a, T> {
    elements: &'a [T],
    position: usize,
}

impl<'a, T> InsertionOrder<'a, T> {
    #[inline]
    pub(crate) const fn new(elements: &'a [T]) -> Self {
        Self {
            elements,
            position: 0,
        }
    }

    #[inline]
    pub(crate) const fn end(elements: &'a [T]) -> Self {
        Self {
            elements,
            position: elements.len(),
        }
    }

    /// Returns the elements not yet visited, in traversal order.
    #[inline]
    pub fn remaining(&self) -> &'a [T] {
        let start = self.position.min(self.elements.len());
        &self.elements[start..]
    }
}

impl<T> Cursor for InsertionOrder<'_, T> {
    type Item = T;

    #[inline]
    fn current(&self) -> Option<&T> {
        self.elements.get(self.position)
    }

    #[inline]
    fn advance(&mut self) -> &mut Self {
        if self.position < self.elements.len() {
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
        self.elements.len()
    }

    #[inline]
    fn to_end(&self) -> Self {
        Self::end(self.elements)
    }
}

impl<'a, T> Iterator for InsertionOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.elements.get(self.position)?;
        self.position += 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.elements.len().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for InsertionOrder<'_, T> {}

impl<T> FusedIterator for InsertionOrder<'_, T> {}

impl<T> Clone for InsertionOrder<'_, T> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements,
            position: self.position,
        }
    }
}

impl<T> PartialEq for InsertionOrder<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl<T> Eq for InsertionOrder<'_, T> {}

impl<T> fmt::Debug for InsertionOrder<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("InsertionOrder")
            .field("position", &self.position)
            .field("total", &self.elements.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_yields_in_insertion_order() {
        let elements = [3, 1, 2];
        let cursor = InsertionOrder::new(&elements);
        assert_eq!(cursor.copied().collect::<Vec<_>>(), vec![3, 1, 2]);
    }

    #[rstest]
    fn test_empty_begin_equals_end() {
        let elements: [i32; 0] = [];
        assert_eq!(InsertionOrder::new(&elements), InsertionOrder::end(&elements));
    }

    #[rstest]
    fn test_remaining_shrinks_as_cursor_advances() {
        let elements = [1, 2, 3];
        let mut cursor = InsertionOrder::new(&elements);
        cursor.advance();
        assert_eq!(cursor.remaining(), &[2, 3]);
        assert_eq!(cursor.len(), 2);
    }

    #[rstest]
    fn test_advance_past_end_is_noop() {
        let elements = [1];
        let mut cursor = InsertionOrder::new(&elements);
        cursor.advance().advance().advance();
        assert_eq!(cursor.offset(), 1);
        assert_eq!(cursor, cursor.to_end());
    }
}

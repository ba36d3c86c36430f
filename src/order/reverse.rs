//! Reverse-order cursor over the live elements of a container.

use std::fmt;
use std::iter::FusedIterator;

use super::Cursor;

/// A cursor over a container's elements from the last added to the first.
///
/// Like [`InsertionOrder`](super::InsertionOrder), `ReverseOrder` borrows
/// the container's storage. Its offset counts the elements already visited,
/// so the element under the cursor is `elements[len - 1 - offset]`.
///
/// # Examples
///
/// ```rust
/// use order_views::Container;
///
/// let container: Container<i32> = [7, 15, 6, 1, 2].into_iter().collect();
/// let elements: Vec<i32> = container.reverse_order().copied().collect();
/// assert_eq!(elements, vec![2, 1, 6, 15, 7]);
/// ```
pub struct ReverseOrder<'a, T> {
    elements: &'a [T],
    position: usize,
}

impl<'a, T> ReverseOrder<'a, T> {
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

    fn element_at(&self, position: usize) -> Option<&'a T> {
        self.elements.iter().nth_back(position)
    }
}

impl<T> Cursor for ReverseOrder<'_, T> {
    type Item = T;

    #[inline]
    fn current(&self) -> Option<&T> {
        self.element_at(self.position)
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

impl<'a, T> Iterator for ReverseOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.element_at(self.position)?;
        self.position += 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.elements.len().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for ReverseOrder<'_, T> {}

impl<T> FusedIterator for ReverseOrder<'_, T> {}

impl<T> Clone for ReverseOrder<'_, T> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements,
            position: self.position,
        }
    }
}

impl<T> PartialEq for ReverseOrder<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl<T> Eq for ReverseOrder<'_, T> {}

impl<T> fmt::Debug for ReverseOrder<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ReverseOrder")
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
    #[case(&[], &[])]
    #[case(&[1], &[1])]
    #[case(&[1, 2, 3, 4], &[4, 3, 2, 1])]
    fn test_yields_back_to_front(#[case] elements: &[i32], #[case] expected: &[i32]) {
        let visited: Vec<i32> = ReverseOrder::new(elements).copied().collect();
        assert_eq!(visited, expected);
    }

    #[rstest]
    fn test_current_tracks_last_element_first() {
        let elements = [10, 20, 30];
        let mut cursor = ReverseOrder::new(&elements);
        assert_eq!(cursor.current(), Some(&30));
        cursor.advance();
        assert_eq!(cursor.current(), Some(&20));
        cursor.advance().advance();
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor, ReverseOrder::end(&elements));
    }
}

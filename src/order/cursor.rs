//! The stepping capability shared by every traversal cursor.

/// A position within one traversal of a container.
///
/// A cursor points at one element of its traversal, or past the last one
/// once exhausted. It mirrors a begin/end iterator pair: create a begin
/// cursor, take its end marker with [`to_end`](Cursor::to_end) and
/// [`advance`](Cursor::advance) until the two compare equal.
///
/// Equality between cursors of the same type is decided by
/// [`offset`](Cursor::offset) alone, never by the element under the
/// cursor.
///
/// # Examples
///
/// ```rust
/// use order_views::{Container, Cursor};
///
/// let container: Container<i32> = [7, 15, 6, 1, 2].into_iter().collect();
/// let mut cursor = container.begin_descending_order();
/// let end = container.end_descending_order();
///
/// let mut visited = Vec::new();
/// while cursor != end {
///     if let Some(element) = cursor.current() {
///         visited.push(*element);
///     }
///     cursor.advance();
/// }
/// assert_eq!(visited, vec![15, 7, 6, 2, 1]);
/// ```
pub trait Cursor {
    /// The element type the cursor points at.
    type Item;

    /// Returns the element under the cursor, or `None` once exhausted.
    fn current(&self) -> Option<&Self::Item>;

    /// Moves the cursor one step forward.
    ///
    /// Advancing an exhausted cursor does nothing.
    fn advance(&mut self) -> &mut Self;

    /// Returns the number of steps taken since the beginning.
    fn offset(&self) -> usize;

    /// Returns the number of elements in the traversal.
    fn total(&self) -> usize;

    /// Returns `true` when no element is left under the cursor.
    #[inline]
    fn is_exhausted(&self) -> bool {
        self.offset() >= self.total()
    }

    /// Returns the end marker of this traversal.
    ///
    /// The marker shares the cursor's data, so no copy or sort is repeated.
    #[must_use]
    fn to_end(&self) -> Self
    where
        Self: Sized;
}

#[cfg(test)]
mod tests {
    use super::Cursor;
    use crate::Container;
    use rstest::rstest;

    fn drain<C: Cursor>(mut cursor: C) -> usize
    where
        C: PartialEq,
    {
        let end = cursor.to_end();
        let mut steps = 0;
        while cursor != end {
            cursor.advance();
            steps += 1;
        }
        steps
    }

    #[rstest]
    fn test_generic_drain_counts_every_element() {
        let container: Container<i32> = [4, 4, 1, 9].into_iter().collect();
        assert_eq!(drain(container.begin_order()), 4);
        assert_eq!(drain(container.begin_reverse_order()), 4);
        assert_eq!(drain(container.begin_ascending_order()), 4);
        assert_eq!(drain(container.begin_descending_order()), 4);
        assert_eq!(drain(container.begin_side_cross_order()), 4);
        assert_eq!(drain(container.begin_middle_out_order()), 4);
    }

    #[rstest]
    fn test_is_exhausted_follows_position() {
        let container: Container<i32> = [1].into_iter().collect();
        let mut cursor = container.begin_ascending_order();
        assert!(!cursor.is_exhausted());
        cursor.advance();
        assert!(cursor.is_exhausted());
        assert_eq!(cursor.current(), None);
    }
}

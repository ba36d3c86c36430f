//! Shared storage for cursors that walk a sorted copy of the elements.

use super::ReferenceCounter;

/// A frozen copy of a container's elements plus a read position.
///
/// The copy lives behind a [`ReferenceCounter`], so clones of a cursor and
/// its end marker never duplicate the elements.
pub(super) struct Snapshot<T> {
    elements: ReferenceCounter<[T]>,
    position: usize,
}

impl<T> Snapshot<T> {
    pub(super) fn new(elements: Vec<T>) -> Self {
        Self {
            elements: ReferenceCounter::from(elements),
            position: 0,
        }
    }

    #[inline]
    pub(super) fn elements(&self) -> &[T] {
        &self.elements
    }

    #[inline]
    pub(super) fn current(&self) -> Option<&T> {
        self.elements.get(self.position)
    }

    #[inline]
    pub(super) fn advance(&mut self) {
        if self.position < self.elements.len() {
            self.position += 1;
        }
    }

    #[inline]
    pub(super) const fn position(&self) -> usize {
        self.position
    }

    #[inline]
    pub(super) fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub(super) fn remaining(&self) -> usize {
        self.elements.len().saturating_sub(self.position)
    }

    pub(super) fn to_end(&self) -> Self {
        Self {
            elements: ReferenceCounter::clone(&self.elements),
            position: self.elements.len(),
        }
    }
}

impl<T: Clone> Snapshot<T> {
    pub(super) fn next_cloned(&mut self) -> Option<T> {
        let element = self.elements.get(self.position)?.clone();
        self.position += 1;
        Some(element)
    }
}

impl<T> Clone for Snapshot<T> {
    fn clone(&self) -> Self {
        Self {
            elements: ReferenceCounter::clone(&self.elements),
            position: self.position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_end_marker_shares_elements() {
        let snapshot = Snapshot::new(vec![1, 2, 3]);
        let end = snapshot.to_end();
        assert_eq!(end.position(), 3);
        assert!(ReferenceCounter::ptr_eq(&snapshot.elements, &end.elements));
    }

    #[rstest]
    fn test_next_cloned_stops_at_end() {
        let mut snapshot = Snapshot::new(vec!["a".to_string()]);
        assert_eq!(snapshot.next_cloned(), Some("a".to_string()));
        assert_eq!(snapshot.next_cloned(), None);
        assert_eq!(snapshot.remaining(), 0);
    }
}

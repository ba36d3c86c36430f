//! The insertion-ordered container.
//!
//! [`Container`] stores elements in the order they are added and exposes
//! six traversal orders over them (see [`crate::order`]).
//!
//! # Examples
//!
//! ```rust
//! use order_views::{Container, ContainerError};
//!
//! let mut container = Container::new();
//! container.add("C++".to_string());
//! container.add("Java".to_string());
//! container.add("Rust".to_string());
//! container.add("Java".to_string());
//!
//! // Every occurrence is removed at once
//! assert_eq!(container.remove(&"Java".to_string()), Ok(2));
//! assert_eq!(container.to_string(), "[C++, Rust]");
//!
//! // Removing an absent value is an error and changes nothing
//! assert_eq!(
//!     container.remove(&"JavaScript".to_string()),
//!     Err(ContainerError::ElementNotFound)
//! );
//! assert_eq!(container.size(), 2);
//! ```
//!
//! # Concurrency
//!
//! A container has no internal synchronization. Like `Vec<T>`, it is
//! `Send`/`Sync` when `T` is, and shared mutation needs an external lock.

mod error;

pub use error::ContainerError;

use std::fmt;
use std::iter::FromIterator;

use crate::order::{
    AscendingOrder, DescendingOrder, InsertionOrder, MiddleOutOrder, OrderView, ReverseOrder,
    SideCrossOrder, TraversalOrder,
};

/// A growable, insertion-ordered collection with six traversal orders.
///
/// Duplicates are kept, both in number and relative order.
///
/// # Time Complexity
///
/// | Operation                      | Complexity |
/// |--------------------------------|------------|
/// | `add`                          | O(1)*      |
/// | `remove`                       | O(n)       |
/// | `size`                         | O(1)       |
/// | insertion / reverse cursor     | O(1)       |
/// | ascending / descending cursor  | O(n log n) |
/// | side-cross cursor              | O(n log n) |
/// | middle-out cursor              | O(n)       |
///
/// *amortized
///
/// # Examples
///
/// ```rust
/// use order_views::Container;
///
/// let mut container = Container::new();
/// for value in [7, 15, 6, 1, 2] {
///     container.add(value);
/// }
///
/// assert_eq!(container.size(), 5);
/// assert_eq!(container.to_string(), "[7, 15, 6, 1, 2]");
/// assert_eq!(container.descending_order().collect::<Vec<_>>(), vec![15, 7, 6, 2, 1]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Container<T> {
    elements: Vec<T>,
}

impl<T> Container<T> {
    /// Creates an empty container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use order_views::Container;
    ///
    /// let container: Container<i32> = Container::new();
    /// assert!(container.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Creates an empty container with room for `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Appends `value` after every element already in the container.
    ///
    /// Cursors created afterwards see the new element; snapshot cursors
    /// created before do not.
    pub fn add(&mut self, value: T) {
        self.elements.push(value);
        tracing::trace!(size = self.elements.len(), "added element");
    }

    /// Returns the number of elements.
    #[inline]
    pub fn size(&self) -> usize {
        self.elements.len()
    }

    /// Returns the number of elements. Same as [`size`](Self::size).
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the container holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the elements in insertion order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns an iterator in insertion order.
    ///
    /// Same as [`begin_order`](Self::begin_order).
    #[inline]
    pub fn iter(&self) -> InsertionOrder<'_, T> {
        self.begin_order()
    }

    /// Returns a cursor at the first element in insertion order.
    #[inline]
    pub fn begin_order(&self) -> InsertionOrder<'_, T> {
        InsertionOrder::new(&self.elements)
    }

    /// Returns the end marker of the insertion order.
    #[inline]
    pub fn end_order(&self) -> InsertionOrder<'_, T> {
        InsertionOrder::end(&self.elements)
    }

    /// Returns an iterator from the last added element to the first.
    ///
    /// Same as [`begin_reverse_order`](Self::begin_reverse_order).
    #[inline]
    pub fn reverse_order(&self) -> ReverseOrder<'_, T> {
        self.begin_reverse_order()
    }

    /// Returns a cursor at the last added element.
    #[inline]
    pub fn begin_reverse_order(&self) -> ReverseOrder<'_, T> {
        ReverseOrder::new(&self.elements)
    }

    /// Returns the end marker of the reverse order.
    #[inline]
    pub fn end_reverse_order(&self) -> ReverseOrder<'_, T> {
        ReverseOrder::end(&self.elements)
    }
}

impl<T: Clone> Container<T> {
    /// Returns an iterator spiralling out from the middle element.
    ///
    /// Same as [`begin_middle_out_order`](Self::begin_middle_out_order).
    pub fn middle_out_order(&self) -> MiddleOutOrder<T> {
        self.begin_middle_out_order()
    }

    /// Returns a middle-out cursor over a copy of the current elements.
    pub fn begin_middle_out_order(&self) -> MiddleOutOrder<T> {
        MiddleOutOrder::new(&self.elements)
    }

    /// Returns the end marker of the middle-out order.
    ///
    /// Takes a fresh copy; prefer [`Cursor::to_end`] on an existing cursor.
    ///
    /// [`Cursor::to_end`]: crate::Cursor::to_end
    pub fn end_middle_out_order(&self) -> MiddleOutOrder<T> {
        crate::Cursor::to_end(&self.begin_middle_out_order())
    }
}

impl<T: Clone + Ord> Container<T> {
    /// Returns an iterator over a sorted copy, smallest first.
    ///
    /// Same as [`begin_ascending_order`](Self::begin_ascending_order).
    pub fn ascending_order(&self) -> AscendingOrder<T> {
        self.begin_ascending_order()
    }

    /// Returns a cursor at the smallest element of a sorted copy.
    pub fn begin_ascending_order(&self) -> AscendingOrder<T> {
        AscendingOrder::new(&self.elements)
    }

    /// Returns the end marker of the ascending order.
    ///
    /// Takes and sorts a fresh copy; prefer [`Cursor::to_end`] on an
    /// existing cursor.
    ///
    /// [`Cursor::to_end`]: crate::Cursor::to_end
    pub fn end_ascending_order(&self) -> AscendingOrder<T> {
        crate::Cursor::to_end(&self.begin_ascending_order())
    }

    /// Returns an iterator over a sorted copy, largest first.
    ///
    /// Same as [`begin_descending_order`](Self::begin_descending_order).
    pub fn descending_order(&self) -> DescendingOrder<T> {
        self.begin_descending_order()
    }

    /// Returns a cursor at the largest element of a sorted copy.
    pub fn begin_descending_order(&self) -> DescendingOrder<T> {
        DescendingOrder::new(&self.elements)
    }

    /// Returns the end marker of the descending order.
    pub fn end_descending_order(&self) -> DescendingOrder<T> {
        crate::Cursor::to_end(&self.begin_descending_order())
    }

    /// Returns an iterator alternating smallest and largest remaining
    /// elements.
    ///
    /// Same as [`begin_side_cross_order`](Self::begin_side_cross_order).
    pub fn side_cross_order(&self) -> SideCrossOrder<T> {
        self.begin_side_cross_order()
    }

    /// Returns a side-cross cursor over a sorted copy.
    pub fn begin_side_cross_order(&self) -> SideCrossOrder<T> {
        SideCrossOrder::new(&self.elements)
    }

    /// Returns the end marker of the side-cross order.
    pub fn end_side_cross_order(&self) -> SideCrossOrder<T> {
        crate::Cursor::to_end(&self.begin_side_cross_order())
    }

    /// Returns a view in the traversal order chosen at runtime.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use order_views::{Container, TraversalOrder};
    ///
    /// let container: Container<i32> = [7, 15, 6, 1, 2].into_iter().collect();
    /// let reversed: Vec<i32> = container.traverse(TraversalOrder::Reverse).collect();
    /// assert_eq!(reversed, vec![2, 1, 6, 15, 7]);
    /// ```
    pub fn traverse(&self, order: TraversalOrder) -> OrderView<'_, T> {
        match order {
            TraversalOrder::Insertion => OrderView::Insertion(self.begin_order()),
            TraversalOrder::Reverse => OrderView::Reverse(self.begin_reverse_order()),
            TraversalOrder::Ascending => OrderView::Ascending(self.begin_ascending_order()),
            TraversalOrder::Descending => OrderView::Descending(self.begin_descending_order()),
            TraversalOrder::SideCross => OrderView::SideCross(self.begin_side_cross_order()),
            TraversalOrder::MiddleOut => OrderView::MiddleOut(self.begin_middle_out_order()),
        }
    }
}

impl<T: PartialEq> Container<T> {
    /// Removes every occurrence of `value` and returns how many there were.
    ///
    /// The remaining elements keep their relative order.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError::ElementNotFound`] if `value` does not occur
    /// in the container. The container is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use order_views::Container;
    ///
    /// let mut container: Container<i32> = [1, 2, 1, 3].into_iter().collect();
    /// assert_eq!(container.remove(&1), Ok(2));
    /// assert_eq!(container.as_slice(), &[2, 3]);
    /// assert!(container.remove(&1).is_err());
    /// ```
    pub fn remove(&mut self, value: &T) -> Result<usize, ContainerError> {
        let original_size = self.elements.len();
        self.elements.retain(|element| element != value);
        let removed = original_size - self.elements.len();

        if removed == 0 {
            tracing::debug!(size = original_size, "remove found no matching element");
            return Err(ContainerError::ElementNotFound);
        }

        tracing::debug!(removed, size = self.elements.len(), "removed all occurrences");
        Ok(removed)
    }

    /// Returns `true` if `value` occurs in the container.
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.elements.contains(value)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Container<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Container<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T> From<Vec<T>> for Container<T> {
    #[inline]
    fn from(elements: Vec<T>) -> Self {
        Self { elements }
    }
}

impl<T> Extend<T> for Container<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

impl<'a, T: Clone + 'a> Extend<&'a T> for Container<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for element in iter {
            self.add(element.clone());
        }
    }
}

impl<'a, T> IntoIterator for &'a Container<T> {
    type Item = &'a T;
    type IntoIter = InsertionOrder<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.begin_order()
    }
}

impl<T> IntoIterator for Container<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Container<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Container<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Container<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct ContainerVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> ContainerVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for ContainerVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = Container<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut container = Container::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            container.add(element);
        }
        Ok(container)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Container<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(ContainerVisitor::new())
    }
}

static_assertions::assert_impl_all!(Container<i32>: Send, Sync, Clone, Default);

// =============================================================================
// Tests
// =============================================================================

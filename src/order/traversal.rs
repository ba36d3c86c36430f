//! Traversal orders selected at runtime.

use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

use super::{
    AscendingOrder, Cursor, DescendingOrder, InsertionOrder, MiddleOutOrder, ReverseOrder,
    SideCrossOrder,
};
use crate::container::ContainerError;

/// Names one of the six traversal orders of a [`Container`].
///
/// # Examples
///
/// ```rust
/// use order_views::TraversalOrder;
///
/// let order: TraversalOrder = "side-cross".parse().unwrap();
/// assert_eq!(order, TraversalOrder::SideCross);
/// assert_eq!(order.to_string(), "side-cross");
/// assert!("zigzag".parse::<TraversalOrder>().is_err());
/// ```
///
/// [`Container`]: crate::Container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// The order elements were added.
    Insertion,
    /// Insertion order, back to front.
    Reverse,
    /// Sorted by `<`.
    Ascending,
    /// Sorted by `>`.
    Descending,
    /// Smallest, largest, second smallest, second largest, ...
    SideCross,
    /// Middle element first, then its neighbours moving outwards.
    MiddleOut,
}

impl TraversalOrder {
    /// Every traversal order.
    pub const ALL: [Self; 6] = [
        Self::Insertion,
        Self::Reverse,
        Self::Ascending,
        Self::Descending,
        Self::SideCross,
        Self::MiddleOut,
    ];

    /// Returns the kebab-case name of the order.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Insertion => "insertion",
            Self::Reverse => "reverse",
            Self::Ascending => "ascending",
            Self::Descending => "descending",
            Self::SideCross => "side-cross",
            Self::MiddleOut => "middle-out",
        }
    }

    /// Returns `true` for orders that copy the elements when the view is
    /// created.
    pub const fn is_snapshot(self) -> bool {
        !matches!(self, Self::Insertion | Self::Reverse)
    }
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

impl FromStr for TraversalOrder {
    type Err = ContainerError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let normalized = name.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "insertion" | "order" | "base" => Ok(Self::Insertion),
            "reverse" => Ok(Self::Reverse),
            "ascending" => Ok(Self::Ascending),
            "descending" => Ok(Self::Descending),
            "side-cross" => Ok(Self::SideCross),
            "middle-out" => Ok(Self::MiddleOut),
            _ => Err(ContainerError::UnknownOrder(name.to_string())),
        }
    }
}

/// A cursor in any of the six traversal orders.
///
/// `OrderView` is what [`Container::traverse`] returns. It yields owned
/// elements for every order; the live orders clone out of the container.
///
/// # Examples
///
/// ```rust
/// use order_views::{Container, TraversalOrder};
///
/// let container: Container<i32> = [7, 15, 6, 1, 2].into_iter().collect();
/// for order in TraversalOrder::ALL {
///     let view = container.traverse(order);
///     assert_eq!(view.order(), order);
///     assert_eq!(view.len(), 5);
/// }
/// ```
///
/// [`Container::traverse`]: crate::Container::traverse
#[derive(Debug, Clone)]
pub enum OrderView<'a, T> {
    /// See [`InsertionOrder`].
    Insertion(InsertionOrder<'a, T>),
    /// See [`ReverseOrder`].
    Reverse(ReverseOrder<'a, T>),
    /// See [`AscendingOrder`].
    Ascending(AscendingOrder<T>),
    /// See [`DescendingOrder`].
    Descending(DescendingOrder<T>),
    /// See [`SideCrossOrder`].
    SideCross(SideCrossOrder<T>),
    /// See [`MiddleOutOrder`].
    MiddleOut(MiddleOutOrder<T>),
}

impl<T> OrderView<'_, T> {
    /// Returns the traversal order of this view.
    pub const fn order(&self) -> TraversalOrder {
        match self {
            Self::Insertion(_) => TraversalOrder::Insertion,
            Self::Reverse(_) => TraversalOrder::Reverse,
            Self::Ascending(_) => TraversalOrder::Ascending,
            Self::Descending(_) => TraversalOrder::Descending,
            Self::SideCross(_) => TraversalOrder::SideCross,
            Self::MiddleOut(_) => TraversalOrder::MiddleOut,
        }
    }
}

impl<T> Cursor for OrderView<'_, T> {
    type Item = T;

    fn current(&self) -> Option<&T> {
        match self {
            Self::Insertion(cursor) => cursor.current(),
            Self::Reverse(cursor) => cursor.current(),
            Self::Ascending(cursor) => cursor.current(),
            Self::Descending(cursor) => cursor.current(),
            Self::SideCross(cursor) => cursor.current(),
            Self::MiddleOut(cursor) => cursor.current(),
        }
    }

    fn advance(&mut self) -> &mut Self {
        match self {
            Self::Insertion(cursor) => {
                cursor.advance();
            }
            Self::Reverse(cursor) => {
                cursor.advance();
            }
            Self::Ascending(cursor) => {
                cursor.advance();
            }
            Self::Descending(cursor) => {
                cursor.advance();
            }
            Self::SideCross(cursor) => {
                cursor.advance();
            }
            Self::MiddleOut(cursor) => {
                cursor.advance();
            }
        }
        self
    }

    fn offset(&self) -> usize {
        match self {
            Self::Insertion(cursor) => cursor.offset(),
            Self::Reverse(cursor) => cursor.offset(),
            Self::Ascending(cursor) => cursor.offset(),
            Self::Descending(cursor) => cursor.offset(),
            Self::SideCross(cursor) => cursor.offset(),
            Self::MiddleOut(cursor) => cursor.offset(),
        }
    }

    fn total(&self) -> usize {
        match self {
            Self::Insertion(cursor) => cursor.total(),
            Self::Reverse(cursor) => cursor.total(),
            Self::Ascending(cursor) => cursor.total(),
            Self::Descending(cursor) => cursor.total(),
            Self::SideCross(cursor) => cursor.total(),
            Self::MiddleOut(cursor) => cursor.total(),
        }
    }

    fn to_end(&self) -> Self {
        match self {
            Self::Insertion(cursor) => Self::Insertion(cursor.to_end()),
            Self::Reverse(cursor) => Self::Reverse(cursor.to_end()),
            Self::Ascending(cursor) => Self::Ascending(cursor.to_end()),
            Self::Descending(cursor) => Self::Descending(cursor.to_end()),
            Self::SideCross(cursor) => Self::SideCross(cursor.to_end()),
            Self::MiddleOut(cursor) => Self::MiddleOut(cursor.to_end()),
        }
    }
}

impl<T: Clone> Iterator for OrderView<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Insertion(cursor) => cursor.next().cloned(),
            Self::Reverse(cursor) => cursor.next().cloned(),
            Self::Ascending(cursor) => cursor.next(),
            Self::Descending(cursor) => cursor.next(),
            Self::SideCross(cursor) => cursor.next(),
            Self::MiddleOut(cursor) => cursor.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total().saturating_sub(self.offset());
        (remaining, Some(remaining))
    }
}

impl<T: Clone> ExactSizeIterator for OrderView<'_, T> {}

impl<T: Clone> FusedIterator for OrderView<'_, T> {}

/// Views are equal when they traverse the same order and sit at the same
/// offset.
impl<T> PartialEq for OrderView<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.order() == other.order() && self.offset() == other.offset()
    }
}

impl<T> Eq for OrderView<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("insertion", TraversalOrder::Insertion)]
    #[case("order", TraversalOrder::Insertion)]
    #[case("base", TraversalOrder::Insertion)]
    #[case("reverse", TraversalOrder::Reverse)]
    #[case("Ascending", TraversalOrder::Ascending)]
    #[case(" descending ", TraversalOrder::Descending)]
    #[case("side_cross", TraversalOrder::SideCross)]
    #[case("middle-out", TraversalOrder::MiddleOut)]
    fn test_parse_order(#[case] name: &str, #[case] expected: TraversalOrder) {
        assert_eq!(name.parse::<TraversalOrder>(), Ok(expected));
    }

    #[rstest]
    fn test_parse_unknown_order() {
        assert_eq!(
            "spiral".parse::<TraversalOrder>(),
            Err(ContainerError::UnknownOrder("spiral".to_string()))
        );
    }

    #[rstest]
    fn test_name_round_trips_through_parse() {
        for order in TraversalOrder::ALL {
            assert_eq!(order.name().parse::<TraversalOrder>(), Ok(order));
        }
    }

    #[rstest]
    fn test_is_snapshot() {
        assert!(!TraversalOrder::Insertion.is_snapshot());
        assert!(!TraversalOrder::Reverse.is_snapshot());
        assert!(TraversalOrder::Ascending.is_snapshot());
        assert!(TraversalOrder::MiddleOut.is_snapshot());
    }
}

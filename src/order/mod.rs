//! Traversal orders and their cursors.
//!
//! Every traversal order has its own cursor type, and every cursor
//! implements both [`Cursor`] (explicit begin/end style stepping) and
//! [`Iterator`]:
//!
//! - [`InsertionOrder`]: live view, insertion order
//! - [`ReverseOrder`]: live view, insertion order back to front
//! - [`AscendingOrder`]: sorted snapshot, `<`
//! - [`DescendingOrder`]: sorted snapshot, `>`
//! - [`SideCrossOrder`]: sorted snapshot, alternating smallest and largest
//! - [`MiddleOutOrder`]: snapshot, spiralling outwards from the middle
//!
//! [`OrderView`] wraps all six for orders chosen at runtime through
//! [`TraversalOrder`].
//!
//! # Live Views and Snapshots
//!
//! Live views borrow the container, so it cannot be mutated while they are
//! in use:
//!
//! ```compile_fail
//! use order_views::Container;
//!
//! let mut container: Container<i32> = (1..=3).collect();
//! let cursor = container.begin_order();
//! container.add(4);
//! drop(cursor);
//! ```
//!
//! Snapshots own their data and keep yielding what the container held when
//! they were created:
//!
//! ```rust
//! use order_views::Container;
//!
//! let mut container: Container<i32> = [3, 1, 2].into_iter().collect();
//! let ascending = container.begin_ascending_order();
//! container.add(0);
//!
//! assert_eq!(ascending.collect::<Vec<_>>(), vec![1, 2, 3]);
//! assert_eq!(container.ascending_order().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
//! ```
//!
//! # End Detection
//!
//! Cursors compare equal by position only, never by the element they point
//! at, so duplicates cannot end a traversal early:
//!
//! ```rust
//! use order_views::{Container, Cursor};
//!
//! let container: Container<i32> = [5, 5, 5].into_iter().collect();
//! let mut cursor = container.begin_ascending_order();
//! let end = cursor.to_end();
//!
//! let mut visited = 0;
//! while cursor != end {
//!     cursor.advance();
//!     visited += 1;
//! }
//! assert_eq!(visited, 3);
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer used to share snapshots between a
/// cursor, its clones and its end marker.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// and snapshot cursors are `Send + Sync` whenever the element type is.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod ascending;
mod cursor;
mod descending;
mod insertion;
mod middle_out;
mod reverse;
mod side_cross;
mod snapshot;
mod traversal;

pub use ascending::AscendingOrder;
pub use cursor::Cursor;
pub use descending::DescendingOrder;
pub use insertion::InsertionOrder;
pub use middle_out::MiddleOutOrder;
pub use middle_out::middle_out_indices;
pub use reverse::ReverseOrder;
pub use side_cross::SideCrossOrder;
pub use traversal::OrderView;
pub use traversal::TraversalOrder;

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(AscendingOrder<i32>: Send, Sync);
#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(DescendingOrder<i32>: Send, Sync);
#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(SideCrossOrder<i32>: Send, Sync);
#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(MiddleOutOrder<i32>: Send, Sync);

static_assertions::assert_impl_all!(InsertionOrder<'static, i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(ReverseOrder<'static, i32>: Send, Sync, Clone);

// =============================================================================
// Tests
// =============================================================================

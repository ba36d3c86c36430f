//! # order-views
//!
//! A generic, in-memory ordered container with six traversal orders.
//!
//! ## Overview
//!
//! [`Container`] keeps its elements in insertion order and hands out
//! cursors that walk them in one of six orders:
//!
//! - **Insertion**: the order elements were added
//! - **Reverse**: insertion order, back to front
//! - **Ascending** / **Descending**: sorted by `<` / `>`
//! - **Side-cross**: smallest, largest, second smallest, second largest, ...
//! - **Middle-out**: the middle element, then alternately its left and right
//!   neighbours moving outwards
//!
//! Insertion and reverse cursors borrow the live elements. The four derived
//! orders are snapshots: they are computed once when the cursor is created
//! and never observe later mutation of the container.
//!
//! ## Feature Flags
//!
//! - `arc`: share snapshots through `Arc` instead of `Rc`, making snapshot
//!   cursors `Send + Sync`
//! - `serde`: `Serialize`/`Deserialize` for [`Container`]
//!
//! ## Example
//!
//! ```rust
//! use order_views::prelude::*;
//!
//! let container: Container<i32> = [7, 15, 6, 1, 2].into_iter().collect();
//!
//! assert_eq!(container.to_string(), "[7, 15, 6, 1, 2]");
//! assert_eq!(container.side_cross_order().collect::<Vec<_>>(), vec![1, 15, 2, 7, 6]);
//! assert_eq!(container.middle_out_order().collect::<Vec<_>>(), vec![6, 15, 1, 7, 2]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the container, its error type and every cursor.
///
/// # Usage
///
/// ```rust
/// use order_views::prelude::*;
/// ```
pub mod prelude {
    pub use crate::container::*;
    pub use crate::order::*;
}

pub mod container;
pub mod order;

pub use container::{Container, ContainerError};
pub use order::{Cursor, OrderView, TraversalOrder};

//! Error types for the container.

use thiserror::Error;

/// Represents errors that can occur when working with a [`Container`].
///
/// # Examples
///
/// ```rust
/// use order_views::{Container, ContainerError};
///
/// let mut container = Container::new();
/// container.add(1);
///
/// assert_eq!(container.remove(&2), Err(ContainerError::ElementNotFound));
/// assert_eq!(
///     ContainerError::ElementNotFound.to_string(),
///     "element not found in container"
/// );
/// ```
///
/// [`Container`]: super::Container
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContainerError {
    /// `remove` was asked for a value with no occurrence in the container.
    #[error("element not found in container")]
    ElementNotFound,
    /// A traversal order name could not be parsed.
    #[error("unknown traversal order: {0}")]
    UnknownOrder(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_element_not_found_display() {
        assert_eq!(
            format!("{}", ContainerError::ElementNotFound),
            "element not found in container"
        );
    }

    #[rstest]
    fn test_unknown_order_display() {
        let error = ContainerError::UnknownOrder("zigzag".to_string());
        assert_eq!(format!("{error}"), "unknown traversal order: zigzag");
    }

    #[rstest]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&ContainerError::ElementNotFound);
    }
}

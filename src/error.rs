//! Error types shared by the container and stack modules.

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors raised by `Container` and `Stack` operations.
///
/// A failed operation never mutates the structure it was called on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ContainerError {
  /// Positional access outside of `[0, count)`.
  #[error("index {index} out of range for container of {count} items")]
  IndexOutOfRange {
    /// The requested position.
    index: usize,
    /// The number of items held when the access was attempted.
    count: usize,
  },

  /// Removal from a stack with no items.
  #[error("pop from an empty stack")]
  EmptyStack,
}

/// Result alias for container operations.
pub type Result<T> = ::std::result::Result<T, ContainerError>;

//! The `Container` contract
//!
//! A `Container` is a mutable, ordered collection of homogeneous items
//! that can be appended to, counted, and read by position. The item type
//! is an associated type, so generic code can require two containers to
//! hold the same kind of item (see `all_items_match`).
//!
//! `Vec<T>` implements `Container` directly, and every stack in
//! the `stack` module implements it as well.

mod algorithms;

pub use self::algorithms::{all_items_match, find_index};

use crate::error::{ContainerError, Result};

/// An ordered, appendable, indexable collection.
pub trait Container {
  /// The type of item held by the container.
  type Item;

  /// Adds an item after all existing items. Always succeeds.
  fn append(&mut self, item: Self::Item);

  /// Returns the number of items currently held.
  fn count(&self) -> usize;

  /// Returns the item at `index`, counted from the first item appended.
  ///
  /// Fails with `ContainerError::IndexOutOfRange` if `index >= count()`.
  fn at(&self, index: usize) -> Result<&Self::Item>;

  /// Predicate that tests if the container holds no items.
  fn is_empty(&self) -> bool {
    self.count() == 0
  }
}

/// Builds the error returned by `at` for an out-of-range `index`.
pub(crate) fn out_of_range(index: usize, count: usize) -> ContainerError {
  ContainerError::IndexOutOfRange {
    index: index,
    count: count,
  }
}

impl<T> Container for Vec<T> {
  type Item = T;

  fn append(&mut self, item: T) {
    self.push(item)
  }

  fn count(&self) -> usize {
    self.len()
  }

  fn at(&self, index: usize) -> Result<&T> {
    self.get(index).ok_or_else(|| out_of_range(index, self.len()))
  }
}

//! Stack implementations
//!
//! This module provides two sequential stacks: an array-based `ArrayStack`
//! and a linked-list-based `ListStack`. The `ListStack` is based on
//! [this blog post](http://cglab.ca/~abeinges/blah/too-many-lists/book/).
//!
//! Every `Stack<T>` is also a `Container<Item = T>`. Appending is the same
//! as pushing, and positions are counted from the bottom of the stack, so
//! `at(0)` is the first item pushed that has not been popped.

mod array;
mod list;

pub use self::array::{ArrayStack, IntStack};
pub use self::list::ListStack;

use crate::container::{out_of_range, Container};
use crate::error::{ContainerError, Result};

/// The `Stack<T>` abstract data type.
pub trait Stack<T>: Container<Item = T> {
  /// Creates a new, empty `Stack<T>`.
  fn new() -> Self;

  /// Pushes an element onto the stack.
  fn push(&mut self, elem: T);

  /// Pops the most recently pushed element from the stack.
  ///
  /// Fails with `ContainerError::EmptyStack`, leaving the stack untouched,
  /// if there is nothing to pop.
  fn pop(&mut self) -> Result<T>;

  /// Returns the top element without removing it, if there is one.
  fn top_item(&self) -> Option<&T>;

  /// Returns the number of elements in the stack.
  fn size(&self) -> usize {
    self.count()
  }
}

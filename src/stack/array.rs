use std::iter::FromIterator;
use std::slice;
use std::vec;

use log::trace;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::*;

/// A simple array-based `Stack<T>`. Uses Rust's `Vec<T>`, with the top of
/// the stack at the end of the vector.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ArrayStack<T> {
  elems: Vec<T>,
}

/// The source's `IntStack`: an `ArrayStack` fixed to `i32` items.
pub type IntStack = ArrayStack<i32>;

impl<T> ArrayStack<T> {
  /// Creates an empty stack with room for at least `capacity` items.
  /// The stack still grows past `capacity` on demand.
  pub fn with_capacity(capacity: usize) -> Self {
    Self {
      elems: Vec::with_capacity(capacity),
    }
  }

  /// Iterates from the bottom of the stack to the top.
  pub fn iter(&self) -> slice::Iter<'_, T> {
    self.elems.iter()
  }
}

impl<T> Stack<T> for ArrayStack<T> {
  fn new() -> Self {
    Self {
      elems: Vec::new(),
    }
  }

  fn push(&mut self, elem: T) {
    self.elems.push(elem);
    trace!("array stack push, size {}", self.elems.len());
  }

  fn pop(&mut self) -> Result<T> {
    let elem = self.elems.pop().ok_or(ContainerError::EmptyStack)?;
    trace!("array stack pop, size {}", self.elems.len());
    Ok(elem)
  }

  fn top_item(&self) -> Option<&T> {
    self.elems.last()
  }
}

impl<T> Container for ArrayStack<T> {
  type Item = T;

  fn append(&mut self, item: T) {
    self.push(item)
  }

  fn count(&self) -> usize {
    self.elems.len()
  }

  fn at(&self, index: usize) -> Result<&T> {
    self.elems.get(index).ok_or_else(|| out_of_range(index, self.elems.len()))
  }
}

impl<T> Default for ArrayStack<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> FromIterator<T> for ArrayStack<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    let mut stack = Self::new();
    stack.extend(iter);
    stack
  }
}

impl<T> Extend<T> for ArrayStack<T> {
  fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
    for elem in iter {
      self.push(elem);
    }
  }
}

impl<T> IntoIterator for ArrayStack<T> {
  type Item = T;
  type IntoIter = vec::IntoIter<T>;

  fn into_iter(self) -> Self::IntoIter {
    self.elems.into_iter()
  }
}

impl<'a, T> IntoIterator for &'a ArrayStack<T> {
  type Item = &'a T;
  type IntoIter = slice::Iter<'a, T>;

  fn into_iter(self) -> Self::IntoIter {
    self.elems.iter()
  }
}

use std::fmt;

use log::trace;

use super::*;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
  elem: T,
  next: Link<T>,
}

/// A list-based `Stack<T>`. The head of the list is the top of the stack,
/// so positional reads walk `count - 1 - index` links.
pub struct ListStack<T> {
  head: Link<T>,
  count: usize,
}

impl<T> Stack<T> for ListStack<T> {
  fn new() -> Self {
    Self {
      head: None,
      count: 0,
    }
  }

  fn push(&mut self, elem: T) {
    let new_node = Box::new(Node {
      elem: elem,
      next: self.head.take(),
    });

    self.head = Some(new_node);
    self.count += 1;
    trace!("list stack push, size {}", self.count);
  }

  fn pop(&mut self) -> Result<T> {
    let node = self.head.take().ok_or(ContainerError::EmptyStack)?;
    let node = *node;
    self.head = node.next;
    self.count -= 1;
    trace!("list stack pop, size {}", self.count);
    Ok(node.elem)
  }

  fn top_item(&self) -> Option<&T> {
    self.head.as_ref().map(|node| &node.elem)
  }
}

impl<T> Container for ListStack<T> {
  type Item = T;

  fn append(&mut self, item: T) {
    self.push(item)
  }

  fn count(&self) -> usize {
    self.count
  }

  fn at(&self, index: usize) -> Result<&T> {
    if index >= self.count {
      return Err(out_of_range(index, self.count));
    }

    let mut link = self.head.as_ref();
    for _ in 0..(self.count - 1 - index) {
      link = link.and_then(|node| node.next.as_ref());
    }

    link.map(|node| &node.elem)
      .ok_or_else(|| out_of_range(index, self.count))
  }
}

impl<T> Default for ListStack<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> fmt::Debug for ListStack<T>
where T: fmt::Debug {
  // Bottom to top, matching `ArrayStack`.
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    let mut elems = Vec::with_capacity(self.count);
    let mut link = self.head.as_ref();
    while let Some(node) = link {
      elems.push(&node.elem);
      link = node.next.as_ref();
    }
    elems.reverse();

    f.debug_struct("ListStack")
      .field("elems", &elems)
      .finish()
  }
}

impl<T> Drop for ListStack<T> {
  // Unlink iteratively; the default recursive drop overflows on long lists.
  fn drop(&mut self) {
    let mut link = self.head.take();
    while let Some(mut node) = link {
      link = node.next.take();
    }
  }
}

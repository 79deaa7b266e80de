//! Containers and stacks
//!
//! This crate provides the `Container` contract, an ordered collection of
//! homogeneous items that can be appended to, counted, and read by
//! position, along with LIFO stacks that satisfy it.
//!
//! Stack operations that cannot succeed return a `ContainerError` rather
//! than panicking: popping an empty stack yields
//! `ContainerError::EmptyStack`, and reading past the end of any container
//! yields `ContainerError::IndexOutOfRange`. A failed operation leaves the
//! structure unchanged.
//!
//! Mutations are reported at `trace` level through the `log` facade.

pub mod container;
pub mod error;
pub mod stack;

#[cfg(test)]
mod testing;

pub use crate::container::{all_items_match, find_index, Container};
pub use crate::error::{ContainerError, Result};
pub use crate::stack::{ArrayStack, IntStack, ListStack, Stack};

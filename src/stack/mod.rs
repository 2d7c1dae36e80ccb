//! LIFO stack used as the frontier of iterative search.
//!
//! Popping an empty stack returns [`Error::EmptyStack`] rather than `None`.
//!
//! ```
//! use rust_stonehenge::stack::Stack;
//!
//! let mut stack = Stack::new();
//! stack.push("hello");
//! stack.push("goodbye");
//!
//! assert_eq!(stack.pop().unwrap(), "goodbye");
//! assert_eq!(stack.peek(), Some(&"hello"));
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A last-in-first-out stack of items.
///
/// The end of the backing vector is the top of the stack.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Stack<T> {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty stack with room for `capacity` items.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Whether this stack contains no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items on the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Add an item to the top of the stack.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove and return the item at the top of the stack.
    ///
    /// Returns [`Error::EmptyStack`] if the stack is empty.
    pub fn pop(&mut self) -> Result<T> {
        self.items.pop().ok_or(Error::EmptyStack)
    }

    /// The item at the top of the stack, if any.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

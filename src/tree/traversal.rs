//! Explicit-stack in-order traversal
//!
//! No recursion and no parent pointers: the stack holds the ancestors whose
//! left subtrees are still being walked.
//!
//! States:
//!   descending  - `current` is set; push it and go left
//!   yielding    - `current` is empty, stack non-empty; pop, emit, go right
//!   exhausted   - both empty (terminal)

use super::node::{Link, Node};
use crate::{IterError, Iterable, PollIterator};

/// In-order iterator over a binary search tree.
///
/// Yields values in strictly ascending order. Holds shared borrows only, so
/// any number of `InOrder` cursors can walk the same tree independently.
#[derive(Debug)]
pub struct InOrder<'a, T> {
    /// Ancestors awaiting emission
    stack: Vec<&'a Node<T>>,

    /// Next subtree to descend into
    current: Option<&'a Node<T>>,
}

impl<'a, T> InOrder<'a, T> {
    /// Fresh cursor at the leftmost position of `root`.
    ///
    /// An absent tree produces an iterator that is exhausted from the start.
    pub fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: Vec::new(),
            current: root,
        }
    }

    #[cfg(test)]
    fn stack_depth(&self) -> usize {
        self.stack.len()
    }

    #[inline]
    fn is_exhausted(&self) -> bool {
        self.stack.is_empty() && self.current.is_none()
    }
}

// Copies node references only; no `T: Clone` bound.
impl<'a, T> Clone for InOrder<'a, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            current: self.current,
        }
    }
}

impl<'a, T> Iterable<&'a T> for InOrder<'a, T> {
    type IntoIter = Self;

    fn iter(self) -> Self {
        self
    }
}

impl<'a, T> PollIterator<&'a T> for InOrder<'a, T> {
    fn has_next(&self) -> bool {
        !self.is_exhausted()
    }

    fn next(&mut self) -> Result<&'a T, IterError> {
        while !self.is_exhausted() {
            if let Some(node) = self.current {
                // Push, then descend left
                self.stack.push(node);
                self.current = node.left();
            } else if let Some(node) = self.stack.pop() {
                self.current = node.right();
                if self.is_exhausted() {
                    // Release the stack's allocation as soon as the walk ends.
                    self.stack = Vec::new();
                }
                return Ok(node.value());
            }
        }
        Err(IterError::Empty)
    }
}

impl<'a, T> Iterable<&'a T> for &'a Node<T> {
    type IntoIter = InOrder<'a, T>;

    fn iter(self) -> Self::IntoIter {
        InOrder::new(Some(self))
    }
}

/// A possibly absent tree. Method syntax resolves to `Option::iter`, so call
/// this as `Iterable::iter(&link)`.
impl<'a, T> Iterable<&'a T> for &'a Link<T> {
    type IntoIter = InOrder<'a, T>;

    fn iter(self) -> Self::IntoIter {
        InOrder::new(self.as_deref())
    }
}

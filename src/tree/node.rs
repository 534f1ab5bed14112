//! Owning binary-search-tree node
//!
//! Each node exclusively owns its children. There are no parent or shared
//! pointers; traversal state lives in the iterator's explicit stack instead.

use std::cmp::Ordering;

use tracing::trace;

/// Owning link to a subtree; `None` is the absent subtree.
pub type Link<T> = Option<Box<Node<T>>>;

/// Unbalanced binary-search-tree node.
///
/// `value` never changes once the node exists. Child links are rewritten by
/// later insertions that pass through the node.
#[derive(Debug)]
pub struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    /// Single-node subtree.
    pub fn leaf(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Stored value
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Left subtree, if any
    #[inline]
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// Right subtree, if any
    #[inline]
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Check if leaf (no children)
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl<T: Ord> Node<T> {
    /// Inserts `value` into the subtree rooted at `tree` and returns the root.
    ///
    /// An absent subtree yields a new single-node root, so callers must
    /// reassign their reference to the returned value. Equal values are
    /// dropped and the tree comes back unchanged.
    pub fn insert(tree: Link<T>, value: T) -> Box<Node<T>> {
        let Some(mut root) = tree else {
            return Box::new(Node::leaf(value));
        };
        let link = match value.cmp(&root.value) {
            Ordering::Less => &mut root.left,
            Ordering::Greater => &mut root.right,
            Ordering::Equal => {
                trace!("duplicate value dropped");
                return root;
            }
        };
        insert_link(link, value);
        root
    }
}

/// Walks owning links from `link` down to the insertion point.
///
/// Returns `false` when an equal value already exists. Iterative so that a
/// degenerate tree built from sorted input cannot exhaust the call stack.
pub(crate) fn insert_link<T: Ord>(mut link: &mut Link<T>, value: T) -> bool {
    while let Some(node) = link {
        link = match value.cmp(&node.value) {
            Ordering::Less => &mut node.left,
            Ordering::Greater => &mut node.right,
            Ordering::Equal => {
                trace!("duplicate value dropped");
                return false;
            }
        };
    }
    *link = Some(Box::new(Node::leaf(value)));
    true
}

impl<T> Drop for Node<T> {
    // Detach children onto a heap stack so dropping a deep chain does not
    // recurse once per level.
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node<T>>> = Vec::new();
        pending.extend(self.left.take());
        pending.extend(self.right.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

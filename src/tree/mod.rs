//! Unbalanced binary search tree with an explicit-stack in-order iterator
//!
//! Insertion never rebalances, so sorted input degenerates into a chain.
//! Nothing here recurses on tree height: insertion walks owning links,
//! traversal keeps its own stack, and dropping is iterative.

mod node;
mod traversal;

pub use node::{Link, Node};
pub use traversal::InOrder;

use std::cmp::Ordering;

use tracing::instrument;

use crate::Iterable;

/// Unbalanced binary search tree
///
/// Duplicates are silently dropped; there is no deletion.
#[derive(Debug)]
pub struct Bst<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Bst<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Bst<T> {
    /// Empty tree
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Root node, `None` for an empty tree
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Number of distinct values stored
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no value has been inserted
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// In-order iterator starting at the smallest value.
    ///
    /// Every call returns an independent cursor.
    pub fn iter(&self) -> InOrder<'_, T> {
        InOrder::new(self.root())
    }

    /// Number of nodes on the longest root-to-leaf path (0 when empty).
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack: Vec<(&Node<T>, usize)> = self.root().map(|n| (n, 1)).into_iter().collect();

        while let Some((node, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            stack.extend(node.left().map(|n| (n, depth + 1)));
            stack.extend(node.right().map(|n| (n, depth + 1)));
        }

        max_depth
    }
}

impl<T: Ord> Bst<T> {
    /// Inserts `value`, returning `false` if it was already present.
    #[instrument(level = "trace", skip_all)]
    pub fn insert(&mut self, value: T) -> bool {
        let inserted = node::insert_link(&mut self.root, value);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// True if `value` is stored in the tree
    pub fn contains(&self, value: &T) -> bool {
        let mut cursor = self.root();
        while let Some(node) = cursor {
            cursor = match value.cmp(node.value()) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return true,
            };
        }
        false
    }
}

impl<T: Ord> FromIterator<T> for Bst<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Bst::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for Bst<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> Iterable<&'a T> for &'a Bst<T> {
    type IntoIter = InOrder<'a, T>;

    fn iter(self) -> Self::IntoIter {
        Bst::iter(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PollIterator;

    fn drain(tree: &Bst<i64>) -> Vec<i64> {
        let mut out = Vec::new();
        let mut it = tree.iter();
        while it.has_next() {
            out.push(*it.next().unwrap());
        }
        out
    }

    #[test]
    fn test_reference_sequence() {
        let mut tree = Bst::new();
        for value in [3, 1, 5, 0, 6, 2, 4] {
            tree.insert(value);
        }
        assert_eq!(drain(&tree), vec![0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(tree.len(), 7);
        assert_eq!(tree.depth(), 3);
    }

    #[test]
    fn test_empty_tree() {
        let tree: Bst<i64> = Bst::new();
        assert!(tree.is_empty());
        assert_eq!(tree.depth(), 0);
        let mut it = tree.iter();
        assert!(!it.has_next());
        assert!(matches!(it.next(), Err(crate::IterError::Empty)));
    }

    #[test]
    fn test_duplicate_insert_is_dropped() {
        let mut tree: Bst<i64> = [5, 2, 8].into_iter().collect();
        assert!(!tree.insert(5));
        assert_eq!(tree.len(), 3);
        assert_eq!(drain(&tree), vec![2, 5, 8]);
    }

    #[test]
    fn test_contains() {
        let tree: Bst<i64> = [10, 4, 12, 7].into_iter().collect();
        assert!(tree.contains(&7));
        assert!(tree.contains(&12));
        assert!(!tree.contains(&5));
        assert!(!Bst::<i64>::new().contains(&0));
    }

    #[test]
    fn test_sorted_input_degenerates() {
        let tree: Bst<i64> = (0..10_000).collect();
        assert_eq!(tree.depth(), 10_000);
        assert_eq!(drain(&tree).len(), 10_000);
    }

    #[test]
    fn test_strings() {
        let tree: Bst<String> = ["pear", "apple", "fig"].into_iter().map(String::from).collect();
        let words: Vec<&str> = tree
            .iter()
            .into_std()
            .map(|w| w.unwrap().as_str())
            .collect();
        assert_eq!(words, ["apple", "fig", "pear"]);
    }
}

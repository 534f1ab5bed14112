//! # Poll-then-fetch iteration
//!
//! A small external-iterator protocol and two reference implementations.
//!
//! ## Protocol
//!
//! 1. **[`Iterable`]**: hands out fresh, independently positioned iterators
//! 2. **[`PollIterator`]**: `has_next` reports whether `next` will yield,
//!    `next` returns the element or an [`IterError`]
//! 3. **Identity law**: an iterator is iterable and returns itself
//!
//! Callers control pacing: one element at a time, interleaved with any other
//! work, at the price of two calls per element.
//!
//! ## Implementations
//!
//! - [`Bst`] / [`InOrder`]: unbalanced binary search tree walked in order
//!   with an explicit stack (no recursion, no parent pointers)
//! - [`LineIter`] / [`Scanner`]: buffered line reading with one line of
//!   read-ahead; read faults surface through `next`
//!
//! ## Usage Example
//!
//! ```
//! use polliter::{lines, Bst, PollIterator};
//!
//! let tree: Bst<i64> = [3, 1, 5, 0, 6, 2, 4].into_iter().collect();
//! let mut it = tree.iter();
//! let mut sorted = Vec::new();
//! while it.has_next() {
//!     sorted.push(*it.next()?);
//! }
//! assert_eq!(sorted, [0, 1, 2, 3, 4, 5, 6]);
//!
//! let mut it = lines("first\nsecond\n".as_bytes());
//! while it.has_next() {
//!     let line = it.next()?;
//!     assert!(!line.ends_with('\n'));
//! }
//! # Ok::<(), polliter::IterError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod error;    // Error channel
pub mod protocol; // Iterable / PollIterator
pub mod tree;     // BST and in-order traversal
pub mod lines;    // Line source and read-ahead iterator

// Re-exports for convenience
pub use error::IterError;
pub use lines::{lines, lines_with, LineIter, LineSource, ScanConfig, Scanner, DEFAULT_MAX_LINE_LEN};
pub use protocol::{from_std, FromStd, Iterable, PollIterator, Polled};
pub use tree::{Bst, InOrder, Node};

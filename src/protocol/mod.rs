//! Poll-then-fetch iteration protocol
//!
//! A caller obtains an iterator from an [`Iterable`] and alternates
//! [`PollIterator::has_next`] / [`PollIterator::next`] until `has_next`
//! reports `false`:
//!
//! ```
//! use polliter::{Bst, Iterable, PollIterator};
//!
//! let tree: Bst<i64> = [3, 1, 2].into_iter().collect();
//! let mut it = (&tree).iter();
//! let mut seen = Vec::new();
//! while it.has_next() {
//!     seen.push(*it.next().unwrap());
//! }
//! assert_eq!(seen, [1, 2, 3]);
//! ```
//!
//! One generic pair covers every element type; integer, string and
//! arbitrary-element iterators are instantiations of the same traits.

mod adapters;

pub use adapters::{from_std, FromStd, Polled};

use crate::IterError;

/// Source of fresh, independently positioned iterators.
///
/// Calling [`iter`](Iterable::iter) never mutates the container. Shared
/// references to containers implement this trait, so one container can hand
/// out any number of cursors.
pub trait Iterable<T> {
    /// Iterator produced by [`iter`](Iterable::iter).
    type IntoIter: PollIterator<T>;

    /// Returns an iterator positioned at the logical start of the sequence.
    fn iter(self) -> Self::IntoIter;
}

/// Stateful external iterator.
///
/// Every iterator is itself [`Iterable`] by identity: an owned iterator
/// returns itself, and `&mut it` returns the same reference, so
/// `std::ptr::eq((&mut it).iter(), &it)` holds.
///
/// Behavior is unspecified if the underlying container is modified while an
/// iterator over it is alive; the borrow checker rules this out for the
/// containers in this crate.
pub trait PollIterator<T>: Iterable<T, IntoIter = Self> + Sized {
    /// Returns whether calling [`next`](PollIterator::next) yields an element.
    ///
    /// Idempotent: repeated calls without an intervening `next` observe the
    /// same answer and perform no I/O.
    fn has_next(&self) -> bool;

    /// Returns the next element.
    ///
    /// Once `has_next` reports `false`, returns [`IterError::Empty`] unless the
    /// source has a more specific fault to report.
    fn next(&mut self) -> Result<T, IterError>;

    /// Adapts this iterator to [`std::iter::Iterator`], polling before each
    /// fetch.
    fn into_std(self) -> Polled<Self, T> {
        Polled::new(self)
    }
}

impl<'i, T, I: PollIterator<T>> Iterable<T> for &'i mut I {
    type IntoIter = &'i mut I;

    fn iter(self) -> Self::IntoIter {
        self
    }
}

impl<'i, T, I: PollIterator<T>> PollIterator<T> for &'i mut I {
    fn has_next(&self) -> bool {
        (**self).has_next()
    }

    fn next(&mut self) -> Result<T, IterError> {
        (**self).next()
    }
}

/// `None` is the "no iterator at all" state: never has a next element.
impl<T, I: PollIterator<T>> Iterable<T> for Option<I> {
    type IntoIter = Option<I>;

    fn iter(self) -> Self::IntoIter {
        self
    }
}

impl<T, I: PollIterator<T>> PollIterator<T> for Option<I> {
    fn has_next(&self) -> bool {
        self.as_ref().map_or(false, |it| it.has_next())
    }

    fn next(&mut self) -> Result<T, IterError> {
        match self {
            Some(it) => it.next(),
            None => Err(IterError::Empty),
        }
    }
}

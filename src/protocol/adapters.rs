//! Bridges between the poll protocol and `std::iter`

use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::{Iterable, PollIterator};
use crate::IterError;

/// [`std::iter::Iterator`] view of a [`PollIterator`].
///
/// Each `Iterator::next` polls `has_next` first and stops at the first
/// `false`, so the empty-iterator sentinel is never surfaced. Source faults
/// come through as `Err` items.
#[derive(Debug)]
pub struct Polled<I, T> {
    inner: I,
    _item: PhantomData<fn() -> T>,
}

impl<I: PollIterator<T>, T> Polled<I, T> {
    pub(crate) fn new(inner: I) -> Self {
        Self {
            inner,
            _item: PhantomData,
        }
    }

    /// Returns the wrapped iterator.
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I: PollIterator<T>, T> Iterator for Polled<I, T> {
    type Item = Result<T, IterError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.inner.has_next() {
            Some(self.inner.next())
        } else {
            None
        }
    }
}

impl<I: PollIterator<T>, T> FusedIterator for Polled<I, T> {}

/// [`PollIterator`] over any [`std::iter::Iterator`], using one element of
/// read-ahead so `has_next` never advances the source.
#[derive(Debug)]
pub struct FromStd<I: Iterator> {
    inner: I,
    pending: Option<I::Item>,
}

/// Wraps `iterable` in the poll protocol.
///
/// The first element is pulled eagerly.
pub fn from_std<I: IntoIterator>(iterable: I) -> FromStd<I::IntoIter> {
    let mut inner = iterable.into_iter();
    let pending = inner.next();
    FromStd { inner, pending }
}

impl<I: Iterator> Iterable<I::Item> for FromStd<I> {
    type IntoIter = Self;

    fn iter(self) -> Self {
        self
    }
}

impl<I: Iterator> PollIterator<I::Item> for FromStd<I> {
    fn has_next(&self) -> bool {
        self.pending.is_some()
    }

    fn next(&mut self) -> Result<I::Item, IterError> {
        let item = self.pending.take().ok_or(IterError::Empty)?;
        self.pending = self.inner.next();
        Ok(item)
    }
}

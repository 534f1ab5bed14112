//! Line iteration over buffered text streams
//!
//! [`LineIter`] adapts any [`LineSource`] to the poll protocol with one line
//! of read-ahead: the availability of the next line is settled before the
//! caller asks, so [`has_next`](PollIterator::has_next) never touches the
//! source. Faults travel through [`next`](PollIterator::next)'s error slot
//! instead of panicking.

mod config;
mod scanner;

pub use config::{ScanConfig, DEFAULT_MAX_LINE_LEN};
pub use scanner::Scanner;

use std::io::BufRead;
use std::mem;

use crate::{IterError, Iterable, PollIterator};

/// Line-oriented source consumed by [`LineIter`].
///
/// Where lines come from (file, socket, memory) is up to the implementor.
pub trait LineSource {
    /// Moves to the next line. Returns `false` at end of input or on a fault.
    fn advance(&mut self) -> bool;

    /// Text of the line most recently advanced to, terminator stripped.
    fn text(&self) -> &str;

    /// Fault recorded by the last failed [`advance`](LineSource::advance).
    ///
    /// `None` after a failed advance means plain end of input.
    fn take_fault(&mut self) -> Option<IterError>;
}

/// Outcome of the read-ahead
#[derive(Debug)]
enum ReadAhead {
    /// The source holds a line for the next `next` call
    Line,
    /// The source failed; the fault is reported once, then exhausted
    Fault(IterError),
    /// End of input, or the fault was already reported
    Exhausted,
}

/// Read-ahead line iterator
///
/// ```
/// use polliter::{lines, PollIterator};
///
/// let mut it = lines("a\nb\n".as_bytes());
/// assert_eq!(it.next().unwrap(), "a");
/// assert_eq!(it.next().unwrap(), "b");
/// assert!(!it.has_next());
/// ```
#[derive(Debug)]
pub struct LineIter<S> {
    source: S,
    ahead: ReadAhead,
}

impl<S: LineSource> LineIter<S> {
    /// Wraps `source`, advancing it once before returning.
    pub fn new(mut source: S) -> Self {
        let ahead = read_ahead(&mut source);
        Self { source, ahead }
    }

    /// Returns the wrapped source.
    pub fn into_source(self) -> S {
        self.source
    }
}

fn read_ahead<S: LineSource>(source: &mut S) -> ReadAhead {
    if source.advance() {
        return ReadAhead::Line;
    }
    match source.take_fault() {
        Some(fault) => ReadAhead::Fault(fault),
        None => ReadAhead::Exhausted,
    }
}

impl<S: LineSource> Iterable<String> for LineIter<S> {
    type IntoIter = Self;

    fn iter(self) -> Self {
        self
    }
}

impl<S: LineSource> PollIterator<String> for LineIter<S> {
    /// A pending fault counts as a next item, so the caller reaches it
    /// through `next`.
    fn has_next(&self) -> bool {
        !matches!(self.ahead, ReadAhead::Exhausted)
    }

    fn next(&mut self) -> Result<String, IterError> {
        match mem::replace(&mut self.ahead, ReadAhead::Exhausted) {
            ReadAhead::Line => {
                // Capture before advancing: the new read-ahead belongs to
                // the following call.
                let line = self.source.text().to_owned();
                self.ahead = read_ahead(&mut self.source);
                Ok(line)
            }
            ReadAhead::Fault(fault) => Err(fault),
            ReadAhead::Exhausted => Err(IterError::Empty),
        }
    }
}

/// Line iterator over `reader` with default [`ScanConfig`].
pub fn lines<R: BufRead>(reader: R) -> LineIter<Scanner<R>> {
    LineIter::new(Scanner::new(reader))
}

/// Line iterator over `reader` with explicit configuration.
pub fn lines_with<R: BufRead>(reader: R, config: ScanConfig) -> LineIter<Scanner<R>> {
    LineIter::new(Scanner::with_config(reader, config))
}

//! Error channel shared by every iterator in the crate

use thiserror::Error;

/// Errors returned from [`PollIterator::next`](crate::PollIterator::next).
///
/// Exhaustion and source faults are distinct variants, so callers never have
/// to infer one from the other.
#[derive(Debug, Error)]
pub enum IterError {
    /// `next` was called while `has_next` reported `false`.
    #[error("iter: empty iterator")]
    Empty,

    /// The underlying source failed while reading.
    #[error("read fault: {0}")]
    Io(#[from] std::io::Error),

    /// A line exceeded the configured limit before a terminator was found.
    #[error("line exceeds {limit} bytes")]
    LineTooLong {
        /// Configured maximum line length in bytes.
        limit: usize,
    },

    /// Configuration rejected at construction time.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl IterError {
    /// True for the empty-iterator sentinel.
    pub fn is_empty(&self) -> bool {
        matches!(self, IterError::Empty)
    }

    /// True when the error originates from the data source rather than from
    /// exhaustion.
    pub fn is_fault(&self) -> bool {
        matches!(self, IterError::Io(_) | IterError::LineTooLong { .. })
    }
}

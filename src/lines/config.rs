//! Scanner configuration

use crate::IterError;

/// Default line limit: 64 KiB.
pub const DEFAULT_MAX_LINE_LEN: usize = 64 * 1024;

/// Configuration for [`Scanner`](super::Scanner).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    /// Longest accepted line in bytes, terminator excluded.
    pub max_line_len: usize,

    /// Drop a `\r` that precedes the line terminator (or ends the input).
    pub strip_cr: bool,
}

impl ScanConfig {
    /// Create configuration with the given line limit.
    pub fn new(max_line_len: usize) -> Result<Self, IterError> {
        if max_line_len == 0 {
            return Err(IterError::InvalidConfiguration(
                "max_line_len must be greater than zero".into(),
            ));
        }
        Ok(Self {
            max_line_len,
            strip_cr: true,
        })
    }

    /// Override carriage-return stripping.
    pub fn with_strip_cr(mut self, strip_cr: bool) -> Self {
        self.strip_cr = strip_cr;
        self
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_line_len: DEFAULT_MAX_LINE_LEN,
            strip_cr: true,
        }
    }
}

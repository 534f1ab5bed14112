//! Buffered line source over any `BufRead`

use std::io::{self, BufRead, Read};

use tracing::{debug, trace};

use super::{LineSource, ScanConfig};
use crate::IterError;

/// Line-oriented scanner.
///
/// Splits on `\n`, optionally dropping a preceding `\r`. A final line
/// without a terminator is still produced. Read errors, invalid UTF-8 and
/// over-long lines are recorded as a fault, after which the scanner never
/// advances again.
#[derive(Debug)]
pub struct Scanner<R> {
    reader: R,
    config: ScanConfig,
    /// Raw bytes of the line being read
    buf: Vec<u8>,
    /// Most recently produced line, terminator stripped
    line: String,
    fault: Option<IterError>,
    finished: bool,
}

impl<R: BufRead> Scanner<R> {
    /// Scanner with default configuration
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, ScanConfig::default())
    }

    /// Scanner with explicit configuration
    pub fn with_config(reader: R, config: ScanConfig) -> Self {
        debug!(
            max_line_len = config.max_line_len,
            strip_cr = config.strip_cr,
            "line scanner created"
        );
        Self {
            reader,
            config,
            buf: Vec::new(),
            line: String::new(),
            fault: None,
            finished: false,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Returns the wrapped reader.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Reads one line into `self.line`; `Ok(false)` at end of input.
    fn read_line(&mut self) -> Result<bool, IterError> {
        let limit = self.config.max_line_len;
        self.buf.clear();

        // Room for the content plus "\r\n"
        let budget = limit.saturating_add(2) as u64;
        let read = (&mut self.reader).take(budget).read_until(b'\n', &mut self.buf)?;
        if read == 0 {
            return Ok(false);
        }

        let terminated = self.buf.last() == Some(&b'\n');
        if terminated {
            self.buf.pop();
        } else if read as u64 == budget {
            return Err(IterError::LineTooLong { limit });
        }
        if self.config.strip_cr && self.buf.last() == Some(&b'\r') {
            self.buf.pop();
        }
        if self.buf.len() > limit {
            return Err(IterError::LineTooLong { limit });
        }

        let text = std::str::from_utf8(&self.buf)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.line.push_str(text);
        Ok(true)
    }
}

impl<R: BufRead> LineSource for Scanner<R> {
    fn advance(&mut self) -> bool {
        self.line.clear();
        if self.finished {
            return false;
        }
        match self.read_line() {
            Ok(true) => true,
            Ok(false) => {
                trace!("end of input");
                self.finished = true;
                false
            }
            Err(fault) => {
                self.fault = Some(fault);
                self.finished = true;
                false
            }
        }
    }

    fn text(&self) -> &str {
        &self.line
    }

    fn take_fault(&mut self) -> Option<IterError> {
        self.fault.take()
    }
}

//! `io::Write` front end for foreign log lines

use crate::pipeline::SourceLocation;
use crate::{Logger, Severity};
use std::io;

/// Writer that re-levels every line it receives and logs it
///
/// Bytes are buffered until a `\n`; each complete line is one message. A
/// trailing partial line is logged on `flush` or drop. Blank lines are
/// skipped. Lines classified as Fatal terminate the process once dispatched.
#[derive(Debug)]
pub struct StreamAdapter<'a> {
    logger: &'a Logger,
    location: SourceLocation,
    pending: Vec<u8>,
}

impl<'a> StreamAdapter<'a> {
    /// Adapter attributing its lines to the code that created it
    #[track_caller]
    pub fn new(logger: &'a Logger) -> Self {
        Self::at(logger, SourceLocation::caller())
    }

    /// Adapter attributing its lines to `location`
    pub fn at(logger: &'a Logger, location: SourceLocation) -> Self {
        Self {
            logger,
            location,
            pending: Vec::new(),
        }
    }

    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    /// Forward one line; returns the level it was logged at
    ///
    /// Unlike `write`, this neither buffers, exits on Fatal nor hides sink
    /// errors.
    pub fn forward(&self, line: &[u8]) -> (Severity, crate::Result<()>) {
        let (level, result) = self.logger.absorb(line, &self.location);
        (level, result.map(|_| ()))
    }

    fn emit(&self, line: &[u8]) {
        if line.iter().all(u8::is_ascii_whitespace) {
            return;
        }
        let (level, _) = self.forward(line);
        if level == Severity::Fatal {
            crate::exit_fatal();
        }
    }
}

impl io::Write for StreamAdapter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pending.extend_from_slice(buf);
        while let Some(end) = self.pending.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.pending.drain(..=end).collect();
            self.emit(&line);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.pending.is_empty() {
            let line = std::mem::take(&mut self.pending);
            self.emit(&line);
        }
        Ok(())
    }
}

impl Drop for StreamAdapter<'_> {
    fn drop(&mut self) {
        let _ = io::Write::flush(self);
    }
}

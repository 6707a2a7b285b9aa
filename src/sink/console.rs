//! Console sink
//!
//! Fatal..Warning go to the error stream, Notice..Debug to standard output.

use crate::Severity;
use std::io::{self, Write};

type Stream = Box<dyn Write + Send>;

/// Console destination, always present
pub struct ConsoleSink {
    stdout: Stream,
    stderr: Stream,
}

impl ConsoleSink {
    /// Process stdout/stderr
    pub fn new() -> Self {
        Self::with_writers(io::stdout(), io::stderr())
    }

    /// Arbitrary writers standing in for stdout and stderr
    pub fn with_writers(
        stdout: impl Write + Send + 'static,
        stderr: impl Write + Send + 'static,
    ) -> Self {
        Self {
            stdout: Box::new(stdout),
            stderr: Box::new(stderr),
        }
    }

    pub fn write(&mut self, level: Severity, line: &str) -> io::Result<()> {
        let stream = if level.is_error_stream() {
            &mut self.stderr
        } else {
            &mut self.stdout
        };
        stream.write_all(line.as_bytes())?;
        stream.flush()
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct Shared(Arc<Mutex<Vec<u8>>>);

    impl Write for Shared {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Shared {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock()).into_owned()
        }
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_routes_by_severity() {
        let out = Shared::default();
        let err = Shared::default();
        let mut sink = ConsoleSink::with_writers(out.clone(), err.clone());

        for level in Severity::ALL {
            sink.write(level, level.as_str()).unwrap();
        }

        assert_eq!(err.text(), "FatalAlertCriticalErrorWarning");
        assert_eq!(out.text(), "NoticeInfoDebug");
    }

    #[test]
    fn test_write_error_is_returned() {
        let mut sink = ConsoleSink::with_writers(Shared::default(), Broken);
        assert!(sink.write(Severity::Info, "fine").is_ok());
        let err = sink.write(Severity::Error, "lost").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}

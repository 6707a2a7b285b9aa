//! Sink dispatcher
//!
//! Three destinations, each behind its own threshold:
//! - `console` - always present, split between stdout and stderr
//! - `syslog` - optional, active after a successful connection
//! - `file` - optional, active while a path is registered
//!
//! Every eligible sink is attempted even when an earlier one fails; the
//! failures of one dispatch are returned together.

mod console;
mod file;
pub mod syslog;

pub use console::ConsoleSink;
pub use file::FileSink;
pub use syslog::SyslogTransport;

use crate::error::{SinkFailure, SinkKind};
use crate::Severity;

/// Per-sink thresholds, all defaulting to the most verbose level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Thresholds {
    pub console: Severity,
    pub syslog: Severity,
    pub file: Severity,
}

impl Thresholds {
    /// False if `level` is more verbose than every threshold
    ///
    /// Only the thresholds are consulted, not whether syslog or file are active.
    pub fn any_accepts(&self, level: Severity) -> bool {
        level.passes(self.console) || level.passes(self.syslog) || level.passes(self.file)
    }
}

/// The three destinations of the pipeline
#[derive(Default)]
pub struct Sinks {
    pub console: ConsoleSink,
    pub syslog: Option<Box<dyn SyslogTransport>>,
    pub file: FileSink,
}

impl Sinks {
    /// Write one message to every sink whose threshold accepts `level`
    ///
    /// `line` is the collapsed console/file text, `rendered` the undecorated
    /// message handed to syslog.
    pub fn dispatch(
        &mut self,
        thresholds: &Thresholds,
        level: Severity,
        rendered: &str,
        line: &str,
    ) -> Vec<SinkFailure> {
        let mut failures = Vec::new();

        if level.passes(thresholds.console) {
            if let Err(source) = self.console.write(level, line) {
                failures.push(SinkFailure {
                    sink: SinkKind::Console,
                    source,
                });
            }
        }

        if level.passes(thresholds.syslog) {
            if let Some(syslog) = self.syslog.as_mut() {
                let payload = rendered.trim_end_matches('\n');
                if let Err(source) = syslog.send(level, payload) {
                    failures.push(SinkFailure {
                        sink: SinkKind::Syslog,
                        source,
                    });
                }
            }
        }

        if level.passes(thresholds.file) {
            if let Err(source) = self.file.write(line) {
                failures.push(SinkFailure {
                    sink: SinkKind::File,
                    source,
                });
            }
        }

        failures
    }
}

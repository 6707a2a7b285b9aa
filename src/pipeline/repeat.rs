//! Repeated-message collapsing
//!
//! A message identical to the previous one (same level, location and text)
//! is written as a single `.` with no newline, so a run of repeats reads as
//! `...` after the original line. The next distinct message starts with a
//! newline that closes the run.

use crate::constants::REPEAT_MARKER;

/// Collapsing state shared by every sink
#[derive(Debug, Default)]
pub struct RepeatCollapser {
    last: String,
    repeating: bool,
}

impl RepeatCollapser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide the console/file line for `rendered`
    ///
    /// `timestamp` is only used when the message differs from the previous
    /// one. Returns the exact bytes to write.
    pub fn collapse(&mut self, rendered: &str, timestamp: &str) -> String {
        if rendered == self.last {
            self.repeating = true;
            return REPEAT_MARKER.to_string();
        }

        let mut line = String::with_capacity(rendered.len() + timestamp.len() + 1);
        if self.repeating {
            line.push('\n');
            self.repeating = false;
        }
        line.push_str(timestamp);
        line.push_str(rendered);

        self.last.clear();
        self.last.push_str(rendered);
        line
    }

    /// True while the previous write was a repeat marker
    pub fn is_repeating(&self) -> bool {
        self.repeating
    }
}

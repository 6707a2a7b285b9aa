//! Source locations and message rendering

use crate::constants::UNKNOWN_FILE;
use crate::Severity;
use std::borrow::Cow;
use std::fmt;
use std::fmt::Write as _;

/// Call site a message is attributed to
///
/// `file!()` and `Location::caller()` give static paths; files reported by
/// foreign loggers may be borrowed for less than that and are copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub file: Cow<'static, str>,
    pub line: u32,
}

impl SourceLocation {
    pub fn new(file: impl Into<Cow<'static, str>>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }

    /// Location of the caller of a `#[track_caller]` function
    #[track_caller]
    #[inline]
    pub fn caller() -> Self {
        let loc = std::panic::Location::caller();
        Self::new(loc.file(), loc.line())
    }

    pub fn unknown() -> Self {
        Self::new(UNKNOWN_FILE, 0)
    }

    /// File name without its directories
    pub fn short_file(&self) -> &str {
        let file = self.file.as_ref();
        match file.rfind(['/', '\\']) {
            Some(idx) if idx + 1 < file.len() => &file[idx + 1..],
            _ => file,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.short_file(), self.line)
    }
}

/// Render `[Level] file:line - message\n`
///
/// This is the collapsing key and, minus the newline, the syslog payload.
pub fn render(level: Severity, location: &SourceLocation, message: fmt::Arguments<'_>) -> String {
    let mut text = String::with_capacity(64);
    // Writing into a String cannot fail
    let _ = writeln!(text, "[{}] {} - {}", level, location, message);
    text
}

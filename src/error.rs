//! Centralized error types for the logger
//!
//! All logger errors are represented by the `LogError` enum.
//! Use `Result<T>` as shorthand for `std::result::Result<T, LogError>`.

use std::fmt;
use std::path::PathBuf;

/// Sink a failed write was addressed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    Console,
    Syslog,
    File,
}

impl SinkKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            SinkKind::Console => "console",
            SinkKind::Syslog => "syslog",
            SinkKind::File => "file",
        }
    }
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single sink write that failed during dispatch
#[derive(Debug)]
pub struct SinkFailure {
    pub sink: SinkKind,
    pub source: std::io::Error,
}

impl fmt::Display for SinkFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.sink, self.source)
    }
}

/// All logger errors
#[derive(Debug)]
pub enum LogError {
    // === Dispatch ===
    /// One or more sinks failed to accept a message
    Sinks { failures: Vec<SinkFailure> },

    // === Syslog ===
    /// No syslog endpoint could be reached
    SyslogConnect {
        tag: String,
        source: std::io::Error,
    },
    /// Syslog tag cannot be sent on the wire
    SyslogTag { tag: String },

    // === Config ===
    /// Config file could not be read or written
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Config file is not valid TOML for `LogConfig`
    ConfigParse { path: PathBuf, reason: String },
    /// Invalid config value
    ConfigValidation { field: &'static str, reason: String },

    // === Capture ===
    /// The global tracing dispatcher is owned by someone else
    CaptureUnavailable { reason: String },

    // === Platform ===
    /// Feature not supported on this platform
    #[cfg(not(unix))]
    PlatformNotSupported { feature: &'static str },
}

impl LogError {
    /// Failures of a dispatch call, empty for every other variant
    pub fn sink_failures(&self) -> &[SinkFailure] {
        match self {
            Self::Sinks { failures } => failures,
            _ => &[],
        }
    }
}

impl std::error::Error for LogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SyslogConnect { source, .. } | Self::ConfigRead { source, .. } => Some(source),
            Self::Sinks { failures } => failures
                .first()
                .map(|f| &f.source as &(dyn std::error::Error + 'static)),
            _ => None,
        }
    }
}

impl fmt::Display for LogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sinks { failures } => {
                write!(f, "Failed to write to {} sink(s)", failures.len())?;
                for (i, failure) in failures.iter().enumerate() {
                    let sep = if i == 0 { ": " } else { ", " };
                    write!(f, "{}{}", sep, failure)?;
                }
                Ok(())
            }
            Self::SyslogConnect { tag, source } => {
                write!(f, "Cannot connect to syslog as '{}': {}", tag, source)
            }
            Self::SyslogTag { tag } => write!(f, "Invalid syslog tag: {:?}", tag),
            Self::ConfigRead { path, .. } => write!(f, "IO error: {}", path.display()),
            Self::ConfigParse { path, reason } => {
                write!(f, "Config parse error in {}: {}", path.display(), reason)
            }
            Self::ConfigValidation { field, reason } => {
                write!(f, "Invalid {}: {}", field, reason)
            }
            Self::CaptureUnavailable { reason } => {
                write!(f, "Cannot capture tracing output: {}", reason)
            }
            #[cfg(not(unix))]
            Self::PlatformNotSupported { feature } => {
                write!(f, "{} not supported on this platform", feature)
            }
        }
    }
}

/// Alias for Result with LogError
pub type Result<T> = std::result::Result<T, LogError>;

//! Severity levels (syslog-style, lower is more severe)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Message severity, ordered from most severe to most verbose
///
/// `Fatal < Debug`: a sink with threshold `t` accepts `level` iff `level <= t`.
#[repr(u8)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Severity {
    /// The process cannot continue and exits after dispatch
    Fatal = 0,
    /// Immediate action required
    Alert = 1,
    /// Critical conditions
    Critical = 2,
    /// Error conditions
    Error = 3,
    /// Warning conditions
    Warning = 4,
    /// Normal but significant condition
    Notice = 5,
    /// Informational
    Info = 6,
    /// Debug-level messages
    #[default]
    Debug = 7,
}

impl Severity {
    /// Every level, most severe first
    pub const ALL: [Severity; 8] = [
        Severity::Fatal,
        Severity::Alert,
        Severity::Critical,
        Severity::Error,
        Severity::Warning,
        Severity::Notice,
        Severity::Info,
        Severity::Debug,
    ];

    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Display name used inside rendered lines (`[Warning]`)
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Fatal => "Fatal",
            Severity::Alert => "Alert",
            Severity::Critical => "Critical",
            Severity::Error => "Error",
            Severity::Warning => "Warning",
            Severity::Notice => "Notice",
            Severity::Info => "Info",
            Severity::Debug => "Debug",
        }
    }

    /// Lowercase name used in config files and on the command line
    pub const fn config_name(self) -> &'static str {
        match self {
            Severity::Fatal => "fatal",
            Severity::Alert => "alert",
            Severity::Critical => "critical",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Notice => "notice",
            Severity::Info => "info",
            Severity::Debug => "debug",
        }
    }

    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Severity::Fatal),
            1 => Some(Severity::Alert),
            2 => Some(Severity::Critical),
            3 => Some(Severity::Error),
            4 => Some(Severity::Warning),
            5 => Some(Severity::Notice),
            6 => Some(Severity::Info),
            7 => Some(Severity::Debug),
            _ => None,
        }
    }

    #[inline]
    pub fn is_more_severe_than(self, other: Severity) -> bool {
        self < other
    }

    /// True if a sink with `threshold` accepts this level
    #[inline]
    pub fn passes(self, threshold: Severity) -> bool {
        self <= threshold
    }

    /// Console routing: Fatal..Warning go to stderr
    #[inline]
    pub fn is_error_stream(self) -> bool {
        self <= Severity::Warning
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a level name cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSeverityError {
    input: String,
}

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown level '{}' (expected fatal, alert, critical, error, warning, notice, info, debug or 0-7)",
            self.input
        )
    }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(n) = trimmed.parse::<u8>() {
            return Severity::from_u8(n).ok_or_else(|| ParseSeverityError {
                input: s.to_string(),
            });
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "fatal" | "emerg" | "emergency" => Ok(Severity::Fatal),
            "alert" => Ok(Severity::Alert),
            "critical" | "crit" => Ok(Severity::Critical),
            "error" | "err" => Ok(Severity::Error),
            "warning" | "warn" => Ok(Severity::Warning),
            "notice" => Ok(Severity::Notice),
            "info" => Ok(Severity::Info),
            "debug" => Ok(Severity::Debug),
            _ => Err(ParseSeverityError {
                input: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Severity {
    type Error = ParseSeverityError;

    fn try_from(value: String) -> Result<Self, ParseSeverityError> {
        value.parse()
    }
}

impl From<Severity> for &'static str {
    fn from(level: Severity) -> Self {
        level.config_name()
    }
}

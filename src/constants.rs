//! Crate-wide constants
//!
//! Centralized constants to avoid duplication and ensure consistency.

// =============================================================================
// Line format
// =============================================================================

/// `chrono` format of the timestamp that starts every console/file line
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S ";

/// Written instead of a line that repeats the previous one
pub const REPEAT_MARKER: &str = ".";

/// Location used when the caller's file and line are unknown
pub const UNKNOWN_FILE: &str = "???";

// =============================================================================
// Foreign stream
// =============================================================================

/// Leading severity token of a foreign log line
///
/// Any leading non-letters, a level name or abbreviation (optionally plural),
/// then at least one separator that is not a letter, digit, `_`, `/` or `-`.
pub const LEVEL_PREFIX_PATTERN: &str = concat!(
    r"(?i)^([^\p{L}\p{M}\d]*",
    r"(fatal|alert|critical|crit|error|err|e|warning|warn|w|notice|info|debug)s?",
    r"[^\p{L}\p{M}\d_/-]+)",
);

// =============================================================================
// Syslog
// =============================================================================

/// Tag used when a config file enables syslog without naming one
pub const DEFAULT_SYSLOG_TAG: &str = "fanlog";

// =============================================================================
// Process
// =============================================================================

/// Exit status after a Fatal message has been dispatched
pub const FATAL_EXIT_CODE: i32 = 1;

//! fanlog - leveled logging fanned out to console, syslog and a file
//!
//! One call goes through a single pipeline: threshold pre-check, per-second
//! rate limit, repeat collapsing, then every sink whose threshold accepts the
//! level. Lines written by other loggers (the process's `tracing` output, or
//! any `io::Write` user) can be re-leveled from their text prefix and fed
//! through the same pipeline.
//!
//! ```ignore
//! fanlog::init_file("/var/log/app.log", fanlog::Severity::Info);
//! fanlog::set_max_messages_per_second(100);
//! fanlog::log_warning!("{} retries left", n);
//! fanlog::logger().error("disk full");
//! ```

pub mod capture;
pub mod config;
pub mod constants;
pub mod error;
mod logger;
#[macro_use]
mod macros;
pub mod pipeline;
pub mod severity;
pub mod sink;

pub use capture::{Classified, LevelClassifier, PrefixClassifier, StreamAdapter};
pub use config::LogConfig;
pub use error::{LogError, Result, SinkFailure, SinkKind};
pub use logger::Logger;
pub use pipeline::{Outcome, SourceLocation};
pub use severity::Severity;
pub use sink::{ConsoleSink, SyslogTransport};

#[cfg(unix)]
pub use sink::syslog::SyslogFacility;

use std::path::PathBuf;
use std::sync::OnceLock;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Process-wide logger used by the free functions and macros
pub fn logger() -> &'static Logger {
    GLOBAL.get_or_init(Logger::new)
}

/// Terminate after a Fatal message
pub fn exit_fatal() -> ! {
    std::process::exit(constants::FATAL_EXIT_CODE)
}

// =============================================================================
// Process-wide configuration
// =============================================================================

/// Console threshold of the process-wide logger
pub fn set_console_level(level: Severity) {
    logger().set_console_level(level);
}

/// Syslog threshold of the process-wide logger
pub fn set_syslog_level(level: Severity) {
    logger().set_syslog_level(level);
}

/// Connect the process-wide logger to syslog as `tag`
pub fn init_syslog(tag: &str, level: Severity) -> Result<()> {
    logger().init_syslog(tag, level)
}

/// Append messages at `level` or more severe to `path`
pub fn init_file(path: impl Into<PathBuf>, level: Severity) {
    logger().init_file(path, level);
}

/// `0` disables rate limiting
pub fn set_max_messages_per_second(max: i64) {
    logger().set_max_messages_per_second(max);
}

/// Route `tracing` events through the process-wide logger
///
/// Fails if another global `tracing` subscriber was installed first.
pub fn capture_tracing() -> Result<()> {
    capture::capture_into(logger())
}

/// Send `tracing` events back to stdout
pub fn restore_tracing() -> Result<()> {
    capture::restore()
}

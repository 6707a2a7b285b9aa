//! Logger context
//!
//! `Logger` owns the whole pipeline behind one mutex. It can be created and
//! passed around explicitly; the free functions and macros at the crate root
//! use a lazily created process-wide instance (see [`crate::logger`]).

use crate::capture::{Classified, LevelClassifier, PrefixClassifier};
use crate::error::Result;
use crate::pipeline::{Outcome, Pipeline, SourceLocation};
use crate::sink::{ConsoleSink, Sinks, SyslogTransport};
use crate::Severity;
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[cfg(unix)]
use crate::sink::syslog::{SyslogFacility, UnixSyslog};

/// Leveled logger fanning out to console, syslog and file
pub struct Logger {
    pipeline: Mutex<Pipeline>,
    classifier: RwLock<Arc<dyn LevelClassifier>>,
}

impl Logger {
    /// Console on stdout/stderr, every threshold at Debug, no rate limit
    pub fn new() -> Self {
        Self::with_console(ConsoleSink::new())
    }

    /// Same defaults with a custom console destination
    pub fn with_console(console: ConsoleSink) -> Self {
        Self {
            pipeline: Mutex::new(Pipeline::new(Sinks {
                console,
                ..Default::default()
            })),
            classifier: RwLock::new(Arc::new(PrefixClassifier::default())),
        }
    }

    // === Dispatch ===

    /// Send one message through the pipeline
    ///
    /// Rate-limited and below-threshold messages are dropped silently. Sink
    /// errors are returned after every eligible sink has been attempted.
    /// Fatal messages are dispatched like any other; exiting is up to the
    /// caller (see [`Logger::fatal`]).
    pub fn log(
        &self,
        level: Severity,
        location: &SourceLocation,
        message: fmt::Arguments<'_>,
    ) -> Result<Outcome> {
        let mut pipeline = self.pipeline.lock();
        // Sampled under the lock so seconds reach the limiter in order
        let now = chrono::Local::now();
        pipeline.process(now, level, location, message)
    }

    /// Like [`Logger::log`], discarding sink errors
    pub fn emit(&self, level: Severity, location: &SourceLocation, message: fmt::Arguments<'_>) {
        let _ = self.log(level, location, message);
    }

    // === Per-level entry points ===

    /// Log at Fatal and terminate the process
    #[track_caller]
    pub fn fatal(&self, message: impl fmt::Display) -> ! {
        self.emit(
            Severity::Fatal,
            &SourceLocation::caller(),
            format_args!("{}", message),
        );
        crate::exit_fatal()
    }

    #[track_caller]
    pub fn alert(&self, message: impl fmt::Display) {
        self.emit(
            Severity::Alert,
            &SourceLocation::caller(),
            format_args!("{}", message),
        );
    }

    #[track_caller]
    pub fn critical(&self, message: impl fmt::Display) {
        self.emit(
            Severity::Critical,
            &SourceLocation::caller(),
            format_args!("{}", message),
        );
    }

    #[track_caller]
    pub fn error(&self, message: impl fmt::Display) {
        self.emit(
            Severity::Error,
            &SourceLocation::caller(),
            format_args!("{}", message),
        );
    }

    #[track_caller]
    pub fn warning(&self, message: impl fmt::Display) {
        self.emit(
            Severity::Warning,
            &SourceLocation::caller(),
            format_args!("{}", message),
        );
    }

    #[track_caller]
    pub fn notice(&self, message: impl fmt::Display) {
        self.emit(
            Severity::Notice,
            &SourceLocation::caller(),
            format_args!("{}", message),
        );
    }

    #[track_caller]
    pub fn info(&self, message: impl fmt::Display) {
        self.emit(
            Severity::Info,
            &SourceLocation::caller(),
            format_args!("{}", message),
        );
    }

    #[track_caller]
    pub fn debug(&self, message: impl fmt::Display) {
        self.emit(
            Severity::Debug,
            &SourceLocation::caller(),
            format_args!("{}", message),
        );
    }

    // === Foreign lines ===

    /// Infer the level of a foreign line and strip its level token
    pub fn classify<'a>(&self, line: &'a str) -> Classified<'a> {
        let classifier = Arc::clone(&self.classifier.read());
        classifier.classify(line)
    }

    /// Forward one externally formatted line at its inferred level
    ///
    /// Returns the level the line was logged at alongside the dispatch
    /// result, so callers can still act on Fatal when a sink failed.
    pub fn absorb(&self, bytes: &[u8], location: &SourceLocation) -> (Severity, Result<Outcome>) {
        let text = String::from_utf8_lossy(bytes);
        let classified = self.classify(&text);
        let level = classified.level;
        let result = self.log(level, location, format_args!("{}", classified.message));
        (level, result)
    }

    /// Replace the foreign-line classifier
    pub fn set_classifier(&self, classifier: impl LevelClassifier + 'static) {
        *self.classifier.write() = Arc::new(classifier);
    }

    // === Configuration ===

    pub fn set_console_level(&self, level: Severity) {
        self.pipeline.lock().thresholds.console = level;
    }

    pub fn console_level(&self) -> Severity {
        self.pipeline.lock().thresholds.console
    }

    pub fn set_syslog_level(&self, level: Severity) {
        self.pipeline.lock().thresholds.syslog = level;
    }

    pub fn syslog_level(&self) -> Severity {
        self.pipeline.lock().thresholds.syslog
    }

    pub fn set_file_level(&self, level: Severity) {
        self.pipeline.lock().thresholds.file = level;
    }

    pub fn file_level(&self) -> Severity {
        self.pipeline.lock().thresholds.file
    }

    /// Set the per-second budget; `0` (or less) disables limiting
    pub fn set_max_messages_per_second(&self, max: i64) {
        self.pipeline.lock().limiter.set_max_per_second(max);
    }

    pub fn max_messages_per_second(&self) -> i64 {
        self.pipeline.lock().limiter.max_per_second()
    }

    /// Append messages at `level` or more severe to `path`
    pub fn init_file(&self, path: impl Into<PathBuf>, level: Severity) {
        let mut pipeline = self.pipeline.lock();
        pipeline.sinks.file.register(path);
        pipeline.thresholds.file = level;
    }

    /// Active file path; `None` after a write error disabled the sink
    pub fn file_path(&self) -> Option<PathBuf> {
        self.pipeline.lock().sinks.file.path().map(Path::to_path_buf)
    }

    pub fn close_file(&self) {
        self.pipeline.lock().sinks.file.disable();
    }

    /// Connect to the local syslog daemon as `tag` (facility `user`)
    ///
    /// The threshold is set even when connecting fails; the syslog sink
    /// then stays inactive.
    pub fn init_syslog(&self, tag: &str, level: Severity) -> Result<()> {
        self.set_syslog_level(level);
        #[cfg(unix)]
        {
            let syslog = UnixSyslog::connect(tag, SyslogFacility::default())?;
            self.set_syslog_transport(syslog);
            Ok(())
        }
        #[cfg(not(unix))]
        {
            let _ = tag;
            Err(crate::error::LogError::PlatformNotSupported { feature: "syslog" })
        }
    }

    /// Like [`Logger::init_syslog`] with an explicit facility
    #[cfg(unix)]
    pub fn init_syslog_with_facility(
        &self,
        tag: &str,
        facility: SyslogFacility,
        level: Severity,
    ) -> Result<()> {
        self.set_syslog_level(level);
        let syslog = UnixSyslog::connect(tag, facility)?;
        self.set_syslog_transport(syslog);
        Ok(())
    }

    /// Connect to syslog at an explicit socket path with a given facility
    #[cfg(unix)]
    pub fn init_syslog_at(
        &self,
        socket: &Path,
        tag: &str,
        facility: SyslogFacility,
        level: Severity,
    ) -> Result<()> {
        self.set_syslog_level(level);
        let syslog = UnixSyslog::connect_to(socket, tag, facility)?;
        self.set_syslog_transport(syslog);
        Ok(())
    }

    /// Use any transport as the syslog sink
    pub fn set_syslog_transport(&self, transport: impl SyslogTransport + 'static) {
        self.pipeline.lock().sinks.syslog = Some(Box::new(transport));
    }

    pub fn has_syslog(&self) -> bool {
        self.pipeline.lock().sinks.syslog.is_some()
    }

    pub fn close_syslog(&self) {
        self.pipeline.lock().sinks.syslog = None;
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pipeline = self.pipeline.lock();
        f.debug_struct("Logger")
            .field("thresholds", &pipeline.thresholds)
            .field("rate_limit", &pipeline.limiter.max_per_second())
            .field("file", &pipeline.sinks.file.path())
            .field("syslog", &pipeline.sinks.syslog.is_some())
            .finish()
    }
}

// Formatted per-level logging macros
//
// Every macro takes `format!`-style arguments and logs them at the call site.
// Without a `logger:` argument the process-wide logger is used.

/// Log formatted text at an explicit level
///
/// # Examples
/// ```ignore
/// log_at!(Severity::Info, "{} workers up", n);
/// log_at!(logger: &my_logger, Severity::Info, "{} workers up", n);
/// ```
#[macro_export]
macro_rules! log_at {
    (logger: $logger:expr, $level:expr, $($arg:tt)+) => {
        $crate::Logger::emit(
            $logger,
            $level,
            &$crate::SourceLocation::new(file!(), line!()),
            format_args!($($arg)+),
        )
    };
    ($level:expr, $($arg:tt)+) => {
        $crate::log_at!(logger: $crate::logger(), $level, $($arg)+)
    };
}

/// Log a message with fatal severity, then exit the process
///
/// # Examples
/// ```ignore
/// log_fatal!("cannot open {}", path.display());
/// ```
#[macro_export]
macro_rules! log_fatal {
    (logger: $logger:expr, $($arg:tt)+) => {{
        $crate::log_at!(logger: $logger, $crate::Severity::Fatal, $($arg)+);
        $crate::exit_fatal()
    }};
    ($($arg:tt)+) => {{
        $crate::log_at!($crate::Severity::Fatal, $($arg)+);
        $crate::exit_fatal()
    }};
}

/// Log a message with alert severity
#[macro_export]
macro_rules! log_alert {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log_at!(logger: $logger, $crate::Severity::Alert, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log_at!($crate::Severity::Alert, $($arg)+)
    };
}

/// Log a message with critical severity
#[macro_export]
macro_rules! log_critical {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log_at!(logger: $logger, $crate::Severity::Critical, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log_at!($crate::Severity::Critical, $($arg)+)
    };
}

/// Log a message with error severity
///
/// # Examples
/// ```ignore
/// log_error!("write failed: {}", err);
/// ```
#[macro_export]
macro_rules! log_error {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log_at!(logger: $logger, $crate::Severity::Error, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log_at!($crate::Severity::Error, $($arg)+)
    };
}

/// Log a message with warning severity
#[macro_export]
macro_rules! log_warning {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log_at!(logger: $logger, $crate::Severity::Warning, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log_at!($crate::Severity::Warning, $($arg)+)
    };
}

/// Log a message with notice severity
#[macro_export]
macro_rules! log_notice {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log_at!(logger: $logger, $crate::Severity::Notice, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log_at!($crate::Severity::Notice, $($arg)+)
    };
}

/// Log a message with info severity
#[macro_export]
macro_rules! log_info {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log_at!(logger: $logger, $crate::Severity::Info, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log_at!($crate::Severity::Info, $($arg)+)
    };
}

/// Log a message with debug severity
#[macro_export]
macro_rules! log_debug {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log_at!(logger: $logger, $crate::Severity::Debug, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log_at!($crate::Severity::Debug, $($arg)+)
    };
}

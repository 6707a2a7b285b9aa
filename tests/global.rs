//! Process-wide logger, free functions and macros
//!
//! Shares one global logger, so everything runs inside a single test.

use fanlog::{log_debug, log_error, log_info, log_notice, Severity};
use std::fs;

#[test]
fn test_free_functions_configure_the_global_logger() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("global.log");

    // Keep the real console quiet
    fanlog::set_console_level(Severity::Fatal);
    fanlog::set_syslog_level(Severity::Fatal);
    fanlog::init_file(&path, Severity::Info);
    fanlog::set_max_messages_per_second(0);

    let logger = fanlog::logger();
    assert_eq!(logger.console_level(), Severity::Fatal);
    assert_eq!(logger.file_level(), Severity::Info);
    assert_eq!(logger.max_messages_per_second(), 0);

    log_info!("{} workers up", 4);
    log_debug!("hidden {}", 1);
    let line = line!() + 1;
    log_error!("code {}", 7);
    log_notice!(logger: logger, "explicit");
    logger.info("plain");

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("[Info] global.rs:"));
    assert!(content.contains(" - 4 workers up\n"));
    assert!(!content.contains("hidden"));
    assert!(content.contains(&format!("[Error] global.rs:{} - code 7\n", line)));
    assert!(content.contains(" - explicit\n"));
    assert!(content.contains(" - plain\n"));

    fanlog::set_max_messages_per_second(1);
    assert_eq!(logger.max_messages_per_second(), 1);
}

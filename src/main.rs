//! fanlog - log from the shell through console, syslog and file sinks
//!
//! Usage:
//!   fanlog send --level warning "disk almost full"
//!   some-tool 2>&1 | fanlog --file /var/log/tool.log pipe
//!   fanlog --config fanlog.toml check-config

mod cli;

use clap::Parser;
use cli::{Cli, Command};
use fanlog::config::{FileConfig, SyslogConfig};
use fanlog::{LogConfig, Logger, Severity, SourceLocation, StreamAdapter};
use std::io::{self, BufRead};
use std::process::ExitCode;
use tracing::{error, warn};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Our own diagnostics go through the logger like everything else
    if let Err(e) = fanlog::capture_tracing() {
        eprintln!("{}", e);
    }

    let config = effective_config(&cli);
    let command = cli.command.unwrap_or(Command::Pipe);

    if let Command::CheckConfig = command {
        return check_config(&config);
    }

    let logger = fanlog::logger();
    if let Err(e) = config.apply(logger) {
        // Syslog may be down; the other sinks are already configured
        warn!("{}", e);
    }

    let result = match command {
        Command::Send { level, message } => send(logger, level, &message.join(" ")),
        Command::Pipe => pipe(logger),
        Command::CheckConfig => Ok(()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("fanlog: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Config file (if any) with command-line overrides applied
fn effective_config(cli: &Cli) -> LogConfig {
    let mut config = match &cli.config {
        Some(path) => LogConfig::load_or_default(path),
        None => LogConfig::default(),
    };

    if let Some(max) = cli.rate_limit {
        config.max_messages_per_second = max;
    }
    if let Some(level) = cli.console_level {
        config.console.level = level;
    }

    if let Some(path) = &cli.file {
        config.file.get_or_insert_with(FileConfig::default).path = path.clone();
    }
    if let Some(level) = cli.file_level {
        match config.file.as_mut() {
            Some(file) => file.level = level,
            None => warn!("--file-level ignored: no file configured"),
        }
    }

    if let Some(tag) = &cli.syslog_tag {
        config.syslog.get_or_insert_with(SyslogConfig::default).tag = tag.clone();
    }
    if let Some(level) = cli.syslog_level {
        match config.syslog.as_mut() {
            Some(syslog) => syslog.level = level,
            None => warn!("--syslog-level ignored: syslog not configured"),
        }
    }

    config
}

fn check_config(config: &LogConfig) -> ExitCode {
    if let Err(e) = config.validate() {
        error!("{}", e);
        return ExitCode::FAILURE;
    }
    match config.to_toml_string() {
        Ok(text) => {
            print!("{}", text);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn send(logger: &Logger, level: Severity, message: &str) -> fanlog::Result<()> {
    let result = logger.log(level, &SourceLocation::caller(), format_args!("{}", message));
    if level == Severity::Fatal {
        fanlog::exit_fatal();
    }
    result.map(|_| ())
}

fn pipe(logger: &Logger) -> fanlog::Result<()> {
    let adapter = StreamAdapter::new(logger);
    let mut reported = false;

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("stdin: {}", e);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        let (level, result) = adapter.forward(line.as_bytes());
        if level == Severity::Fatal {
            fanlog::exit_fatal();
        }
        // Report the first failure only; a failed file sink is already off
        if let Err(e) = result {
            if !reported {
                eprintln!("fanlog: {}", e);
                reported = true;
            }
        }
    }
    Ok(())
}

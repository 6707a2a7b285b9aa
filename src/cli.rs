//! Command-line interface definition using clap
//!
//! Flags override the matching keys of the config file.

use clap::{Parser, Subcommand};
use fanlog::Severity;
use std::path::PathBuf;

// =============================================================================
// CLI Definition
// =============================================================================

/// Log messages to console, syslog and file
#[derive(Parser, Debug, Default)]
#[command(name = "fanlog")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// TOML config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Console threshold
    #[arg(long, value_name = "LEVEL")]
    pub console_level: Option<Severity>,

    /// Append messages to this file
    #[arg(long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// File threshold (default: debug)
    #[arg(long, value_name = "LEVEL")]
    pub file_level: Option<Severity>,

    /// Send messages to the local syslog daemon under this tag
    #[arg(long, value_name = "TAG")]
    pub syslog_tag: Option<String>,

    /// Syslog threshold (default: debug)
    #[arg(long, value_name = "LEVEL")]
    pub syslog_level: Option<Severity>,

    /// Messages per second (0 = unlimited)
    #[arg(long, value_name = "N")]
    pub rate_limit: Option<i64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log a single message
    Send {
        /// Message level
        #[arg(short, long, default_value = "notice")]
        level: Severity,

        /// Message words, joined with spaces
        #[arg(required = true)]
        message: Vec<String>,
    },

    /// Log every stdin line at the level named by its prefix
    Pipe,

    /// Print the effective configuration and exit
    CheckConfig,
}

// =============================================================================
// Tests
// =============================================================================

//! Configuration management
//!
//! A TOML file with one section per sink. A missing `[syslog]` or `[file]`
//! section leaves that sink inactive; missing keys take their defaults.
//!
//! ```toml
//! max_messages_per_second = 50
//!
//! [console]
//! level = "info"
//!
//! [file]
//! path = "/var/log/app.log"
//! level = "warning"
//! ```

use crate::constants::DEFAULT_SYSLOG_TAG;
use crate::error::{LogError, Result};
use crate::{Logger, Severity};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

#[cfg(unix)]
use crate::sink::syslog::SyslogFacility;

// =============================================================================
// Logger Configuration
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Messages admitted per wall-clock second (0 = unlimited)
    pub max_messages_per_second: i64,
    pub console: ConsoleConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub syslog: Option<SyslogConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<FileConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub level: Severity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyslogConfig {
    /// Program name shown by the syslog daemon
    pub tag: String,
    pub level: Severity,
    /// Explicit datagram socket (default: first of the well-known paths)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub socket: Option<PathBuf>,
    /// `user`, `daemon`, `local0` .. `local7`, ...
    pub facility: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub path: PathBuf,
    pub level: Severity,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            max_messages_per_second: 0,
            console: ConsoleConfig::default(),
            syslog: None,
            file: None,
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            level: Severity::Debug,
        }
    }
}

impl Default for SyslogConfig {
    fn default() -> Self {
        Self {
            tag: DEFAULT_SYSLOG_TAG.to_string(),
            level: Severity::Debug,
            socket: None,
            facility: "user".to_string(),
        }
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::new(),
            level: Severity::Debug,
        }
    }
}

impl LogConfig {
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| LogError::ConfigValidation {
            field: "config",
            reason: e.to_string(),
        })
    }

    /// Read and parse a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| LogError::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content).map_err(|e| LogError::ConfigParse {
            path: path.to_path_buf(),
            reason: e.message().to_string(),
        })
    }

    /// Like [`LogConfig::load`], falling back to defaults with a warning
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_toml_string()?;
        fs::write(path, content).map_err(|e| LogError::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Check values that TOML parsing alone does not catch
    pub fn validate(&self) -> Result<()> {
        if let Some(file) = &self.file {
            if file.path.as_os_str().is_empty() {
                return Err(LogError::ConfigValidation {
                    field: "file.path",
                    reason: "must not be empty".into(),
                });
            }
        }
        if let Some(syslog) = &self.syslog {
            if syslog.tag.is_empty() {
                return Err(LogError::ConfigValidation {
                    field: "syslog.tag",
                    reason: "must not be empty".into(),
                });
            }
            #[cfg(unix)]
            syslog.facility()?;
        }
        Ok(())
    }

    /// Configure `logger` from this config
    ///
    /// Thresholds, rate limit and file are applied before syslog is
    /// connected, so a syslog failure leaves the rest in place.
    pub fn apply(&self, logger: &Logger) -> Result<()> {
        self.validate()?;

        logger.set_max_messages_per_second(self.max_messages_per_second);
        logger.set_console_level(self.console.level);
        if let Some(file) = &self.file {
            logger.init_file(file.path.clone(), file.level);
        }
        if let Some(syslog) = &self.syslog {
            syslog.connect(logger)?;
        }
        Ok(())
    }
}

impl SyslogConfig {
    #[cfg(unix)]
    pub fn facility(&self) -> Result<SyslogFacility> {
        SyslogFacility::from_name(&self.facility).ok_or_else(|| LogError::ConfigValidation {
            field: "syslog.facility",
            reason: format!("unknown facility '{}'", self.facility),
        })
    }

    #[cfg(unix)]
    fn connect(&self, logger: &Logger) -> Result<()> {
        let facility = self.facility()?;
        match &self.socket {
            Some(socket) => logger.init_syslog_at(socket, &self.tag, facility, self.level),
            None => logger.init_syslog_with_facility(&self.tag, facility, self.level),
        }
    }

    #[cfg(not(unix))]
    fn connect(&self, logger: &Logger) -> Result<()> {
        logger.init_syslog(&self.tag, self.level)
    }
}

// =============================================================================
// Tests
// =============================================================================

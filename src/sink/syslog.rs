//! Syslog sink
//!
//! Messages go to the local syslog daemon through the `syslog` crate's
//! RFC 3164 formatter (`<PRI>Mmm dd hh:mm:ss tag[pid]: message`). The
//! connection is attempted eagerly so an unreachable daemon is reported at
//! init time.

use crate::Severity;
use std::io;

#[cfg(unix)]
pub use unix::{SyslogFacility, UnixSyslog};

/// Destination for syslog payloads
///
/// The payload is the rendered message without timestamp or trailing newline;
/// implementations map `level` onto their native severity.
pub trait SyslogTransport: Send {
    fn send(&mut self, level: Severity, message: &str) -> io::Result<()>;
}

#[cfg(unix)]
mod unix {
    use super::SyslogTransport;
    use crate::error::{LogError, Result};
    use crate::Severity;
    use std::fmt;
    use std::io;
    use std::path::{Path, PathBuf};
    use syslog::{Facility, Formatter3164, LoggerBackend};

    type Backend = syslog::Logger<LoggerBackend, Formatter3164>;

    /// Syslog facilities selectable by name
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub enum SyslogFacility {
        Kern,
        #[default]
        User,
        Mail,
        Daemon,
        Auth,
        Syslog,
        Cron,
        Local0,
        Local1,
        Local2,
        Local3,
        Local4,
        Local5,
        Local6,
        Local7,
    }

    impl SyslogFacility {
        /// Case-insensitive lookup by `syslog.conf` name
        pub fn from_name(name: &str) -> Option<Self> {
            match name.to_ascii_lowercase().as_str() {
                "kern" => Some(Self::Kern),
                "user" => Some(Self::User),
                "mail" => Some(Self::Mail),
                "daemon" => Some(Self::Daemon),
                "auth" => Some(Self::Auth),
                "syslog" => Some(Self::Syslog),
                "cron" => Some(Self::Cron),
                "local0" => Some(Self::Local0),
                "local1" => Some(Self::Local1),
                "local2" => Some(Self::Local2),
                "local3" => Some(Self::Local3),
                "local4" => Some(Self::Local4),
                "local5" => Some(Self::Local5),
                "local6" => Some(Self::Local6),
                "local7" => Some(Self::Local7),
                _ => None,
            }
        }

        pub const fn as_str(self) -> &'static str {
            match self {
                Self::Kern => "kern",
                Self::User => "user",
                Self::Mail => "mail",
                Self::Daemon => "daemon",
                Self::Auth => "auth",
                Self::Syslog => "syslog",
                Self::Cron => "cron",
                Self::Local0 => "local0",
                Self::Local1 => "local1",
                Self::Local2 => "local2",
                Self::Local3 => "local3",
                Self::Local4 => "local4",
                Self::Local5 => "local5",
                Self::Local6 => "local6",
                Self::Local7 => "local7",
            }
        }

        fn to_facility(self) -> Facility {
            match self {
                Self::Kern => Facility::LOG_KERN,
                Self::User => Facility::LOG_USER,
                Self::Mail => Facility::LOG_MAIL,
                Self::Daemon => Facility::LOG_DAEMON,
                Self::Auth => Facility::LOG_AUTH,
                Self::Syslog => Facility::LOG_SYSLOG,
                Self::Cron => Facility::LOG_CRON,
                Self::Local0 => Facility::LOG_LOCAL0,
                Self::Local1 => Facility::LOG_LOCAL1,
                Self::Local2 => Facility::LOG_LOCAL2,
                Self::Local3 => Facility::LOG_LOCAL3,
                Self::Local4 => Facility::LOG_LOCAL4,
                Self::Local5 => Facility::LOG_LOCAL5,
                Self::Local6 => Facility::LOG_LOCAL6,
                Self::Local7 => Facility::LOG_LOCAL7,
            }
        }
    }

    impl fmt::Display for SyslogFacility {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.as_str())
        }
    }

    /// Connection to a local syslog daemon
    pub struct UnixSyslog {
        backend: Backend,
        /// `None` when connected through the default endpoints
        path: Option<PathBuf>,
        tag: String,
        facility: SyslogFacility,
    }

    impl UnixSyslog {
        /// Connect through the platform's default endpoints
        pub fn connect(tag: &str, facility: SyslogFacility) -> Result<Self> {
            Self::open(None, tag, facility)
        }

        /// Connect to an explicit socket path
        pub fn connect_to(path: &Path, tag: &str, facility: SyslogFacility) -> Result<Self> {
            Self::open(Some(path.to_path_buf()), tag, facility)
        }

        fn open(path: Option<PathBuf>, tag: &str, facility: SyslogFacility) -> Result<Self> {
            if tag.contains(['\0', '\n']) {
                return Err(LogError::SyslogTag {
                    tag: tag.to_string(),
                });
            }
            let backend =
                open_backend(path.as_deref(), tag, facility).map_err(|source| {
                    LogError::SyslogConnect {
                        tag: tag.to_string(),
                        source,
                    }
                })?;
            Ok(Self {
                backend,
                path,
                tag: tag.to_string(),
                facility,
            })
        }

        pub fn path(&self) -> Option<&Path> {
            self.path.as_deref()
        }

        pub fn tag(&self) -> &str {
            &self.tag
        }

        pub fn facility(&self) -> SyslogFacility {
            self.facility
        }
    }

    impl fmt::Debug for UnixSyslog {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_struct("UnixSyslog")
                .field("path", &self.path)
                .field("tag", &self.tag)
                .field("facility", &self.facility)
                .finish()
        }
    }

    impl SyslogTransport for UnixSyslog {
        fn send(&mut self, level: Severity, message: &str) -> io::Result<()> {
            if write_at(&mut self.backend, level, message).is_ok() {
                return Ok(());
            }
            // Daemon may have restarted: reconnect once
            self.backend = open_backend(self.path.as_deref(), &self.tag, self.facility)?;
            write_at(&mut self.backend, level, message)
        }
    }

    fn open_backend(path: Option<&Path>, tag: &str, facility: SyslogFacility) -> io::Result<Backend> {
        let formatter = Formatter3164 {
            facility: facility.to_facility(),
            hostname: None,
            process: tag.to_string(),
            pid: std::process::id(),
        };
        let backend = match path {
            Some(path) => syslog::unix_custom(formatter, path),
            None => syslog::unix(formatter),
        };
        backend.map_err(|e| io::Error::other(e.to_string()))
    }

    /// One-to-one mapping onto the native severities
    fn write_at(backend: &mut Backend, level: Severity, message: &str) -> io::Result<()> {
        let result = match level {
            Severity::Fatal => backend.emerg(message),
            Severity::Alert => backend.alert(message),
            Severity::Critical => backend.crit(message),
            Severity::Error => backend.err(message),
            Severity::Warning => backend.warning(message),
            Severity::Notice => backend.notice(message),
            Severity::Info => backend.info(message),
            Severity::Debug => backend.debug(message),
        };
        result.map_err(|e| io::Error::other(e.to_string()))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::error::LogError;
    use std::os::unix::net::UnixDatagram;
    use std::time::Duration;

    fn listener() -> (tempfile::TempDir, std::path::PathBuf, UnixDatagram) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.sock");
        let server = UnixDatagram::bind(&path).unwrap();
        server
            .set_read_timeout(Some(Duration::from_secs(2)))
            .unwrap();
        (dir, path, server)
    }

    fn recv(server: &UnixDatagram) -> String {
        let mut buf = [0u8; 2048];
        let len = server.recv(&mut buf).unwrap();
        String::from_utf8_lossy(&buf[..len]).into_owned()
    }

    #[test]
    fn test_severities_map_one_to_one() {
        let (_dir, path, server) = listener();
        let mut syslog = UnixSyslog::connect_to(&path, "testapp", SyslogFacility::User).unwrap();

        for level in Severity::ALL {
            syslog.send(level, "x").unwrap();
            // LOG_USER (8) | native severity (0 = emerg .. 7 = debug)
            let expected = format!("<{}>", 8 + level.as_u8());
            let datagram = recv(&server);
            assert!(datagram.starts_with(&expected), "{level}: {datagram:?}");
        }
    }

    #[test]
    fn test_facility_names() {
        assert_eq!(SyslogFacility::default(), SyslogFacility::User);
        assert_eq!(
            SyslogFacility::from_name("LOCAL3"),
            Some(SyslogFacility::Local3)
        );
        assert_eq!(SyslogFacility::from_name("nope"), None);
        assert_eq!(SyslogFacility::Daemon.to_string(), "daemon");
    }

    #[test]
    fn test_sends_rfc3164_datagram() {
        let (_dir, path, server) = listener();
        let mut syslog = UnixSyslog::connect_to(&path, "testapp", SyslogFacility::User).unwrap();
        assert_eq!(syslog.path(), Some(path.as_path()));
        assert_eq!(syslog.tag(), "testapp");

        syslog
            .send(Severity::Warning, "[Warning] a.rs:1 - careful")
            .unwrap();

        let datagram = recv(&server);
        // LOG_USER (8) | LOG_WARNING (4)
        assert!(datagram.starts_with("<12>"), "got {datagram:?}");
        assert!(datagram.contains(&format!("testapp[{}]: ", std::process::id())));
        assert!(datagram
            .trim_end()
            .ends_with("[Warning] a.rs:1 - careful"));
    }

    #[test]
    fn test_priority_uses_facility() {
        let (_dir, path, server) = listener();
        let mut syslog =
            UnixSyslog::connect_to(&path, "testapp", SyslogFacility::Local0).unwrap();

        syslog.send(Severity::Fatal, "x").unwrap();
        // LOG_LOCAL0 (128) | LOG_EMERG (0)
        assert!(recv(&server).starts_with("<128>"));
    }

    #[test]
    fn test_connect_to_missing_socket_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = UnixSyslog::connect_to(&dir.path().join("absent.sock"), "t", SyslogFacility::User)
            .unwrap_err();
        assert!(matches!(err, LogError::SyslogConnect { .. }));
    }

    #[test]
    fn test_rejects_tag_with_newline() {
        let (_dir, path, _server) = listener();
        let err = UnixSyslog::connect_to(&path, "bad\ntag", SyslogFacility::User).unwrap_err();
        assert!(matches!(err, LogError::SyslogTag { .. }));
    }
}

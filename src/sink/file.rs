//! Append-only file sink
//!
//! The file is opened (created if needed) for every write and closed right
//! after, so no descriptor is held between messages and a new path takes
//! effect immediately. The first open or write error disables the sink until
//! a path is registered again.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
pub struct FileSink {
    path: Option<PathBuf>,
}

impl FileSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start appending to `path`
    pub fn register(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        self.path = if path.as_os_str().is_empty() {
            None
        } else {
            Some(path)
        };
    }

    pub fn disable(&mut self) {
        self.path = None;
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.path.is_some()
    }

    /// Append `line`; a no-op while inactive
    pub fn write(&mut self, line: &str) -> io::Result<()> {
        let Some(path) = self.path.as_deref() else {
            return Ok(());
        };

        let result = open_append(path).and_then(|mut file| {
            file.write_all(line.as_bytes())?;
            file.flush()
        });

        if result.is_err() {
            // Don't try this file anymore
            self.path = None;
        }
        result
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

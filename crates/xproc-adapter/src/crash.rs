//! Last-resort crash dump for failures the adapter cannot explain.
//!
//! The dump must never mask the failure it records, so every write error is
//! swallowed after a log event.

use std::fmt::Display;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const DUMP_FILE_NAME: &str = "XProcAdapterCrash.txt";

/// Appends diagnostic lines to a crash file in the user's home directory
#[derive(Debug, Clone)]
pub struct CrashDump {
    path: PathBuf,
}

impl CrashDump {
    /// Dump into `XProcAdapterCrash.txt` in the home directory, or the
    /// system temp directory when no home is known
    pub fn standard() -> Self {
        let dir = dirs::home_dir().unwrap_or_else(std::env::temp_dir);
        Self {
            path: dir.join(DUMP_FILE_NAME),
        }
    }

    /// Dump into a specific file
    pub fn at<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record a failure with the operation it occurred in
    pub fn record(&self, context: &str, error: &dyn Display) {
        if let Err(write_err) = self.try_record(context, error) {
            tracing::warn!(path = %self.path.display(), %write_err, "could not write crash dump");
        }
    }

    fn try_record(&self, context: &str, error: &dyn Display) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(
            file,
            "[{}] {context}: {error}",
            chrono::Local::now().to_rfc3339()
        )?;
        Ok(())
    }
}

impl Default for CrashDump {
    fn default() -> Self {
        Self::standard()
    }
}

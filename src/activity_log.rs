//! Timestamped activity log
//!
//! Appends `YYYY-MM-DD HH:MM:SS [LEVEL] message` lines to a plain text file.
//! Writing never fails from the caller's point of view: I/O errors are
//! printed to the console and dropped.

use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use chrono::Local;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warning,
    Error,
    Exception,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Exception => "EXCEPTION",
        }
    }
}

/// Append-only log file shared by the session and the driver.
///
/// All writes to one instance go through a single mutex so lines from
/// different threads never interleave.
#[derive(Debug)]
pub struct ActivityLog {
    path: PathBuf,
    enabled: AtomicBool,
    write_lock: Mutex<()>,
}

impl ActivityLog {
    pub fn new(path: impl Into<PathBuf>, enabled: bool) -> Self {
        let log = Self {
            path: path.into(),
            enabled: AtomicBool::new(enabled),
            write_lock: Mutex::new(()),
        };
        log.log("Logger initialized");
        log
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    /// Toggle logging. The transition is logged with the new state, so
    /// disabling leaves no trace in the file.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
        self.log(&format!(
            "Logging {}",
            if enabled { "enabled" } else { "disabled" }
        ));
    }

    pub fn log(&self, message: &str) {
        self.write_entry(LogLevel::Info, message);
    }

    pub fn log_warning(&self, message: &str) {
        self.write_entry(LogLevel::Warning, message);
    }

    pub fn log_error(&self, message: &str) {
        self.write_entry(LogLevel::Error, message);
    }

    /// Log an error with its type, source chain and the current backtrace
    pub fn log_exception<E: Error>(&self, error: &E, context: &str) {
        if !self.is_enabled() {
            return;
        }

        let mut message = format!(
            "{}: {} - {}",
            context,
            std::any::type_name::<E>(),
            error
        );

        let mut source = error.source();
        while let Some(cause) = source {
            message.push_str(&format!("\n    caused by: {}", cause));
            source = cause.source();
        }

        let backtrace = Backtrace::capture();
        if backtrace.status() == BacktraceStatus::Captured {
            message.push_str(&format!("\n{}", backtrace));
        }

        self.write_entry(LogLevel::Exception, &message);
    }

    /// Truncate the file down to a single banner line
    pub fn clear_log(&self) {
        if !self.is_enabled() {
            return;
        }

        let banner = format!("uc-online Log - {}\n", timestamp());
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Err(e) = fs::write(&self.path, banner) {
            println!("[uc-online] Error clearing log: {}", e);
        }
    }

    fn write_entry(&self, level: LogLevel, message: &str) {
        if !self.is_enabled() {
            return;
        }

        let line = format!("{} [{}] {}", timestamp(), level.as_str(), message);

        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| writeln!(file, "{}", line));
        if let Err(e) = result {
            println!("[uc-online] Logging error: {}", e);
        }
    }
}

fn timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

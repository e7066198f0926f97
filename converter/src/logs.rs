//! Console logging for conversion runs.
//!
//! Entries go to stderr so stdout only ever carries the completion notice.
//! Info and success entries are progress details and stay silent unless
//! verbose mode is switched on.

use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicBool, Ordering};

/// Log level for console display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A single log entry
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    /// Nesting level for sub-steps
    pub indent: u8,
}

impl LogEntry {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Info, message: message.into(), indent: 0 }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Success, message: message.into(), indent: 0 }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Warning, message: message.into(), indent: 0 }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: LogLevel::Error, message: message.into(), indent: 0 }
    }

    pub fn with_indent(mut self, indent: u8) -> Self {
        self.indent = indent;
        self
    }

    /// Render the entry as a single console line.
    pub fn render(&self) -> String {
        let prefix = match self.level {
            LogLevel::Info => "  ",
            LogLevel::Success => "✓",
            LogLevel::Warning => "⚠️",
            LogLevel::Error => "❌",
        };
        let indent = "   ".repeat(self.indent as usize);
        format!("{}{} {}", indent, prefix, self.message)
    }
}

/// Global logger
pub static LOGGER: Lazy<Logger> = Lazy::new(Logger::new);

/// Writes log entries to stderr, filtered by verbosity
pub struct Logger {
    verbose: AtomicBool,
}

impl Logger {
    pub fn new() -> Self {
        Self { verbose: AtomicBool::new(false) }
    }

    pub fn set_verbose(&self, verbose: bool) {
        self.verbose.store(verbose, Ordering::Relaxed);
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose.load(Ordering::Relaxed)
    }

    /// Whether an entry at `level` is printed with the current settings.
    pub fn enabled(&self, level: LogLevel) -> bool {
        match level {
            LogLevel::Info | LogLevel::Success => self.is_verbose(),
            LogLevel::Warning | LogLevel::Error => true,
        }
    }

    pub fn log(&self, entry: LogEntry) {
        if self.enabled(entry.level) {
            eprintln!("{}", entry.render());
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenient logging functions
pub fn log_info(msg: impl Into<String>) {
    LOGGER.log(LogEntry::info(msg));
}

pub fn log_success(msg: impl Into<String>) {
    LOGGER.log(LogEntry::success(msg));
}

pub fn log_warning(msg: impl Into<String>) {
    LOGGER.log(LogEntry::warning(msg));
}

pub fn log_error(msg: impl Into<String>) {
    LOGGER.log(LogEntry::error(msg));
}

pub fn log_info_indent(msg: impl Into<String>, indent: u8) {
    LOGGER.log(LogEntry::info(msg).with_indent(indent));
}

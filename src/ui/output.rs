//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! All user-facing output goes through the [`Logger`] capability, which is
//! injected into every collaborator via [`crate::core::options::Options`].
//! [`ConsoleLogger`] writes to the process streams; [`MemoryLogger`]
//! captures lines for tests. Debug lines are gated by [`Verbosity`].

use std::fmt::Display;
use std::sync::Mutex;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Normal mode - standard output
    #[default]
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(debug: bool) -> Self {
        if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Minimal output capability handed to the dispatcher and collaborators.
///
/// Any type with these three operations can stand in for the console,
/// which keeps collaborators independent of process streams.
pub trait Logger: Send + Sync {
    /// Informational line (stdout for the console logger).
    fn log(&self, message: &str);

    /// Error line (stderr for the console logger).
    fn error(&self, message: &str);

    /// Dump a structured value.
    fn dir(&self, value: &serde_json::Value);
}

/// Logger backed by the process's standard output and error streams.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn log(&self, message: &str) {
        println!("{}", message);
    }

    fn error(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn dir(&self, value: &serde_json::Value) {
        println!("{:#}", value);
    }
}

/// Which stream a captured line was written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogLine {
    Out(String),
    Err(String),
}

/// Logger that records every line in memory.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    lines: Mutex<Vec<LogLine>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured lines in write order.
    pub fn lines(&self) -> Vec<LogLine> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    /// Captured stdout lines joined with newlines.
    pub fn stdout(&self) -> String {
        self.collect(|line| match line {
            LogLine::Out(s) => Some(s),
            LogLine::Err(_) => None,
        })
    }

    /// Captured stderr lines joined with newlines.
    pub fn stderr(&self) -> String {
        self.collect(|line| match line {
            LogLine::Err(s) => Some(s),
            LogLine::Out(_) => None,
        })
    }

    fn collect(&self, pick: impl Fn(&LogLine) -> Option<&String>) -> String {
        self.lines()
            .iter()
            .filter_map(|l| pick(l).cloned())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn push(&self, line: LogLine) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line);
        }
    }
}

impl Logger for MemoryLogger {
    fn log(&self, message: &str) {
        self.push(LogLine::Out(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.push(LogLine::Err(message.to_string()));
    }

    fn dir(&self, value: &serde_json::Value) {
        self.push(LogLine::Out(format!("{:#}", value)));
    }
}

/// Print a debug message through `logger` (only in debug mode).
pub fn debug(logger: &dyn Logger, message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        logger.error(&format!("[debug] {}", message));
    }
}

/// Print an error message straight to stderr (always shown).
///
/// Used only where no logger exists yet, e.g. a fatal error in `main`.
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Format a list of items.
pub fn format_list<T: Display>(items: &[T], prefix: &str) -> String {
    items
        .iter()
        .map(|item| format!("{}{}", prefix, item))
        .collect::<Vec<_>>()
        .join("\n")
}

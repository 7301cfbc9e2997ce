//! Run logging
//!
//! [`run`](crate::run) reports progress and failures through a [`Logger`]
//! handed in by the caller. The binary uses [`TracingLogger`]; tests use
//! [`RecordingLogger`] to inspect what a run said.

use std::cell::RefCell;

/// Sink for the messages of an extrusion run.
pub trait Logger {
    /// Report normal progress.
    fn info(&self, message: &str);

    /// Report a failure.
    fn error(&self, message: &str);
}

/// Forwards messages to the `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!("{}", message);
    }
}

/// Severity of a recorded message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Error,
}

/// Keeps every message in memory.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    entries: RefCell<Vec<(LogLevel, String)>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages in the order they were logged.
    pub fn entries(&self) -> Vec<(LogLevel, String)> {
        self.entries.borrow().clone()
    }

    /// Messages logged at `level`.
    pub fn messages(&self, level: LogLevel) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl Logger for RecordingLogger {
    fn info(&self, message: &str) {
        self.entries
            .borrow_mut()
            .push((LogLevel::Info, message.to_string()));
    }

    fn error(&self, message: &str) {
        self.entries
            .borrow_mut()
            .push((LogLevel::Error, message.to_string()));
    }
}

//! Log sinks.
//!
//! A sink receives finished message text and a severity. Delivery, buffering
//! and persistence are the sink's business; the logger only formats.
//!
//! # Implementations
//! - [`TracingSink`]: forwards to `tracing` events
//! - [`RecordingSink`]: keeps messages in memory

pub mod recording;
pub mod tracing_sink;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

pub use recording::RecordingSink;
pub use tracing_sink::TracingSink;

/// Severity attached to a log call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Error,
}

impl Severity {
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Destination for formatted log text.
pub trait LogSink {
    fn write_info(&self, text: &str);

    fn write_error(&self, text: &str);

    /// Dispatch on severity.
    fn write(&self, severity: Severity, text: &str) {
        match severity {
            Severity::Info => self.write_info(text),
            Severity::Error => self.write_error(text),
        }
    }
}

impl<S: LogSink + ?Sized> LogSink for &S {
    fn write_info(&self, text: &str) {
        (**self).write_info(text)
    }

    fn write_error(&self, text: &str) {
        (**self).write_error(text)
    }
}

impl<S: LogSink + ?Sized> LogSink for Box<S> {
    fn write_info(&self, text: &str) {
        (**self).write_info(text)
    }

    fn write_error(&self, text: &str) {
        (**self).write_error(text)
    }
}

impl<S: LogSink + ?Sized> LogSink for Arc<S> {
    fn write_info(&self, text: &str) {
        (**self).write_info(text)
    }

    fn write_error(&self, text: &str) {
        (**self).write_error(text)
    }
}

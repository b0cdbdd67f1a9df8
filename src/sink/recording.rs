//! In-memory sink.

use std::sync::{Mutex, MutexGuard};

use crate::sink::{LogSink, Severity};

/// Sink that keeps every message it receives, in arrival order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    entries: Mutex<Vec<(Severity, String)>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the received messages.
    pub fn entries(&self) -> Vec<(Severity, String)> {
        self.lock().clone()
    }

    /// Remove and return the received messages.
    pub fn take(&self) -> Vec<(Severity, String)> {
        std::mem::take(&mut *self.lock())
    }

    /// Text of the most recent message, if any.
    pub fn last(&self) -> Option<String> {
        self.lock().last().map(|(_, text)| text.clone())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A poisoned lock still holds complete entries.
    fn lock(&self) -> MutexGuard<'_, Vec<(Severity, String)>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn push(&self, severity: Severity, text: &str) {
        self.lock().push((severity, text.to_string()));
    }
}

impl LogSink for RecordingSink {
    fn write_info(&self, text: &str) {
        self.push(Severity::Info, text);
    }

    fn write_error(&self, text: &str) {
        self.push(Severity::Error, text);
    }
}

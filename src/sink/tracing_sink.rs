//! Sink forwarding to the `tracing` ecosystem.

use crate::sink::LogSink;

/// Target of every event emitted by [`TracingSink`].
pub const TARGET: &str = "varlog";

/// Emits each message as a `tracing` event at the matching level.
///
/// The configured name is attached as the `logger` field so several sinks
/// can share one subscriber.
#[derive(Debug, Clone)]
pub struct TracingSink {
    name: String,
}

impl TracingSink {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new(TARGET)
    }
}

impl LogSink for TracingSink {
    fn write_info(&self, text: &str) {
        tracing::info!(target: TARGET, logger = %self.name, "{}", text);
    }

    fn write_error(&self, text: &str) {
        tracing::error!(target: TARGET, logger = %self.name, "{}", text);
    }
}

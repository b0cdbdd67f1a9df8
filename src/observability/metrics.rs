//! Message counters.
//!
//! # Metrics
//! - `varlog_messages_total` (counter): messages handed to a sink, by severity

use crate::sink::Severity;

pub const MESSAGES_TOTAL: &str = "varlog_messages_total";

/// Count one message written at `severity`.
pub fn record_message(severity: Severity) {
    ::metrics::counter!(MESSAGES_TOTAL, "severity" => severity.as_str()).increment(1);
}

//! Shared helpers for integration tests.

use varlog::{RecordingSink, Severity};

/// Split an error message into its location tag and body.
pub fn split_error(text: &str) -> (&str, &str) {
    text.split_once("\n\t").expect("error message has no location tag")
}

/// The VARS lines of a message, sorted so assertions ignore entry order.
#[allow(dead_code)]
pub fn sorted_var_lines(text: &str) -> Vec<String> {
    let (_, block) = text.split_once("\nVARS:\n").expect("message has no VARS block");
    let mut lines: Vec<String> = block.lines().map(str::to_string).collect();
    lines.sort();
    lines
}

/// Assert the sink saw exactly one message and return it.
pub fn single_entry(sink: &RecordingSink) -> (Severity, String) {
    let mut entries = sink.take();
    assert_eq!(entries.len(), 1, "expected exactly one sink write, got {:?}", entries);
    entries.remove(0)
}

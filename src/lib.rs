//! Debug-variable logging helper.
//!
//! Formats a message plus an optional set of named debug variables into one
//! text block and hands it to a [`LogSink`] at info or error severity. Error
//! messages are prefixed with the caller's `file: function: line` tag.
//!
//! ```
//! use varlog::{log_info, vars, RecordingSink, Severity};
//!
//! let sink = RecordingSink::new();
//! log_info(&sink, "hello", Some(&vars! { "x" => 5 }));
//!
//! assert_eq!(sink.entries(), vec![(Severity::Info, "hello\nVARS:\nx: 5\n".to_string())]);
//! ```

pub mod config;
pub mod location;
pub mod logger;
pub mod observability;
pub mod render;
pub mod sink;

pub use config::schema::VarlogConfig;
pub use location::CallerLocation;
pub use logger::{log_error, log_error_at, log_info, Logger, Vars};
pub use render::{render, Record, Renderer, ToValue, Value};
pub use sink::{LogSink, RecordingSink, Severity, TracingSink};


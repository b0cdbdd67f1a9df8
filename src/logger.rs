//! Message assembly and dispatch.
//!
//! # Message Layout
//! ```text
//! info:   <message>[\nVARS:\n<name>: <value>\n...]
//! error:  <file>: <function>: <line>\n\t<info layout>
//! ```
//!
//! # Design Decisions
//! - Empty or absent variable sets add no VARS block
//! - Exactly one sink write per call; sink failures are the sink's concern
//! - Location capture never fails, missing parts render as `unknown`

use crate::config::schema::VarlogConfig;
use crate::location::CallerLocation;
use crate::observability::metrics;
use crate::render::{default_renderer, Renderer, ToValue, Value};
use crate::sink::{LogSink, Severity};

const VARS_HEADER: &str = "\nVARS:\n";

/// Named debug variables attached to one log call.
///
/// Names are unique; inserting an existing name replaces its value. Entries
/// iterate in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vars {
    entries: Vec<(String, Value)>,
}

impl Vars {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a variable.
    pub fn insert<V: ToValue>(&mut self, name: impl Into<String>, value: V) {
        let name = name.into();
        let value = value.into_value();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with<V: ToValue>(mut self, name: impl Into<String>, value: V) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: ToValue> FromIterator<(K, V)> for Vars {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut vars = Vars::new();
        for (name, value) in iter {
            vars.insert(name, value);
        }
        vars
    }
}

/// Build the info-layout text: the message plus an optional VARS block.
pub fn format_message(renderer: &Renderer, message: &str, vars: Option<&Vars>) -> String {
    let vars = match vars {
        Some(vars) if !vars.is_empty() => vars,
        _ => return message.to_string(),
    };

    let mut out = String::with_capacity(message.len() + VARS_HEADER.len() + vars.len() * 16);
    out.push_str(message);
    out.push_str(VARS_HEADER);
    for (name, value) in vars.iter() {
        out.push_str(name);
        out.push_str(": ");
        out.push_str(&renderer.render(value));
        out.push('\n');
    }
    out
}

/// Build the error-layout text: location tag, newline-tab, info layout.
pub fn format_error(
    renderer: &Renderer,
    location: &CallerLocation,
    message: &str,
    vars: Option<&Vars>,
) -> String {
    format!("{}\n\t{}", location, format_message(renderer, message, vars))
}

/// Log at info severity with the default renderer.
pub fn log_info<S: LogSink + ?Sized>(sink: &S, message: &str, vars: Option<&Vars>) {
    let text = format_message(default_renderer(), message, vars);
    metrics::record_message(Severity::Info);
    sink.write_info(&text);
}

/// Log at error severity, tagged with the caller's file and line.
///
/// The function name is not known on this path and is tagged `unknown`;
/// use [`log_error!`](crate::log_error) or [`log_error_at`] with
/// [`caller_location!`](crate::caller_location) for the full tag.
#[track_caller]
pub fn log_error<S: LogSink + ?Sized>(sink: &S, message: &str, vars: Option<&Vars>) {
    log_error_at(sink, CallerLocation::caller(), message, vars);
}

/// Log at error severity with an explicit location.
pub fn log_error_at<S: LogSink + ?Sized>(
    sink: &S,
    location: CallerLocation,
    message: &str,
    vars: Option<&Vars>,
) {
    let text = format_error(default_renderer(), &location, message, vars);
    metrics::record_message(Severity::Error);
    sink.write_error(&text);
}

/// A sink paired with rendering settings.
#[derive(Debug, Clone)]
pub struct Logger<S> {
    sink: S,
    renderer: Renderer,
    metrics_enabled: bool,
}

impl<S: LogSink> Logger<S> {
    pub fn new(sink: S) -> Self {
        Self::with_renderer(sink, Renderer::default())
    }

    pub fn with_renderer(sink: S, renderer: Renderer) -> Self {
        Self {
            sink,
            renderer,
            metrics_enabled: true,
        }
    }

    /// Build a logger from validated configuration.
    pub fn from_config(sink: S, config: &VarlogConfig) -> Self {
        Self {
            sink,
            renderer: Renderer::from_config(&config.renderer),
            metrics_enabled: config.observability.metrics_enabled,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn info(&self, message: &str, vars: Option<&Vars>) {
        let text = format_message(&self.renderer, message, vars);
        self.emit(Severity::Info, &text);
    }

    /// Error log tagged with the caller's file and line; the function is
    /// tagged `unknown`. Prefer [`log_error!`](crate::log_error).
    #[track_caller]
    pub fn error(&self, message: &str, vars: Option<&Vars>) {
        self.error_at(CallerLocation::caller(), message, vars);
    }

    pub fn error_at(&self, location: CallerLocation, message: &str, vars: Option<&Vars>) {
        let text = format_error(&self.renderer, &location, message, vars);
        self.emit(Severity::Error, &text);
    }

    fn emit(&self, severity: Severity, text: &str) {
        if self.metrics_enabled {
            metrics::record_message(severity);
        }
        self.sink.write(severity, text);
    }
}

/// Build a [`Vars`] set from `name => value` pairs.
///
/// Values are borrowed, so locals stay usable after the call.
#[macro_export]
macro_rules! vars {
    () => {
        $crate::logger::Vars::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut vars = $crate::logger::Vars::new();
        $(vars.insert($name, &$value);)+
        vars
    }};
}

/// Info log through a [`Logger`].
///
/// ```
/// use varlog::{log_info, Logger, RecordingSink};
///
/// let logger = Logger::new(RecordingSink::new());
/// let attempts = 3;
/// log_info!(logger, "retrying"; "attempts" => attempts);
///
/// assert_eq!(logger.sink().last().unwrap(), "retrying\nVARS:\nattempts: 3\n");
/// ```
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $message:expr) => {
        $logger.info($message, None)
    };
    ($logger:expr, $message:expr; $($name:expr => $value:expr),+ $(,)?) => {
        $logger.info($message, Some(&$crate::vars!($($name => $value),+)))
    };
    ($logger:expr, $message:expr, $vars:expr) => {
        $logger.info($message, Some(&$vars))
    };
}

/// Error log through a [`Logger`], tagged with the full call-site location.
///
/// ```
/// use varlog::{log_error, Logger, RecordingSink};
///
/// fn save(logger: &Logger<RecordingSink>) {
///     log_error!(logger, "save failed"; "id" => 7);
/// }
///
/// let logger = Logger::new(RecordingSink::new());
/// save(&logger);
///
/// let text = logger.sink().last().unwrap();
/// let (tag, body) = text.split_once("\n\t").unwrap();
/// assert!(tag.contains("::save: "));
/// assert_eq!(body, "save failed\nVARS:\nid: 7\n");
/// ```
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $message:expr) => {
        $logger.error_at($crate::caller_location!(), $message, None)
    };
    ($logger:expr, $message:expr; $($name:expr => $value:expr),+ $(,)?) => {
        $logger.error_at(
            $crate::caller_location!(),
            $message,
            Some(&$crate::vars!($($name => $value),+)),
        )
    };
    ($logger:expr, $message:expr, $vars:expr) => {
        $logger.error_at($crate::caller_location!(), $message, Some(&$vars))
    };
}

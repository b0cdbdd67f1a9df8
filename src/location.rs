//! Caller location capture for error messages.
//!
//! # Responsibilities
//! - Describe the call site of an error log (`file`, `function`, `line`)
//! - Render the `file: function: line` tag prepended to error messages
//!
//! # Design Decisions
//! - The macro path (`caller_location!`) resolves all three parts at compile time
//! - The `#[track_caller]` path only knows file and line; the function part
//!   falls back to [`UNKNOWN`]
//! - Missing parts never fail a log call, they render as [`UNKNOWN`]

use std::fmt;
use std::panic::Location;

/// Placeholder used for any location part that could not be resolved.
pub const UNKNOWN: &str = "unknown";

/// Source location of the code that issued an error log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallerLocation {
    file: &'static str,
    function: &'static str,
    line: u32,
}

impl CallerLocation {
    /// Create a location from its three parts.
    pub const fn new(file: &'static str, function: &'static str, line: u32) -> Self {
        Self { file, function, line }
    }

    /// A location where nothing could be resolved.
    pub const fn unknown() -> Self {
        Self::new(UNKNOWN, UNKNOWN, 0)
    }

    /// Location of the caller of the enclosing `#[track_caller]` function.
    ///
    /// The function name is not exposed by [`Location`], so it is reported
    /// as [`UNKNOWN`].
    #[track_caller]
    pub fn caller() -> Self {
        Self::from(Location::caller())
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn function(&self) -> &'static str {
        self.function
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    /// Render the `file: function: line` tag.
    pub fn tag(&self) -> String {
        self.to_string()
    }
}

impl Default for CallerLocation {
    fn default() -> Self {
        Self::unknown()
    }
}

impl From<&Location<'static>> for CallerLocation {
    fn from(location: &Location<'static>) -> Self {
        Self::new(location.file(), UNKNOWN, location.line())
    }
}

impl fmt::Display for CallerLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}: {}",
            non_empty(self.file),
            non_empty(self.function),
            self.line
        )
    }
}

fn non_empty(part: &str) -> &str {
    if part.trim().is_empty() {
        UNKNOWN
    } else {
        part
    }
}

/// Path of the function enclosing a [`caller_location!`] expansion.
///
/// `marker` is a nested fn item; its type name is the enclosing path plus
/// `::__here`.
#[doc(hidden)]
pub fn enclosing_function<T>(_marker: T) -> &'static str {
    let mut name = std::any::type_name::<T>();
    name = name.strip_suffix("::__here").unwrap_or(name);
    while let Some(stripped) = name.strip_suffix("::{{closure}}") {
        name = stripped;
    }
    name
}

/// Capture the [`CallerLocation`] of the expansion site.
///
/// ```
/// fn load() -> varlog::CallerLocation {
///     varlog::caller_location!()
/// }
///
/// let location = load();
/// assert!(location.function().ends_with("load"));
/// assert!(location.file().ends_with(".rs"));
/// ```
#[macro_export]
macro_rules! caller_location {
    () => {{
        fn __here() {}
        $crate::location::CallerLocation::new(
            ::std::file!(),
            $crate::location::enclosing_function(__here),
            ::std::line!(),
        )
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_format() {
        let location = CallerLocation::new("src/handlers.rs", "app::handlers::save", 42);
        assert_eq!(location.tag(), "src/handlers.rs: app::handlers::save: 42");
    }

    #[test]
    fn test_empty_parts_render_placeholder() {
        let location = CallerLocation::new("", " ", 7);
        assert_eq!(location.tag(), "unknown: unknown: 7");
        assert_eq!(CallerLocation::unknown().tag(), "unknown: unknown: 0");
    }

    #[test]
    fn test_macro_resolves_enclosing_function() {
        let location = crate::caller_location!();
        assert_eq!(location.file(), file!());
        assert!(location.function().ends_with("test_macro_resolves_enclosing_function"));
        assert!(location.line() > 0);
    }

    #[test]
    fn test_macro_inside_closure_reports_outer_function() {
        let capture = || crate::caller_location!();
        let location = capture();
        assert!(location.function().ends_with("test_macro_inside_closure_reports_outer_function"));
    }

    #[track_caller]
    fn tracked() -> CallerLocation {
        CallerLocation::caller()
    }

    #[test]
    fn test_track_caller_reports_call_site() {
        let expected_line = line!() + 1;
        let location = tracked();
        assert_eq!(location.line(), expected_line);
        assert_eq!(location.file(), file!());
        assert_eq!(location.function(), UNKNOWN);
    }
}

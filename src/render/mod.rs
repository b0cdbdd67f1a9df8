//! Value rendering subsystem.
//!
//! # Data Flow
//! ```text
//! caller value (any T: ToValue)
//!     → convert.rs (T → Value, closed set of categories)
//!     → renderer.rs (Value → String, exclusion list, depth limit)
//!     → logger (VARS block)
//! ```
//!
//! # Design Decisions
//! - Categories are a closed enum; unrecognised shapes fall into `Value::Unknown`
//! - Container, pointer and callable categories render as fixed labels and are
//!   never inspected
//! - Rendering is pure and never panics

pub mod convert;
pub mod renderer;
pub mod value;

use std::sync::OnceLock;

pub use convert::ToValue;
pub use renderer::Renderer;
pub use value::{Field, Opaque, Record, Value};

/// Process-wide renderer with default settings, built on first use.
pub fn default_renderer() -> &'static Renderer {
    static DEFAULT: OnceLock<Renderer> = OnceLock::new();
    DEFAULT.get_or_init(Renderer::default)
}

/// Render a value with the default renderer settings.
pub fn render<T: ToValue + ?Sized>(value: &T) -> String {
    default_renderer().render(&value.to_value())
}

//! Value-to-text rendering.
//!
//! # Output Rules
//! - `Invalid` → `INVALID`
//! - booleans and integers → their literal text
//! - floats → fixed point with `float_precision` digits (default 10)
//! - strings → unescaped
//! - records → `"\n"` then `"\t<name>: <value>\n"` per field, recursively
//! - opaque categories → their fixed label
//! - `Unknown` → empty string
//!
//! # Design Decisions
//! - Excluded field names are compared after normalisation (ASCII lowercase,
//!   underscores removed) so `ProfilePicBlobKey` also hides `profile_pic_blob_key`
//! - Records nested past `max_depth` render as [`MAX_DEPTH_LABEL`]

use std::collections::HashSet;

use crate::config::schema::RendererConfig;
use crate::render::convert::ToValue;
use crate::render::value::{Record, Value};

/// Rendered for absent values.
pub const INVALID_LABEL: &str = "INVALID";

/// Rendered in place of a record nested deeper than the depth limit.
pub const MAX_DEPTH_LABEL: &str = "MAX DEPTH";

/// Field names hidden from every rendered record unless reconfigured.
pub const DEFAULT_EXCLUDED_FIELDS: [&str; 2] = ["ProfilePicBlobKey", "BackgroundPicBlobKey"];

pub const DEFAULT_FLOAT_PRECISION: usize = 10;

pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Converts [`Value`]s into display text.
#[derive(Debug, Clone)]
pub struct Renderer {
    excluded: HashSet<String>,
    float_precision: usize,
    max_depth: usize,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            excluded: DEFAULT_EXCLUDED_FIELDS.iter().map(|name| normalize(name)).collect(),
            float_precision: DEFAULT_FLOAT_PRECISION,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a renderer from validated configuration.
    pub fn from_config(config: &RendererConfig) -> Self {
        Self::default()
            .with_excluded_fields(config.excluded_fields.iter())
            .with_float_precision(config.float_precision)
            .with_max_depth(config.max_depth)
    }

    /// Replace the exclusion list.
    pub fn with_excluded_fields<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.excluded = names.into_iter().map(|name| normalize(name.as_ref())).collect();
        self
    }

    /// Add one name to the exclusion list.
    pub fn exclude(mut self, name: &str) -> Self {
        self.excluded.insert(normalize(name));
        self
    }

    pub fn with_float_precision(mut self, precision: usize) -> Self {
        self.float_precision = precision;
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn float_precision(&self) -> usize {
        self.float_precision
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Whether a record field with this name is hidden.
    pub fn is_excluded(&self, field_name: &str) -> bool {
        self.excluded.contains(&normalize(field_name))
    }

    /// Render any convertible value.
    pub fn render_value<T: ToValue + ?Sized>(&self, value: &T) -> String {
        self.render(&value.to_value())
    }

    pub fn render(&self, value: &Value) -> String {
        self.render_at(value, 0)
    }

    fn render_at(&self, value: &Value, depth: usize) -> String {
        match value {
            Value::Invalid => INVALID_LABEL.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Int(n) => n.to_string(),
            Value::Uint(n) => n.to_string(),
            Value::F32(f) => format_float(*f, f.is_nan(), self.float_precision),
            Value::F64(f) => format_float(*f, f.is_nan(), self.float_precision),
            Value::Str(s) => s.clone(),
            Value::Record(record) => self.render_record(record, depth),
            Value::Opaque(opaque) => opaque.label().to_string(),
            Value::Unknown => String::new(),
        }
    }

    fn render_record(&self, record: &Record, depth: usize) -> String {
        if depth >= self.max_depth {
            return MAX_DEPTH_LABEL.to_string();
        }

        let mut out = String::from("\n");
        for field in record.fields() {
            if self.is_excluded(&field.name) {
                continue;
            }
            out.push('\t');
            out.push_str(&field.name);
            out.push_str(": ");
            out.push_str(&self.render_at(&field.value, depth + 1));
            out.push('\n');
        }
        out
    }
}

fn format_float(value: impl std::fmt::Display, is_nan: bool, precision: usize) -> String {
    if is_nan {
        return "NaN".to_string();
    }
    let text = format!("{:.*}", precision, value);
    match text.as_str() {
        "inf" => "+Inf".to_string(),
        "-inf" => "-Inf".to_string(),
        _ => text,
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML files, and
//! every field has a default so an empty file is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::render::renderer::{DEFAULT_EXCLUDED_FIELDS, DEFAULT_FLOAT_PRECISION, DEFAULT_MAX_DEPTH};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct VarlogConfig {
    /// Value rendering settings.
    pub renderer: RendererConfig,

    /// Process logging settings.
    pub observability: ObservabilityConfig,
}

/// Value rendering configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct RendererConfig {
    /// Digits after the decimal point for floats.
    pub float_precision: usize,

    /// Deepest record nesting rendered before the placeholder is used.
    pub max_depth: usize,

    /// Record field names never rendered.
    pub excluded_fields: Vec<String>,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            float_precision: DEFAULT_FLOAT_PRECISION,
            max_depth: DEFAULT_MAX_DEPTH,
            excluded_fields: DEFAULT_EXCLUDED_FIELDS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Output format of the process-wide tracing subscriber.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human readable, multi-line.
    #[default]
    Pretty,
    /// Human readable, single line.
    Compact,
    /// One JSON object per event.
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Subscriber output format.
    pub log_format: LogFormat,

    /// Logger name attached to events emitted by `TracingSink`.
    pub logger_name: String,

    /// Record message counters through the `metrics` facade.
    pub metrics_enabled: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            logger_name: "varlog".to_string(),
            metrics_enabled: true,
        }
    }
}

//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (precision, depth)
//! - Reject blank exclusion names and unknown log levels
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: VarlogConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;

use crate::config::schema::VarlogConfig;

/// Highest float precision accepted.
pub const MAX_FLOAT_PRECISION: usize = 17;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("renderer.float_precision {0} exceeds maximum {max}", max = MAX_FLOAT_PRECISION)]
    FloatPrecisionTooLarge(usize),

    #[error("renderer.max_depth must be at least 1")]
    ZeroMaxDepth,

    #[error("renderer.excluded_fields[{0}] is blank")]
    BlankExcludedField(usize),

    #[error("observability.log_level {0:?} is not one of trace, debug, info, warn, error")]
    UnknownLogLevel(String),

    #[error("observability.logger_name must not be empty")]
    EmptyLoggerName,
}

/// Check a deserialized configuration, collecting every error found.
pub fn validate_config(config: &VarlogConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let renderer = &config.renderer;
    if renderer.float_precision > MAX_FLOAT_PRECISION {
        errors.push(ValidationError::FloatPrecisionTooLarge(renderer.float_precision));
    }
    if renderer.max_depth == 0 {
        errors.push(ValidationError::ZeroMaxDepth);
    }
    for (i, name) in renderer.excluded_fields.iter().enumerate() {
        if name.trim().is_empty() {
            errors.push(ValidationError::BlankExcludedField(i));
        }
    }

    let observability = &config.observability;
    let level = observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(observability.log_level.clone()));
    }
    if observability.logger_name.trim().is_empty() {
        errors.push(ValidationError::EmptyLoggerName);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&VarlogConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = VarlogConfig::default();
        config.renderer.float_precision = 40;
        config.renderer.max_depth = 0;
        config.renderer.excluded_fields.push("  ".into());
        config.observability.log_level = "loud".into();
        config.observability.logger_name = String::new();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::FloatPrecisionTooLarge(40),
                ValidationError::ZeroMaxDepth,
                ValidationError::BlankExcludedField(2),
                ValidationError::UnknownLogLevel("loud".into()),
                ValidationError::EmptyLoggerName,
            ]
        );
    }

    #[test]
    fn test_log_level_case_insensitive() {
        let mut config = VarlogConfig::default();
        config.observability.log_level = "WARN".into();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_empty_exclusion_list_allowed() {
        let mut config = VarlogConfig::default();
        config.renderer.excluded_fields.clear();
        assert!(validate_config(&config).is_ok());
    }
}

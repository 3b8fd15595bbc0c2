//! Error types for Blinktrade types

use rust_decimal::Decimal;
use thiserror::Error;

/// Configuration validation error
///
/// Raised when an environment, currency, or broker identifier is not part of
/// its closed set of supported values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Identifier outside its closed set
    #[error("Invalid {field}: {value:?}. Valid options are: {}", .valid.join(", "))]
    InvalidConfiguration {
        /// Name of the offending field (environment, currency, broker)
        field: &'static str,
        /// The rejected input
        value: String,
        /// Accepted values for this field
        valid: Vec<&'static str>,
    },
}

impl ConfigError {
    /// Build an `InvalidConfiguration` error
    pub fn invalid(field: &'static str, value: impl Into<String>, valid: Vec<&'static str>) -> Self {
        Self::InvalidConfiguration {
            field,
            value: value.into(),
            valid,
        }
    }

    /// Name of the field that failed validation
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidConfiguration { field, .. } => field,
        }
    }
}

/// Fixed-point encoding error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FixedPointError {
    /// Value does not fit a 64-bit satoshi amount
    #[error("Value {0} does not fit in a satoshi amount")]
    Overflow(Decimal),
}

/// Result type for configuration validation
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_lists_choices() {
        let err = ConfigError::invalid("broker", "42", vec!["1", "3"]);
        let msg = err.to_string();
        assert!(msg.contains("broker"));
        assert!(msg.contains("\"42\""));
        assert!(msg.contains("1, 3"));
        assert_eq!(err.field(), "broker");
    }
}

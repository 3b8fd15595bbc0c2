//! Error types for REST API operations

use blinktrade_auth::AuthError;
use blinktrade_types::{ConfigError, FixedPointError};
use serde_json::Value;

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// Environment, currency, or broker outside its supported set
    #[error(transparent)]
    InvalidConfiguration(#[from] ConfigError),

    /// The exchange rejected an order-related request
    #[error("{message}")]
    OrderRejected {
        /// Human readable context
        message: String,
        /// The rejected response item, verbatim
        detail: Value,
    },

    /// HTTP request or response decoding failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Request timed out
    #[error("Request timed out")]
    Timeout,

    /// Response JSON did not match the expected record shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Response is missing an expected key or has the wrong shape
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    /// Invalid request parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Missing API credentials for trading endpoints
    #[error("Authentication required for this endpoint")]
    AuthRequired,

    /// Credential loading failed
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl RestError {
    /// Build an `OrderRejected` error
    pub fn order_rejected(message: impl Into<String>, detail: Value) -> Self {
        Self::OrderRejected {
            message: message.into(),
            detail,
        }
    }

    /// Returns true if the exchange rejected an order
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::OrderRejected { .. })
    }

    /// Returns true if the failure happened in the HTTP layer
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Timeout)
    }

    /// The raw response item of a rejected order
    pub fn rejection_detail(&self) -> Option<&Value> {
        match self {
            Self::OrderRejected { detail, .. } => Some(detail),
            _ => None,
        }
    }
}

impl From<FixedPointError> for RestError {
    fn from(err: FixedPointError) -> Self {
        Self::InvalidParameter(err.to_string())
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

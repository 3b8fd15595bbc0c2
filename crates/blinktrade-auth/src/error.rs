//! Error types for authentication operations

/// Errors that can occur while building credentials
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Invalid API credentials
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Environment variable not set
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),
}

/// Result type for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;

//! Error types for Contact Card.
//!
//! Rendering and comparing contacts never fails. The only fallible surfaces are
//! configuration loading, defined here with `thiserror`, and validated
//! construction, see [`ValidationError`](crate::domain::ValidationError).

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

//! # Common Error Types
//!
//! Consolidated error handling for the STEMLab client.
//!
//! ## Error Categories
//!
//! - **Network**: the request never produced a response (connect failure, timeout)
//! - **Http**: the backend answered with a 4xx/5xx status
//! - **Unauthorized**: the backend answered 401; the stored credential has
//!   already been cleared and the session invalidated when this is returned
//! - **Decode**: the response body did not match the expected shape
//! - **Validation**: a client-side rule rejected the action before any request
//! - **Storage**: the local durable storage could not be read or written
//! - **Config**: invalid client configuration
//!
//! ## Usage Pattern
//!
//! ```rust
//! use stemlab::core::error::AppError;
//!
//! fn require_selection(count: usize) -> Result<(), AppError> {
//!     if count == 0 {
//!         return Err(AppError::Validation("Please select components first".to_string()));
//!     }
//!     Ok(())
//! }
//!
//! assert!(require_selection(0).is_err());
//! ```

use thiserror::Error;

/// Client-wide error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// No response: connection refused, DNS failure or timeout.
    #[error("Network error: {0}")]
    Network(String),

    /// The backend returned a non-success status.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// 401 from the backend. Credentials are cleared before this surfaces.
    #[error("Unauthorized: session expired")]
    Unauthorized,

    /// Response body did not decode.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Client-side validation failure.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Local durable storage failure.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// HTTP status associated with the error, if the backend produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Http { status, .. } => Some(*status),
            AppError::Unauthorized => Some(401),
            _ => None,
        }
    }

    /// True for failures where the request never got an answer.
    pub fn is_network(&self) -> bool {
        matches!(self, AppError::Network(_))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            AppError::Http {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            AppError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

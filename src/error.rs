//! Error types for sample parameter parsing
//!
//! Messages are written for the API caller: they name the offending field,
//! node index and value, and are forwarded verbatim in fault responses.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Sample service error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required argument was missing (caller contract violation, not bad user input)
    #[error("{0}")]
    InvalidArgument(String),

    /// Client supplied content is malformed or invalid
    #[error("{0}")]
    IllegalParameter(String),
}

impl Error {
    /// Build an `IllegalParameter` error from any message.
    #[must_use]
    pub fn illegal_parameter(message: impl Into<String>) -> Self {
        Self::IllegalParameter(message.into())
    }

    /// Build an `InvalidArgument` error from any message.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// The human readable message carried by the error.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidArgument(message) | Self::IllegalParameter(message) => message,
        }
    }
}

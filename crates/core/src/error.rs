//! Result construction error model.

use thiserror::Error;

/// Result type used when constructing HTTP result values.
pub type ResultResult<T> = Result<T, ResultError>;

/// Failure raised while constructing a result type.
///
/// Only construction is validated. Failures while writing the response
/// (serialization, I/O) belong to the host framework.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResultError {
    /// A required argument was absent (e.g. a redirect without a target).
    #[error("missing required argument: {name}")]
    MissingArgument { name: &'static str },

    /// A value can not be carried in an HTTP header.
    #[error("invalid header value for {name}: {reason}")]
    InvalidHeaderValue { name: &'static str, reason: String },

    /// A status code outside the range HTTP allows.
    #[error("invalid status code: {0}")]
    InvalidStatusCode(u16),
}

impl ResultError {
    pub fn missing_argument(name: &'static str) -> Self {
        Self::MissingArgument { name }
    }

    pub fn invalid_header_value(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidHeaderValue {
            name,
            reason: reason.into(),
        }
    }

    pub fn invalid_status_code(code: u16) -> Self {
        Self::InvalidStatusCode(code)
    }

    /// Stable machine-readable code for error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingArgument { .. } => "missing_argument",
            Self::InvalidHeaderValue { .. } => "invalid_header_value",
            Self::InvalidStatusCode(_) => "invalid_status_code",
        }
    }
}

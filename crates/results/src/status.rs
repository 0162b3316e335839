//! Status-code-only result.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use httpresults_core::{ResultError, ResultResult};

/// A result that only sets a status code and writes no body.
///
/// The code is chosen at runtime, so this type has no static endpoint
/// metadata. Prefer a dedicated result type where one exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCodeResult {
    status: StatusCode,
}

impl StatusCodeResult {
    /// Fails with [`ResultError::InvalidStatusCode`] outside `100..=999`.
    pub fn new(code: u16) -> ResultResult<Self> {
        StatusCode::from_u16(code)
            .map(Self::from_status)
            .map_err(|_| ResultError::invalid_status_code(code))
    }

    pub const fn from_status(status: StatusCode) -> Self {
        Self { status }
    }

    pub fn status_code(&self) -> StatusCode {
        self.status
    }
}

impl From<StatusCode> for StatusCodeResult {
    fn from(status: StatusCode) -> Self {
        Self::from_status(status)
    }
}

impl IntoResponse for StatusCodeResult {
    fn into_response(self) -> Response {
        tracing::debug!(
            result = "StatusCodeResult",
            status = self.status.as_u16(),
            "executing result"
        );
        self.status.into_response()
    }
}

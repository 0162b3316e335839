use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use httpresults_core::{EndpointMetadataContext, EndpointMetadataProvider, ProducesResponseType};

/// 204 No Content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoContent;

impl NoContent {
    pub const STATUS: StatusCode = StatusCode::NO_CONTENT;

    pub fn status_code(&self) -> StatusCode {
        Self::STATUS
    }
}

impl IntoResponse for NoContent {
    fn into_response(self) -> Response {
        tracing::debug!(result = "NoContent", status = Self::STATUS.as_u16(), "executing result");
        Self::STATUS.into_response()
    }
}

impl EndpointMetadataProvider for NoContent {
    fn populate_metadata(ctx: &mut EndpointMetadataContext) {
        ctx.add(ProducesResponseType::status(Self::STATUS.as_u16()));
    }
}

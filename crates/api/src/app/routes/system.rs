use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use httpresults_core::EndpointCatalog;
use httpresults_results::StatusCodeResult;

pub async fn health() -> StatusCodeResult {
    StatusCodeResult::from_status(StatusCode::OK)
}

/// Serve the response documentation collected from the handlers' result types.
pub async fn metadata(Extension(catalog): Extension<Arc<EndpointCatalog>>) -> Response {
    Json(catalog.as_ref()).into_response()
}

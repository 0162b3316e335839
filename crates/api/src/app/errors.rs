use axum::extract::rejection::JsonRejection;

use httpresults_core::ResultError;
use httpresults_results::{Conflict, NotFound, UnprocessableEntity};

use crate::app::dto::ErrorBody;
use crate::app::store::LinkStoreError;

pub fn result_error_to_response(err: ResultError) -> UnprocessableEntity<ErrorBody> {
    UnprocessableEntity::new(ErrorBody::new(err.code(), err.to_string()))
}

/// Body extraction failures answer with the same documented 422 as a bad
/// target, instead of axum's plain-text rejection.
pub fn json_rejection_to_response(rejection: &JsonRejection) -> UnprocessableEntity<ErrorBody> {
    let code = match rejection {
        JsonRejection::JsonDataError(_) => "invalid_body",
        JsonRejection::JsonSyntaxError(_) => "malformed_json",
        JsonRejection::MissingJsonContentType(_) => "unsupported_content_type",
        _ => "unreadable_body",
    };
    UnprocessableEntity::new(ErrorBody::new(code, rejection.body_text()))
}

pub fn not_found(slug: &str) -> NotFound<ErrorBody> {
    NotFound::new(ErrorBody::new(
        "not_found",
        LinkStoreError::NotFound(slug.to_string()).to_string(),
    ))
}

pub fn already_retired(slug: &str) -> Conflict<ErrorBody> {
    Conflict::new(ErrorBody::new(
        "already_retired",
        LinkStoreError::AlreadyRetired(slug.to_string()).to_string(),
    ))
}

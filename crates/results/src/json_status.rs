//! JSON-bodied results sharing [`Gone`](crate::Gone)'s shape.

json_status_result!(
    /// 404 Not Found with a JSON body.
    NotFound,
    ::axum::http::StatusCode::NOT_FOUND
);

json_status_result!(
    /// 409 Conflict with a JSON body.
    Conflict,
    ::axum::http::StatusCode::CONFLICT
);

json_status_result!(
    /// 422 Unprocessable Entity with a JSON body.
    UnprocessableEntity,
    ::axum::http::StatusCode::UNPROCESSABLE_ENTITY
);

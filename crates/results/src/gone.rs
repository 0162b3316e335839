//! 410 Gone with a JSON body.

json_status_result!(
    /// A result that writes a value as JSON with status 410 Gone.
    ///
    /// Use it for resources that existed and were removed on purpose, so
    /// clients can tell them apart from ones that never existed (404). The
    /// body is the JSON serialization of the value, or `null` when built with
    /// [`Gone::empty`].
    ///
    /// Endpoint metadata: one 410 response of type `T`, `application/json`.
    Gone,
    ::axum::http::StatusCode::GONE
);

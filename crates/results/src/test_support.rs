use axum::{
    body::Bytes,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};

/// Execute a result and collect what it wrote.
pub(crate) async fn execute(result: impl IntoResponse) -> (StatusCode, HeaderMap, Bytes) {
    let res: Response = result.into_response();
    let (parts, body) = res.into_parts();
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("failed to read response body");
    (parts.status, parts.headers, bytes)
}

/// Block on [`execute`] for use inside proptest bodies.
pub(crate) fn execute_blocking(result: impl IntoResponse) -> (StatusCode, HeaderMap, Bytes) {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("failed to build test runtime")
        .block_on(execute(result))
}

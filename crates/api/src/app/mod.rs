//! Router wiring for the short-link demo.

pub mod dto;
pub mod errors;
pub mod routes;
pub mod store;

use std::sync::Arc;

use axum::{extract::Extension, routing::get, Router};
use tower::ServiceBuilder;

use httpresults_core::EndpointCatalog;

use self::routes::links::{DeleteLinkResult, GetLinkResult, PutLinkResult};
use self::store::LinkStore;

pub const LINK_PATH: &str = "/links/:slug";

/// Build the router with an empty in-memory store.
pub fn build_app() -> Router {
    build_app_with_store(Arc::new(LinkStore::new()))
}

pub fn build_app_with_store(store: Arc<LinkStore>) -> Router {
    let catalog = Arc::new(endpoint_catalog());

    Router::new()
        .route("/health", get(routes::system::health))
        .route("/metadata", get(routes::system::metadata))
        .route(
            LINK_PATH,
            get(routes::links::get_link)
                .put(routes::links::put_link)
                .delete(routes::links::delete_link),
        )
        .layer(
            ServiceBuilder::new()
                .layer(Extension(store))
                .layer(Extension(catalog)),
        )
}

/// Response documentation for every documented route, derived from the
/// handlers' return types.
pub fn endpoint_catalog() -> EndpointCatalog {
    let mut catalog = EndpointCatalog::new();
    catalog
        .register::<GetLinkResult>("GET", LINK_PATH)
        .register::<PutLinkResult>("PUT", LINK_PATH)
        .register::<DeleteLinkResult>("DELETE", LINK_PATH);
    catalog
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
        let mut req = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(v) => {
                req = req.header(header::CONTENT_TYPE, "application/json");
                Body::from(v.to_string())
            }
            None => Body::empty(),
        };
        app.clone().oneshot(req.body(body).unwrap()).await.unwrap()
    }

    async fn json_body(res: Response) -> Value {
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn link_lifecycle_redirect_then_gone() {
        let app = build_app();

        let res = send(&app, Method::GET, "/links/docs", None).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(res).await["error"], "not_found");

        let res = send(
            &app,
            Method::PUT,
            "/links/docs",
            Some(json!({ "target": "https://example.com/docs" })),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NO_CONTENT);

        let res = send(&app, Method::GET, "/links/docs", None).await;
        assert_eq!(res.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(res.headers()[header::LOCATION], "https://example.com/docs");

        let res = send(&app, Method::DELETE, "/links/docs", None).await;
        assert_eq!(res.status(), StatusCode::NO_CONTENT);

        let res = send(&app, Method::GET, "/links/docs", None).await;
        assert_eq!(res.status(), StatusCode::GONE);
        let body = json_body(res).await;
        assert_eq!(body["slug"], "docs");
        assert_eq!(body["target"], "https://example.com/docs");
        assert!(body["retired_at"].is_string());

        let res = send(&app, Method::DELETE, "/links/docs", None).await;
        assert_eq!(res.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn null_target_is_unprocessable() {
        let store = Arc::new(LinkStore::new());
        let app = build_app_with_store(store.clone());

        let res = send(&app, Method::PUT, "/links/x", Some(json!({ "target": null }))).await;
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = json_body(res).await;
        assert_eq!(body["error"], "missing_argument");
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn unreadable_bodies_answer_with_the_documented_422() {
        let store = Arc::new(LinkStore::new());
        let app = build_app_with_store(store.clone());

        let res = send(&app, Method::PUT, "/links/x", Some(json!({ "target": 5 }))).await;
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(res.headers()[header::CONTENT_TYPE], "application/json");
        assert_eq!(json_body(res).await["error"], "invalid_body");

        let req = Request::builder()
            .method(Method::PUT)
            .uri("/links/x")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("not json"))
            .unwrap();
        let res = app.clone().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json_body(res).await["error"], "malformed_json");

        let req = Request::builder()
            .method(Method::PUT)
            .uri("/links/x")
            .body(Body::from(r#"{"target":"/a"}"#))
            .unwrap();
        let res = app.clone().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json_body(res).await["error"], "unsupported_content_type");

        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn metadata_lists_documented_routes() {
        let app = build_app();

        let res = send(&app, Method::GET, "/metadata", None).await;
        assert_eq!(res.status(), StatusCode::OK);

        let body = json_body(res).await;
        let endpoints = body.as_array().unwrap();
        assert_eq!(endpoints.len(), 3);

        let get = &endpoints[0];
        assert_eq!(get["method"], "GET");
        assert_eq!(get["path"], LINK_PATH);
        let codes: Vec<u64> = get["responses"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["status_code"].as_u64().unwrap())
            .collect();
        assert_eq!(codes, vec![301, 410, 404]);
        assert!(get["responses"][1]["value_type"]
            .as_str()
            .unwrap()
            .ends_with("RetiredLink"));
    }

    #[test]
    fn catalog_matches_handler_result_types() {
        let catalog = endpoint_catalog();
        let delete = catalog.find("DELETE", LINK_PATH).unwrap();
        let codes: Vec<u16> = delete.responses.iter().map(|r| r.status_code).collect();
        assert_eq!(codes, vec![204, 409, 404]);
    }
}

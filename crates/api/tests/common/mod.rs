use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use casedesk_api::config::ServerConfig;
use casedesk_api::router::build_app_router;
use casedesk_api::state::AppState;
use casedesk_store::CaseStore;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router over the given store.
///
/// This mirrors the router construction in `main.rs` so integration
/// tests exercise the same middleware stack (CORS, request ID,
/// timeout, tracing, panic recovery) that production uses.
pub fn build_test_app(store: CaseStore) -> Router {
    let config = test_config();
    let state = AppState {
        store: Arc::new(store),
        config: Arc::new(config.clone()),
    };

    build_app_router(state, &config)
}

/// The app most tests want: seeded with the demonstration records.
pub fn seeded_app() -> Router {
    build_test_app(CaseStore::seeded())
}

/// Issue a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Issue a POST request with a JSON body against the app.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be valid JSON")
}

/// Assert a response is an error with the given status and error code.
pub async fn assert_error(response: Response<Body>, status: StatusCode, code: &str) {
    assert_eq!(response.status(), status);
    let json = body_json(response).await;
    assert_eq!(json["code"], code);
    assert!(json["error"].is_string());
}

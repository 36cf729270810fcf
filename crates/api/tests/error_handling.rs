//! Integration tests for error responses: every failure surfaces as a
//! typed JSON body, never a silent default.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{assert_error, get, seeded_app};
use tower::ServiceExt;

#[tokio::test]
async fn unknown_sort_field_is_rejected() {
    let response = get(seeded_app(), "/api/v1/cases?sortBy=priority").await;
    assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}

#[tokio::test]
async fn unknown_sort_direction_is_rejected() {
    let response = get(seeded_app(), "/api/v1/cases?sortDirection=down").await;
    assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}

#[tokio::test]
async fn lowercase_status_is_rejected() {
    // The wire spellings are exactly "Active" / "Inactive".
    let response = get(seeded_app(), "/api/v1/cases?status=active").await;
    assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}

#[tokio::test]
async fn zero_per_page_is_rejected() {
    let response = get(seeded_app(), "/api/v1/cases?perPage=0").await;
    assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}

#[tokio::test]
async fn zero_page_is_rejected() {
    let response = get(seeded_app(), "/api/v1/cases?page=0").await;
    assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}

#[tokio::test]
async fn non_numeric_case_id_is_rejected() {
    let response = get(seeded_app(), "/api/v1/cases/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_json_body_is_rejected() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/cases")
        .header("content-type", "application/json")
        .body(Body::from("{ not json"))
        .unwrap();

    let response = seeded_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn wrongly_typed_submission_field_is_rejected() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/cases")
        .header("content-type", "application/json")
        .body(Body::from(r#"{ "tags": "not-an-array" }"#))
        .unwrap();

    let response = seeded_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

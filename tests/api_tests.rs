//! Router-level tests that exercise the API surface without any network.
//!
//! Blank or missing city input must be rejected before the first outbound
//! request, so these paths are fully testable offline.

use std::sync::Arc;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use fishspot::api;
use fishspot::config::AppConfig;
use tower::ServiceExt;

fn test_router() -> axum::Router {
    // The key is never sent for the requests exercised here
    api::router(Arc::new(AppConfig::with_api_key("test-key")))
}

#[tokio::test]
async fn health_returns_ok() {
    let response = test_router()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), 1024).await.unwrap();
    assert_eq!(&body[..], b"ok");
}

#[tokio::test]
async fn dashboard_without_city_is_bad_request() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/dashboard")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn dashboard_with_blank_city_is_bad_request_with_message() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/dashboard?city=%20%20%20")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = to_bytes(response.into_body(), 4096).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"], "Please enter a city name.");
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/no-such-route")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// tests/support/helpers.rs
use super::mocks::FixedClock;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use chrono::NaiveDate;
use pageview_stats::application::{
    ports::{pageviews::PageviewsSource, time::Clock},
    services::ApplicationServices,
};
use pageview_stats::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt;

pub fn build_test_state(source: Arc<dyn PageviewsSource>) -> HttpState {
    let clock: Arc<dyn Clock> = Arc::new(FixedClock);
    HttpState {
        services: Arc::new(ApplicationServices::new(source, clock)),
    }
}

pub fn make_test_router(source: Arc<dyn PageviewsSource>) -> axum::Router {
    build_router(build_test_state(source))
}

/// Sends a GET and returns the status with the decoded JSON body.
pub async fn get_json(router: axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(
        content_type.starts_with("application/json"),
        "unexpected content-type {content_type:?} for {uri}"
    );

    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

/// Assert that a response is an error body with the expected status and text.
pub fn assert_error(status: StatusCode, body: &Value, expected_status: StatusCode, expected: &str) {
    assert_eq!(status, expected_status, "body: {body}");
    assert_eq!(body, &serde_json::json!({ "Error": expected }));
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

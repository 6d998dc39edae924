// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use presence_analyzer::config::Config;
use presence_analyzer::routes::create_router;
use presence_analyzer::AppState;
use std::sync::Arc;
use tower::ServiceExt;

/// Create a test app backed by the files in `tests/fixtures`.
#[allow(dead_code)]
pub fn create_test_app() -> axum::Router {
    create_test_app_with(Config::test_default())
}

/// Create a test app with a custom configuration.
#[allow(dead_code)]
pub fn create_test_app_with(config: Config) -> axum::Router {
    create_router(Arc::new(AppState::new(config)))
}

/// Response status, content type and body of a GET request.
pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: String,
    pub body: Vec<u8>,
}

#[allow(dead_code)]
impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("Response should be JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("Response should be UTF-8")
    }
}

/// Send a GET request through the router.
#[allow(dead_code)]
pub async fn get(app: axum::Router, uri: &str) -> TestResponse {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap()
        .to_vec();

    TestResponse {
        status,
        content_type,
        body,
    }
}

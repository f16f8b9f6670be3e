//! Test fixtures for the Zoom proxy tests
//!
//! A config pointing at a wiremock server plus helpers to drive the router.

#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use slotbook_config::{AppConfig, ZoomConfig};
use slotbook_zoom::routes;
use std::sync::Arc;
use tower::ServiceExt; // for `oneshot`
use wiremock::MockServer;

pub const API_KEY: &str = "test-api-key";
pub const API_SECRET: &str = "test-api-secret";
pub const USERNAME: &str = "u1";

/// Creates an AppConfig whose Zoom base URL is `{server}/v2`.
pub fn create_test_config(server: &MockServer) -> Arc<AppConfig> {
    create_config_for(&format!("{}/v2", server.uri()), 5)
}

pub fn create_config_for(api_url: &str, request_timeout_secs: u64) -> Arc<AppConfig> {
    Arc::new(AppConfig {
        zoom: ZoomConfig {
            api_url: api_url.to_string(),
            api_key: API_KEY.to_string(),
            api_secret: API_SECRET.to_string(),
            username: USERNAME.to_string(),
            token_ttl_secs: 60,
            request_timeout_secs,
        },
        ..AppConfig::default()
    })
}

pub fn create_app(config: Arc<AppConfig>) -> Router {
    routes(config).expect("router should build from a valid config")
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, body)
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("GET")
        .body(Body::empty())
        .unwrap()
}

pub fn post_json_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("POST")
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

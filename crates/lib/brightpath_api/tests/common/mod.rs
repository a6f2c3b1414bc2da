//! Test helpers: a scripted upstream and a router wired to it.

#![allow(dead_code)]

#[path = "../../../brightpath_core/tests/common/mod.rs"]
mod upstream;

use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use brightpath_api::AppState;
use brightpath_api::config::ApiConfig;
use brightpath_core::relay::config::UpstreamConfig;
use tower::ServiceExt;

pub use upstream::{BOT_ID, CHAT, CONVERSE, MockUpstream, Scripted, WEBCHAT};

/// Router whose relay points at `upstream_base`.
pub fn app(upstream_base: &str, token: Option<&str>) -> Router {
    let config = ApiConfig {
        bind_addr: "127.0.0.1:0".into(),
        upstream: UpstreamConfig::new(upstream_base, BOT_ID, token.map(str::to_owned))
            .with_timeout(Duration::from_secs(2)),
    };
    brightpath_api::router(AppState::new(config).expect("app state"))
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_owned()))
        .expect("request")
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

/// Sends one request through the router and returns status plus JSON body.
///
/// Panics unless the response is `application/json`.
pub async fn send(app: Router, req: Request<Body>) -> (StatusCode, serde_json::Value) {
    let resp = app.oneshot(req).await.expect("request");
    let status = resp.status();
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    assert!(
        content_type.starts_with("application/json"),
        "expected JSON response, got {content_type:?} with status {status}"
    );
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    let json = serde_json::from_slice(&body).expect("parse JSON");
    (status, json)
}

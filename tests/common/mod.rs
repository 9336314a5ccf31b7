#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, HeaderMap, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use project_notes_backend::app_state::{AppConfig, AppState};
use project_notes_backend::database;
use project_notes_backend::router::create_app_router;
use serde_json::Value;
use tower::ServiceExt;

/// Config for an in-memory database with limits loose enough that tests not
/// about rate limiting or caching never trip them.
pub fn test_config() -> AppConfig {
    AppConfig {
        database_url: "sqlite::memory:".to_string(),
        database_max_connections: 1,
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
        rate_limit_max_requests: 100,
        rate_limit_window_secs: 60,
        stats_cache_ttl_secs: 60,
    }
}

/// Builds the real application router over a fresh in-memory database.
pub async fn test_app(config: AppConfig) -> Router {
    let pool = database::create_pool(&config.database_url, config.database_max_connections)
        .await
        .expect("open in-memory database");
    database::init_schema(&pool).await.expect("initialize schema");
    create_app_router(AppState::with_pool(pool, &config))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("response body is UTF-8")
    }
}

pub async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router never fails");
    let status = response.status();
    let headers = response.headers().clone();
    let body = response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes()
        .to_vec();
    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("build request");
    send(app, request).await
}

/// POSTs a JSON value to /api/notes.
pub async fn post_note(app: &Router, payload: &Value) -> TestResponse {
    post_note_raw(app, payload.to_string()).await
}

/// POSTs an arbitrary body to /api/notes with a JSON content type.
pub async fn post_note_raw(app: &Router, body: String) -> TestResponse {
    let request = Request::builder()
        .method("POST")
        .uri("/api/notes")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .expect("build request");
    send(app, request).await
}

/// POSTs a JSON value to /api/notes with a forwarded client address, so a
/// test can act as a specific client for rate limiting.
pub async fn post_note_from(app: &Router, client: &str, payload: &Value) -> TestResponse {
    let request = Request::builder()
        .method("POST")
        .uri("/api/notes")
        .header(header::CONTENT_TYPE, "application/json")
        .header("x-forwarded-for", client)
        .body(Body::from(payload.to_string()))
        .expect("build request");
    send(app, request).await
}

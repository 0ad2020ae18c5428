#![allow(dead_code)] // not every test file uses every helper

use std::sync::Arc;

use axum::body::{Body, Bytes};
use axum::http::{header, Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tempfile::TempDir;
use tower::ServiceExt;

use folio_api::config::{AdminCredentials, ServerConfig};
use folio_api::router::build_app_router;
use folio_api::state::AppState;
use folio_core::store::LocalUploadStore;

/// Credentials wired into the test configuration.
pub const TEST_ADMIN_USERNAME: &str = "admin";
pub const TEST_ADMIN_PASSWORD: &str = "test-password-123";

/// Build a test `ServerConfig` with safe defaults and known admin secrets.
pub fn test_config(upload_dir: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        upload_dir: upload_dir.to_string(),
        max_upload_bytes: 5 * 1024 * 1024,
        session_expiry_hours: 12,
        admin: AdminCredentials {
            username: Some(TEST_ADMIN_USERNAME.to_string()),
            password: Some(TEST_ADMIN_PASSWORD.to_string()),
        },
    }
}

/// Build the full application router backed by a throwaway upload
/// directory, mirroring the construction in `main.rs` so tests exercise
/// the production middleware stack.
///
/// Returns the tempdir guard alongside the router; keep it alive for the
/// duration of the test so stored files survive.
pub fn build_test_app(pool: PgPool) -> (Router, TempDir) {
    let upload_root = tempfile::tempdir().expect("failed to create temp upload dir");
    let config = test_config(upload_root.path().to_str().unwrap());

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        uploads: Arc::new(LocalUploadStore::new(&config.upload_dir)),
        mailer: None,
    };

    (build_app_router(state, &config), upload_root)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn get_with_cookie(app: Router, uri: &str, cookie: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .header(header::COOKIE, cookie)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// POST an `application/x-www-form-urlencoded` body.
pub async fn post_form(app: Router, uri: &str, body: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// POST with no body (e.g. the delete endpoint), carrying a session cookie.
pub async fn post_with_cookie(app: Router, uri: &str, cookie: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::COOKIE, cookie)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// POST a multipart body, optionally carrying a session cookie.
pub async fn post_multipart(
    app: Router,
    uri: &str,
    cookie: Option<&str>,
    body: Vec<u8>,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, multipart_content_type());
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    app.oneshot(builder.body(Body::from(body)).unwrap())
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

pub async fn body_bytes(response: Response<Body>) -> Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap()
}

/// The `Location` header of a redirect response.
pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("response should carry a Location header")
        .to_str()
        .unwrap()
}

// ---------------------------------------------------------------------------
// Session helpers
// ---------------------------------------------------------------------------

/// Log in with the test credentials, returning the `name=value` cookie
/// pair to send on subsequent requests.
pub async fn login(app: Router) -> String {
    let body = format!("username={TEST_ADMIN_USERNAME}&password={TEST_ADMIN_PASSWORD}");
    let response = post_form(app, "/admin/login", &body).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/admin");

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("login should set the session cookie")
        .to_str()
        .unwrap();
    set_cookie.split(';').next().unwrap().to_string()
}

// ---------------------------------------------------------------------------
// Multipart body builder
// ---------------------------------------------------------------------------

pub const MULTIPART_BOUNDARY: &str = "folio-test-boundary";

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}")
}

/// Hand-rolled multipart body builder for upload tests.
#[derive(Default)]
pub struct MultipartBuilder {
    body: Vec<u8>,
}

impl MultipartBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{MULTIPART_BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, filename: &str, bytes: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{MULTIPART_BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(bytes);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    pub fn finish(mut self) -> Vec<u8> {
        self.body
            .extend_from_slice(format!("--{MULTIPART_BOUNDARY}--\r\n").as_bytes());
        self.body
    }
}

/// A minimal valid project form with the given title.
pub fn project_form(title: &str) -> MultipartBuilder {
    MultipartBuilder::new()
        .text("title", title)
        .text("short_description", &format!("{title} in one line"))
}

// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use serde_json::Value;

use super::mocks;
use municipal_portal::application::ports::security::TokenVerifier;
use municipal_portal::application::services::ApplicationServices;
use municipal_portal::infrastructure::util::DefaultSlugGenerator;
use municipal_portal::presentation::http::routes::{RouterOptions, build_router};
use municipal_portal::presentation::http::state::HttpState;

pub const MULTIPART_BOUNDARY: &str = "municipal-test-boundary";

/// Application services wired to in-memory adapters, with handles kept for assertions.
pub struct TestContext {
    pub services: Arc<ApplicationServices>,
    pub news: Arc<mocks::InMemoryNewsRepository>,
    pub municipal: Arc<mocks::InMemoryServiceRepository>,
    pub categories: Arc<mocks::InMemoryCategoryRepository>,
    pub blobs: Arc<mocks::RecordingBlobStore>,
}

impl TestContext {
    pub fn router(&self) -> axum::Router {
        let state = HttpState {
            services: Arc::clone(&self.services),
        };
        let options = RouterOptions {
            media_root: std::env::temp_dir().join(format!("municipal-test-{}", uuid::Uuid::new_v4())),
            ..RouterOptions::default()
        };
        build_router(state, options)
    }
}

pub fn make_services() -> TestContext {
    let news = Arc::new(mocks::InMemoryNewsRepository::default());
    let municipal = Arc::new(mocks::InMemoryServiceRepository::default());
    let categories = Arc::new(mocks::InMemoryCategoryRepository::default());
    let blobs = Arc::new(mocks::RecordingBlobStore::default());
    let verifier: Arc<dyn TokenVerifier> = Arc::new(mocks::DummyTokenVerifier);

    let services = Arc::new(ApplicationServices::new(
        news.clone(),
        municipal.clone(),
        categories.clone(),
        verifier,
        blobs.clone(),
        Arc::new(mocks::DummyClock::default()),
        Arc::new(DefaultSlugGenerator),
    ));

    TestContext {
        services,
        news,
        municipal,
        categories,
        blobs,
    }
}

pub async fn make_test_router() -> axum::Router {
    make_services().router()
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

pub fn json_request(method: Method, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, bearer(token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn empty_request(method: Method, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, bearer(token));
    }
    builder.body(Body::empty()).unwrap()
}

/// Multipart form with text fields and an optional `image` file part.
pub fn multipart_request(
    uri: &str,
    token: Option<&str>,
    fields: &[(&str, &str)],
    image: Option<(&str, &[u8])>,
) -> Request<Body> {
    let mut payload = Vec::new();
    for (name, value) in fields {
        payload.extend_from_slice(
            format!(
                "--{MULTIPART_BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((file_name, bytes)) = image {
        payload.extend_from_slice(
            format!(
                "--{MULTIPART_BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        payload.extend_from_slice(bytes);
        payload.extend_from_slice(b"\r\n");
    }
    payload.extend_from_slice(format!("--{MULTIPART_BOUNDARY}--\r\n").as_bytes());

    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
        );
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, bearer(token));
    }
    builder.body(Body::from(payload)).unwrap()
}

pub async fn json_body(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = json_body(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}

use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use municipal_portal::presentation::http::openapi::docs_router;
use tower::ServiceExt; // for oneshot

mod support;

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn docs_router_get_openapi_json_returns_ok_and_etag() {
    let app = docs_router();

    let resp = app.oneshot(get("/openapi.json")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().get(header::ETAG).is_some());

    let bytes = body::to_bytes(resp.into_body(), 4 * 1024 * 1024).await.unwrap();
    let doc: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert!(doc["paths"]["/api/v1/news"].is_object());
    assert!(doc["paths"]["/api/v1/services/{id}"].is_object());
    assert!(doc["components"]["securitySchemes"]["bearerAuth"].is_object());
}

#[tokio::test]
async fn docs_router_head_with_if_none_match_returns_304() {
    let app = docs_router();
    let resp = app.clone().oneshot(get("/openapi.json")).await.unwrap();
    let etag = resp
        .headers()
        .get(header::ETAG)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();

    let head_req = Request::builder()
        .method(Method::HEAD)
        .uri("/openapi.json")
        .header(header::IF_NONE_MATCH, etag.as_str())
        .body(Body::empty())
        .unwrap();
    let head_resp = app.clone().oneshot(head_req).await.unwrap();
    assert_eq!(head_resp.status(), StatusCode::NOT_MODIFIED);
    if let Some(cl) = head_resp.headers().get(header::CONTENT_LENGTH) {
        assert_eq!(cl.to_str().unwrap(), "0");
    }

    // Weak validators and lists of tags match too.
    let get_req = Request::builder()
        .method(Method::GET)
        .uri("/openapi.json")
        .header(header::IF_NONE_MATCH, format!("\"stale\", W/{etag}"))
        .body(Body::empty())
        .unwrap();
    let get_resp = app.oneshot(get_req).await.unwrap();
    assert_eq!(get_resp.status(), StatusCode::NOT_MODIFIED);
}

#[tokio::test]
async fn full_router_serves_docs() {
    let app = support::make_test_router().await;

    let resp = app.clone().oneshot(get("/openapi.json")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app.oneshot(get("/redoc")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

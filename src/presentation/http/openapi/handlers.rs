// src/presentation/http/openapi/handlers.rs
use axum::{
    body::Body,
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use super::{OPENAPI_CONTENT_TYPE_JSON, openapi_bytes, openapi_etag};

fn etag_header() -> HeaderValue {
    // The digest is hex inside quotes, always a valid header value.
    HeaderValue::from_str(openapi_etag()).unwrap_or_else(|_| HeaderValue::from_static("\"\""))
}

fn not_modified_response() -> Response {
    (StatusCode::NOT_MODIFIED, [(header::ETAG, etag_header())]).into_response()
}

fn ok_response(body: Body) -> Response {
    let length = HeaderValue::from(openapi_bytes().len());
    (
        StatusCode::OK,
        [
            (header::ETAG, etag_header()),
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static(OPENAPI_CONTENT_TYPE_JSON),
            ),
            (header::CONTENT_LENGTH, length),
        ],
        body,
    )
        .into_response()
}

/// GET /openapi.json, answering 304 when `If-None-Match` names the current ETag.
pub async fn serve_openapi(headers: HeaderMap) -> Response {
    if inm_matches(&headers, openapi_etag()) {
        return not_modified_response();
    }
    ok_response(Body::from(openapi_bytes().clone()))
}

/// HEAD /openapi.json: GET semantics without a body.
pub async fn head_openapi(headers: HeaderMap) -> Response {
    if inm_matches(&headers, openapi_etag()) {
        return not_modified_response();
    }
    ok_response(Body::empty())
}

/// Weak comparison over every listed tag, `*` included.
fn inm_matches(headers: &HeaderMap, etag: &str) -> bool {
    let current = opaque(etag);
    headers
        .get_all(header::IF_NONE_MATCH)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .any(|candidate| candidate == "*" || opaque(candidate) == current)
}

fn opaque(tag: &str) -> &str {
    let tag = tag.strip_prefix("W/").unwrap_or(tag);
    tag.trim_matches('"')
}

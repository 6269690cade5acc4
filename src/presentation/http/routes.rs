// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{categories, municipal, news},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
    routing::get,
};
use std::{path::PathBuf, time::Duration};
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Deployment knobs the router needs besides application state.
#[derive(Debug, Clone)]
pub struct RouterOptions {
    /// `*` allows any origin.
    pub allowed_origins: Vec<String>,
    pub max_upload_bytes: usize,
    /// Uploaded images are served from `<media_root>/images`.
    pub media_root: PathBuf,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["http://localhost:3000".into()],
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            media_root: PathBuf::from("wwwroot"),
        }
    }
}

pub fn build_router(state: HttpState, options: RouterOptions) -> Router {
    let images = ServeDir::new(options.media_root.join("images"));

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route(
            "/api/v1/news",
            get(news::list_visible_news).post(news::create_news),
        )
        .route("/api/v1/news/all", get(news::list_all_news))
        .route("/api/v1/news/by-slug/{slug}", get(news::get_news_by_slug))
        .route(
            "/api/v1/news/{id}",
            get(news::get_news_by_id)
                .put(news::update_news)
                .delete(news::delete_news),
        )
        .route(
            "/api/v1/services",
            get(municipal::list_visible_services).post(municipal::create_service),
        )
        .route("/api/v1/services/all", get(municipal::list_all_services))
        .route(
            "/api/v1/services/by-slug/{slug}",
            get(municipal::get_service_by_slug),
        )
        .route(
            "/api/v1/services/{id}",
            get(municipal::get_service_by_id)
                .put(municipal::update_service)
                .delete(municipal::delete_service),
        )
        .route(
            "/api/v1/service-categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/api/v1/service-categories/{id}",
            get(categories::get_category)
                .put(categories::rename_category)
                .delete(categories::delete_category),
        )
        .nest_service("/images", images)
        .layer(DefaultBodyLimit::max(options.max_upload_bytes))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&options.allowed_origins))
        .layer(Extension(state))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::IF_NONE_MATCH])
        .max_age(Duration::from_secs(3600));

    if allowed_origins.iter().any(|origin| origin == "*") {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    cors.allow_origin(AllowOrigin::list(origins))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}

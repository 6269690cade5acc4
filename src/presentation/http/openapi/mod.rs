// src/presentation/http/openapi/mod.rs
mod handlers;

use crate::application::dto::{
    AuthTokenDto, CategoryDto, MunicipalServiceDto, NewsItemDto, PaginatedResult,
};
use crate::domain::municipal::ServiceStatus;
use crate::presentation::http::controllers::{categories, municipal, news};
use crate::presentation::http::error::ErrorResponse;
use axum::{Router, routing::get};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path, sync::OnceLock};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};

pub use handlers::{head_openapi, serve_openapi};

const OPENAPI_CONTENT_TYPE_JSON: &str = "application/json";
const DEFAULT_SNAPSHOT_PATH: &str = "openapi/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        news::create_news,
        news::list_visible_news,
        news::list_all_news,
        news::get_news_by_slug,
        news::get_news_by_id,
        news::update_news,
        news::delete_news,
        municipal::create_service,
        municipal::list_visible_services,
        municipal::list_all_services,
        municipal::get_service_by_slug,
        municipal::get_service_by_id,
        municipal::update_service,
        municipal::delete_service,
        categories::list_categories,
        categories::get_category,
        categories::create_category,
        categories::rename_category,
        categories::delete_category,
        crate::presentation::http::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            ErrorResponse,
            ServiceStatus,
            NewsItemDto,
            MunicipalServiceDto,
            CategoryDto,
            AuthTokenDto,
            PaginatedResult<NewsItemDto>,
            PaginatedResult<MunicipalServiceDto>,
            news::CreateNewsForm,
            news::UpdateNewsRequest,
            municipal::CreateServiceForm,
            municipal::UpdateServiceRequest,
            categories::CategoryRequest
        )
    ),
    tags(
        (name = "News", description = "Municipal news"),
        (name = "Services", description = "Municipal services"),
        (name = "Categories", description = "Service categories"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Municipal Portal API",
        description = "News, municipal services and service categories",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));
    }
}

/// Serialized document, built once per process.
pub(crate) fn openapi_bytes() -> &'static Bytes {
    static BYTES: OnceLock<Bytes> = OnceLock::new();
    BYTES.get_or_init(|| {
        // Serializing a derived document cannot fail; fall back to an empty object anyway.
        let json = serde_json::to_vec(&ApiDoc::openapi()).unwrap_or_else(|_| b"{}".to_vec());
        Bytes::from(json)
    })
}

/// Strong ETag: quoted blake3 digest of the document.
pub(crate) fn openapi_etag() -> &'static str {
    static ETAG: OnceLock<String> = OnceLock::new();
    ETAG.get_or_init(|| format!("\"{}\"", blake3::hash(openapi_bytes()).to_hex()))
}

pub fn docs_router() -> Router {
    let redoc = Redoc::with_url("/redoc", ApiDoc::openapi());
    Router::new()
        .route("/openapi.json", get(serve_openapi).head(head_openapi))
        .merge(redoc)
}

/// Write the pretty-printed document to `OPENAPI_SNAPSHOT_PATH` (default `openapi/openapi.json`).
pub fn write_openapi_snapshot() -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    tracing::info!(path = %path.display(), "wrote OpenAPI snapshot");
    Ok(())
}

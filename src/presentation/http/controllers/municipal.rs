// src/presentation/http/controllers/municipal.rs
use crate::application::{
    commands::municipal::{CreateServiceCommand, DeleteServiceCommand, UpdateServiceCommand},
    dto::{MunicipalServiceDto, PaginatedResult},
};
use crate::domain::municipal::ServiceStatus;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{
    ApiJson, ApiPath, ApiQuery, Authenticated, MaybeAuthenticated,
};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::upload::FormFields;
use axum::{Extension, Json, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::{ListParams, double_option};

/// Multipart form accepted by `POST /api/v1/services`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateServiceForm {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Status name or code (0 active, 1 inactive, 2 suspended). Defaults to active.
    pub status: Option<String>,
    pub category_id: Option<Uuid>,
    #[schema(value_type = Option<String>, format = Binary)]
    pub image: Option<Vec<u8>>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateServiceRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<ServiceStatus>,
    pub image_url: Option<String>,
    /// `null` detaches the category, omitting the field keeps it.
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<Uuid>, nullable)]
    pub category_id: Option<Option<Uuid>>,
}

#[utoipa::path(
    post,
    path = "/api/v1/services",
    request_body(content = CreateServiceForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Service created.", body = MunicipalServiceDto),
        (status = 400, description = "Invalid input or unknown category.", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse),
        (status = 403, description = "Missing services:create.", body = ErrorResponse),
        (status = 409, description = "Slug conflict.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Services"
)]
pub async fn create_service(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    form: FormFields,
) -> HttpResult<(StatusCode, Json<MunicipalServiceDto>)> {
    let command = CreateServiceCommand {
        title: form.required("title")?,
        description: form.text("description").unwrap_or_default().to_owned(),
        status: form.parsed("status")?.unwrap_or_default(),
        category_id: form.parsed("category_id")?,
        image: form.image,
    };

    let created = state
        .services
        .service_commands
        .create_service(&user, command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/api/v1/services",
    params(ListParams),
    responses(
        (status = 200, description = "Active services, one page.", body = PaginatedResult<MunicipalServiceDto>),
        (status = 400, description = "Invalid paging.", body = ErrorResponse)
    ),
    tag = "Services"
)]
pub async fn list_visible_services(
    Extension(state): Extension<HttpState>,
    ApiQuery(params): ApiQuery<ListParams>,
) -> HttpResult<Json<PaginatedResult<MunicipalServiceDto>>> {
    state
        .services
        .service_queries
        .list_visible_services(params.into())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/services/all",
    params(ListParams),
    responses(
        (status = 200, description = "Services in every status.", body = PaginatedResult<MunicipalServiceDto>),
        (status = 401, description = "Anonymous caller.", body = ErrorResponse),
        (status = 403, description = "Missing services:view:hidden.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Services"
)]
pub async fn list_all_services(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    ApiQuery(params): ApiQuery<ListParams>,
) -> HttpResult<Json<PaginatedResult<MunicipalServiceDto>>> {
    state
        .services
        .service_queries
        .list_all_services(actor.0.as_ref(), params.into())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/services/by-slug/{slug}",
    params(("slug" = String, Path, description = "Service slug")),
    responses(
        (status = 200, description = "Service.", body = MunicipalServiceDto),
        (status = 404, description = "Missing or not active.", body = ErrorResponse)
    ),
    tag = "Services"
)]
pub async fn get_service_by_slug(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    ApiPath(slug): ApiPath<String>,
) -> HttpResult<Json<MunicipalServiceDto>> {
    state
        .services
        .service_queries
        .get_service_by_slug(actor.0.as_ref(), &slug)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/services/{id}",
    params(("id" = Uuid, Path, description = "Service id")),
    responses(
        (status = 200, description = "Service.", body = MunicipalServiceDto),
        (status = 404, description = "Missing or not active.", body = ErrorResponse)
    ),
    tag = "Services"
)]
pub async fn get_service_by_id(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    ApiPath(id): ApiPath<Uuid>,
) -> HttpResult<Json<MunicipalServiceDto>> {
    state
        .services
        .service_queries
        .get_service_by_id(actor.0.as_ref(), id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/services/{id}",
    params(("id" = Uuid, Path, description = "Service id")),
    request_body = UpdateServiceRequest,
    responses(
        (status = 200, description = "Updated service.", body = MunicipalServiceDto),
        (status = 400, description = "Invalid input or unknown category.", body = ErrorResponse),
        (status = 403, description = "Missing services:update.", body = ErrorResponse),
        (status = 404, description = "Unknown id.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Services"
)]
pub async fn update_service(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<UpdateServiceRequest>,
) -> HttpResult<Json<MunicipalServiceDto>> {
    let command = UpdateServiceCommand {
        id,
        title: payload.title,
        description: payload.description,
        status: payload.status,
        image_url: payload.image_url,
        category_id: payload.category_id,
    };

    state
        .services
        .service_commands
        .update_service(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/services/{id}",
    params(("id" = Uuid, Path, description = "Service id")),
    responses(
        (status = 204, description = "Deleted."),
        (status = 403, description = "Missing services:delete.", body = ErrorResponse),
        (status = 404, description = "Unknown id.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Services"
)]
pub async fn delete_service(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ApiPath(id): ApiPath<Uuid>,
) -> HttpResult<StatusCode> {
    state
        .services
        .service_commands
        .delete_service(&user, DeleteServiceCommand { id })
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}

// src/presentation/http/controllers/news.rs
use crate::application::{
    commands::news::{CreateNewsCommand, DeleteNewsCommand, UpdateNewsCommand},
    dto::{NewsItemDto, PaginatedResult},
};
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

use super::ListParams;

/// Multipart form accepted by `POST /api/v1/news`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateNewsForm {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Defaults to `true`.
    pub visibility: Option<bool>,
    #[schema(value_type = Option<String>, format = Binary)]
    pub image: Option<Vec<u8>>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateNewsRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub visibility: Option<bool>,
    pub image_url: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/v1/news",
    request_body(content = CreateNewsForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "News item created.", body = NewsItemDto),
        (status = 400, description = "Invalid input.", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse),
        (status = 403, description = "Missing news:create.", body = ErrorResponse),
        (status = 409, description = "Slug conflict.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "News"
)]
pub async fn create_news(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    form: FormFields,
) -> HttpResult<(StatusCode, Json<NewsItemDto>)> {
    let command = CreateNewsCommand {
        title: form.required("title")?,
        description: form.text("description").unwrap_or_default().to_owned(),
        visibility: form.flag("visibility")?.unwrap_or(true),
        image: form.image,
    };

    let created = state
        .services
        .news_commands
        .create_news(&user, command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/api/v1/news",
    params(ListParams),
    responses(
        (status = 200, description = "Visible news, one page.", body = PaginatedResult<NewsItemDto>),
        (status = 400, description = "Invalid paging.", body = ErrorResponse)
    ),
    tag = "News"
)]
pub async fn list_visible_news(
    Extension(state): Extension<HttpState>,
    ApiQuery(params): ApiQuery<ListParams>,
) -> HttpResult<Json<PaginatedResult<NewsItemDto>>> {
    state
        .services
        .news_queries
        .list_visible_news(params.into())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/news/all",
    params(ListParams),
    responses(
        (status = 200, description = "All news including hidden items.", body = PaginatedResult<NewsItemDto>),
        (status = 401, description = "Anonymous caller.", body = ErrorResponse),
        (status = 403, description = "Missing news:view:hidden.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "News"
)]
pub async fn list_all_news(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    ApiQuery(params): ApiQuery<ListParams>,
) -> HttpResult<Json<PaginatedResult<NewsItemDto>>> {
    state
        .services
        .news_queries
        .list_all_news(actor.0.as_ref(), params.into())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/news/by-slug/{slug}",
    params(("slug" = String, Path, description = "News slug")),
    responses(
        (status = 200, description = "News item.", body = NewsItemDto),
        (status = 404, description = "Missing or hidden.", body = ErrorResponse)
    ),
    tag = "News"
)]
pub async fn get_news_by_slug(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    ApiPath(slug): ApiPath<String>,
) -> HttpResult<Json<NewsItemDto>> {
    state
        .services
        .news_queries
        .get_news_by_slug(actor.0.as_ref(), &slug)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/news/{id}",
    params(("id" = Uuid, Path, description = "News id")),
    responses(
        (status = 200, description = "News item.", body = NewsItemDto),
        (status = 404, description = "Missing or hidden.", body = ErrorResponse)
    ),
    tag = "News"
)]
pub async fn get_news_by_id(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    ApiPath(id): ApiPath<Uuid>,
) -> HttpResult<Json<NewsItemDto>> {
    state
        .services
        .news_queries
        .get_news_by_id(actor.0.as_ref(), id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/news/{id}",
    params(("id" = Uuid, Path, description = "News id")),
    request_body = UpdateNewsRequest,
    responses(
        (status = 200, description = "Updated news item.", body = NewsItemDto),
        (status = 400, description = "Invalid input.", body = ErrorResponse),
        (status = 403, description = "Missing news:update.", body = ErrorResponse),
        (status = 404, description = "Unknown id.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "News"
)]
pub async fn update_news(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<UpdateNewsRequest>,
) -> HttpResult<Json<NewsItemDto>> {
    let command = UpdateNewsCommand {
        id,
        title: payload.title,
        description: payload.description,
        visibility: payload.visibility,
        image_url: payload.image_url,
    };

    state
        .services
        .news_commands
        .update_news(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/news/{id}",
    params(("id" = Uuid, Path, description = "News id")),
    responses(
        (status = 204, description = "Deleted."),
        (status = 403, description = "Missing news:delete.", body = ErrorResponse),
        (status = 404, description = "Unknown id.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "News"
)]
pub async fn delete_news(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    ApiPath(id): ApiPath<Uuid>,
) -> HttpResult<StatusCode> {
    state
        .services
        .news_commands
        .delete_news(&user, DeleteNewsCommand { id })
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}

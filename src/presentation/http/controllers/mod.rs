// src/presentation/http/controllers/mod.rs
pub mod categories;
pub mod municipal;
pub mod news;

use serde::{Deserialize, Deserializer};
use utoipa::IntoParams;
use uuid::Uuid;

use crate::application::queries::ListingParams;

/// Query string accepted by every paginated listing.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// 1-based page number, defaults to 1.
    pub page: Option<u32>,
    /// Items per page, defaults to 10 and is capped at 100.
    pub page_size: Option<u32>,
    /// Case-insensitive match on title or description.
    pub search: Option<String>,
    /// `created_at`, `updated_at` or `title`; anything else uses the default order.
    pub sort_by: Option<String>,
    /// `asc` or `desc` (default).
    pub sort_direction: Option<String>,
    /// Only honoured by the `/all` listings.
    pub visibility: Option<bool>,
    /// Only honoured by service listings.
    pub category_id: Option<Uuid>,
}

impl From<ListParams> for ListingParams {
    fn from(params: ListParams) -> Self {
        Self {
            page: params.page,
            page_size: params.page_size,
            search: params.search,
            sort_by: params.sort_by,
            sort_direction: params.sort_direction,
            visibility: params.visibility,
            category_id: params.category_id,
        }
    }
}

/// Keeps an explicit `null` apart from an absent field.
pub(crate) fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

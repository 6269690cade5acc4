// src/application/queries/listing.rs
use uuid::Uuid;

use crate::{
    application::error::ApplicationResult,
    domain::listing::{
        DEFAULT_PAGE_SIZE, ListFilter, ListQuery, PageRequest, SearchTerm, SortOrder,
        VisibilityFilter,
    },
};

/// Raw listing parameters as they arrive from a client.
#[derive(Debug, Clone, Default)]
pub struct ListingParams {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_direction: Option<String>,
    /// Only honoured by the unrestricted listings.
    pub visibility: Option<bool>,
    pub category_id: Option<Uuid>,
}

impl ListingParams {
    pub(crate) fn into_query(self, visibility: VisibilityFilter) -> ApplicationResult<ListQuery> {
        let page = PageRequest::new(
            self.page.unwrap_or(1),
            self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        )?;
        let filter = ListFilter {
            search: SearchTerm::parse(self.search.as_deref())?,
            category_id: self.category_id,
            visibility,
        };
        let sort = SortOrder::from_params(self.sort_by.as_deref(), self.sort_direction.as_deref());
        Ok(ListQuery::new(filter, sort, page))
    }

    /// Visibility requested by the caller, for listings that allow choosing it.
    pub(crate) fn requested_visibility(&self) -> VisibilityFilter {
        VisibilityFilter::from_flag(self.visibility)
    }
}

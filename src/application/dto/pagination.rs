use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::listing::PageRequest;

/// One page of a listing plus what a client needs to render pagination controls.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

impl<T> PaginatedResult<T> {
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            page: request.page(),
            page_size: request.page_size(),
            total_pages: request.total_pages(total),
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PaginatedResult<U> {
        PaginatedResult {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            page_size: self.page_size,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_follows_request() {
        let request = PageRequest::new(2, 4).unwrap();
        let page = PaginatedResult::new(vec![1, 2, 3, 4], 10, request);
        assert_eq!(page.page, 2);
        assert_eq!(page.page_size, 4);
        assert_eq!(page.total_pages, 3);

        let mapped = page.map(|n| n * 10);
        assert_eq!(mapped.items, vec![10, 20, 30, 40]);
        assert_eq!(mapped.total, 10);
    }
}

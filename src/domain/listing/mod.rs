// src/domain/listing/mod.rs
//! Filter, sort and pagination values shared by every listing.
//!
//! Each stage is a plain value: [`ListFilter`] is a predicate, [`SortOrder`] a
//! comparator and [`PageRequest`] a window. Repositories either translate them
//! into SQL or run [`ListQuery::apply`] over records held in memory.
mod filter;
mod page;
mod query;
mod sort;

pub use filter::{ListFilter, SearchTerm, VisibilityFilter};
pub use page::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageRequest};
pub use query::{ListQuery, Listable};
pub use sort::{SortDirection, SortField, SortOrder};

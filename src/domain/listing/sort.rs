// src/domain/listing/sort.rs
use std::cmp::Ordering;

use super::Listable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    CreatedAt,
    UpdatedAt,
    Title,
}

impl SortField {
    /// Accepts `created_at`, `createdAt`, `CREATEDAT`, ...; anything else is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized: String = raw
            .trim()
            .chars()
            .filter(|c| *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "createdat" => Some(Self::CreatedAt),
            "updatedat" => Some(Self::UpdatedAt),
            "title" => Some(Self::Title),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Only an explicit `asc` sorts ascending.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|v| v.trim().to_ascii_lowercase()) {
            Some(v) if v == "asc" => Self::Asc,
            _ => Self::Desc,
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortOrder {
    /// Missing or unknown fields fall back to [`SortOrder::default`].
    pub fn from_params(field: Option<&str>, direction: Option<&str>) -> Self {
        match field.and_then(SortField::parse) {
            Some(field) => Self {
                field,
                direction: SortDirection::parse(direction),
            },
            None => Self::default(),
        }
    }

    /// Ties on the sort field are broken by id in the same direction.
    pub fn compare<T: Listable>(&self, a: &T, b: &T) -> Ordering {
        let primary = match self.field {
            SortField::CreatedAt => a.created_at().cmp(&b.created_at()),
            SortField::UpdatedAt => a.updated_at().cmp(&b.updated_at()),
            SortField::Title => a.title().to_lowercase().cmp(&b.title().to_lowercase()),
        };
        let ordering = primary.then_with(|| a.id().cmp(&b.id()));
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        Self {
            field: SortField::CreatedAt,
            direction: SortDirection::Desc,
        }
    }
}

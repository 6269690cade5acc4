// src/domain/listing/filter.rs
use uuid::Uuid;

use super::Listable;
use crate::domain::errors::{DomainError, DomainResult};

const MAX_SEARCH_LEN: usize = 200;

/// Trimmed, non-empty search input matched case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    raw: String,
    folded: String,
}

impl SearchTerm {
    /// Blank input means "no search" and yields `Ok(None)`.
    pub fn parse(value: Option<&str>) -> DomainResult<Option<Self>> {
        let Some(trimmed) = value.map(str::trim).filter(|v| !v.is_empty()) else {
            return Ok(None);
        };
        if trimmed.chars().count() > MAX_SEARCH_LEN {
            return Err(DomainError::Validation(format!(
                "search term must be at most {MAX_SEARCH_LEN} characters"
            )));
        }
        Ok(Some(Self {
            raw: trimmed.to_string(),
            folded: trimmed.to_lowercase(),
        }))
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn matches(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.folded)
    }

    /// `%term%` with LIKE wildcards in the input escaped.
    pub fn like_pattern(&self) -> String {
        let mut escaped = String::with_capacity(self.raw.len() + 2);
        escaped.push('%');
        for c in self.raw.chars() {
            if matches!(c, '\\' | '%' | '_') {
                escaped.push('\\');
            }
            escaped.push(c);
        }
        escaped.push('%');
        escaped
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisibilityFilter {
    #[default]
    All,
    VisibleOnly,
    HiddenOnly,
}

impl VisibilityFilter {
    pub fn from_flag(visible: Option<bool>) -> Self {
        match visible {
            None => Self::All,
            Some(true) => Self::VisibleOnly,
            Some(false) => Self::HiddenOnly,
        }
    }

    pub fn admits(&self, visible: bool) -> bool {
        match self {
            Self::All => true,
            Self::VisibleOnly => visible,
            Self::HiddenOnly => !visible,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub search: Option<SearchTerm>,
    pub category_id: Option<Uuid>,
    pub visibility: VisibilityFilter,
}

impl ListFilter {
    pub fn matches<T: Listable>(&self, item: &T) -> bool {
        if !self.visibility.admits(item.is_visible()) {
            return false;
        }
        if let Some(category) = self.category_id {
            if item.category_id() != Some(category) {
                return false;
            }
        }
        match &self.search {
            Some(term) => term.matches(item.title()) || term.matches(item.description()),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_search_is_none() {
        assert!(SearchTerm::parse(None).unwrap().is_none());
        assert!(SearchTerm::parse(Some("   ")).unwrap().is_none());
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let term = SearchTerm::parse(Some(" water ")).unwrap().unwrap();
        assert!(term.matches("Water Supply"));
        assert!(term.matches("Fresh WATER"));
        assert!(!term.matches("Road Repair"));
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        let term = SearchTerm::parse(Some("50%_off")).unwrap().unwrap();
        assert_eq!(term.like_pattern(), "%50\\%\\_off%");
    }

    #[test]
    fn overlong_search_is_rejected() {
        let long = "x".repeat(MAX_SEARCH_LEN + 1);
        assert!(SearchTerm::parse(Some(&long)).is_err());
    }

    #[test]
    fn visibility_flag_mapping() {
        assert_eq!(VisibilityFilter::from_flag(None), VisibilityFilter::All);
        assert!(VisibilityFilter::from_flag(Some(true)).admits(true));
        assert!(!VisibilityFilter::from_flag(Some(true)).admits(false));
        assert!(VisibilityFilter::from_flag(Some(false)).admits(false));
    }
}

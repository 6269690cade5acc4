// src/domain/slug/value_object.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

pub const MAX_SLUG_LEN: usize = 255;

/// Lowercase kebab-case identifier derived from a title.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if value.len() > MAX_SLUG_LEN {
            return Err(DomainError::Validation(format!(
                "slug must be at most {MAX_SLUG_LEN} characters"
            )));
        }
        let well_formed = !value.starts_with('-')
            && !value.ends_with('-')
            && !value.contains("--")
            && value
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if !well_formed {
            return Err(DomainError::Validation(
                "slug must be lowercase kebab-case".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_kebab_case() {
        assert_eq!(Slug::new("road-repair-2024").unwrap().as_str(), "road-repair-2024");
    }

    #[test]
    fn rejects_malformed_values() {
        for bad in ["", "Road", "-a", "a-", "a--b", "a b", "a_b"] {
            assert!(Slug::new(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn rejects_overlong_values() {
        assert!(Slug::new("a".repeat(MAX_SLUG_LEN + 1)).is_err());
        assert!(Slug::new("a".repeat(MAX_SLUG_LEN)).is_ok());
    }
}

// src/domain/slug/service.rs
use std::sync::Arc;

use uuid::Uuid;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::DomainResult;
use crate::domain::slug::{Slug, SlugIndex};

/// Candidates probed (`base`, `base-2`, ...) before falling back to a random suffix.
pub const MAX_SLUG_PROBES: u32 = 100;

const MAX_BASE_LEN: usize = 200;
const PLACEHOLDER_PREFIX: &str = "item";

/// Domain service producing slugs that are unique within one entity type.
pub struct SlugService {
    generator: Arc<dyn SlugGenerator>,
}

impl SlugService {
    pub fn new(generator: Arc<dyn SlugGenerator>) -> Self {
        Self { generator }
    }

    pub async fn generate_unique<Id, I>(
        &self,
        index: &I,
        title: &str,
        excluding: Option<Id>,
    ) -> DomainResult<Slug>
    where
        Id: Copy + Send + Sync + 'static,
        I: SlugIndex<Id> + ?Sized,
    {
        let base = self.base_slug(title);

        for attempt in 1..=MAX_SLUG_PROBES {
            let candidate = if attempt == 1 {
                base.clone()
            } else {
                format!("{base}-{attempt}")
            };
            let slug = Slug::new(candidate)?;
            if !index.is_slug_taken(&slug, excluding).await? {
                return Ok(slug);
            }
        }

        tracing::warn!(
            base = %base,
            probes = MAX_SLUG_PROBES,
            "slug suffixes exhausted, using random suffix"
        );
        Slug::new(format!("{base}-{}", short_token()))
    }

    fn base_slug(&self, title: &str) -> String {
        let raw = self.generator.slugify(title);
        let mut base: String = raw
            .split('-')
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("-");

        if base.len() > MAX_BASE_LEN {
            base.truncate(MAX_BASE_LEN);
            while base.ends_with('-') {
                base.pop();
            }
        }

        if base.is_empty() || Slug::new(base.clone()).is_err() {
            format!("{PLACEHOLDER_PREFIX}-{}", short_token())
        } else {
            base
        }
    }
}

fn short_token() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}

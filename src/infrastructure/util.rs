// src/infrastructure/util.rs
use crate::application::ports::util::SlugGenerator;

/// Transliterating slugger backed by the `slug` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slug::slugify(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transliterates_and_collapses_separators() {
        let slugger = DefaultSlugGenerator;
        assert_eq!(slugger.slugify("Road Repair 2024"), "road-repair-2024");
        assert_eq!(slugger.slugify("  Café -- Ñandú!! "), "cafe-nandu");
        assert_eq!(slugger.slugify("!!!"), "");
    }
}

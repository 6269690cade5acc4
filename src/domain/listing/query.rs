// src/domain/listing/query.rs
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::{ListFilter, PageRequest, SortOrder};

/// Record shape the listing pipeline needs to see.
pub trait Listable {
    fn id(&self) -> Uuid;
    fn title(&self) -> &str;
    fn description(&self) -> &str;
    fn created_at(&self) -> DateTime<Utc>;
    fn updated_at(&self) -> DateTime<Utc>;
    fn is_visible(&self) -> bool;

    fn category_id(&self) -> Option<Uuid> {
        None
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub filter: ListFilter,
    pub sort: SortOrder,
    pub page: PageRequest,
}

impl ListQuery {
    pub fn new(filter: ListFilter, sort: SortOrder, page: PageRequest) -> Self {
        Self { filter, sort, page }
    }

    /// filter -> sort -> paginate. Returns the page and the filtered total.
    pub fn apply<T, I>(&self, items: I) -> (Vec<T>, u64)
    where
        T: Listable,
        I: IntoIterator<Item = T>,
    {
        let mut matching: Vec<T> = items
            .into_iter()
            .filter(|item| self.filter.matches(item))
            .collect();
        let total = matching.len() as u64;
        matching.sort_by(|a, b| self.sort.compare(a, b));
        (self.page.slice(matching), total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::listing::{SearchTerm, SortDirection, SortField, VisibilityFilter};
    use chrono::Duration;

    #[derive(Debug, Clone)]
    struct Row {
        id: Uuid,
        title: &'static str,
        description: &'static str,
        visible: bool,
        category: Option<Uuid>,
        created_at: DateTime<Utc>,
    }

    impl Listable for Row {
        fn id(&self) -> Uuid {
            self.id
        }
        fn title(&self) -> &str {
            self.title
        }
        fn description(&self) -> &str {
            self.description
        }
        fn created_at(&self) -> DateTime<Utc> {
            self.created_at
        }
        fn updated_at(&self) -> DateTime<Utc> {
            self.created_at
        }
        fn is_visible(&self) -> bool {
            self.visible
        }
        fn category_id(&self) -> Option<Uuid> {
            self.category
        }
    }

    fn rows() -> Vec<Row> {
        let base = DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let health = Uuid::from_u128(1);
        let data = [
            ("Water Supply", "Daily water schedule", true, Some(health)),
            ("Road Repair", "Main street works", true, None),
            ("Clinic Hours", "Health centre WATER tests", false, Some(health)),
            ("Budget", "Annual budget", true, None),
            ("Zoning", "Zoning rules", true, None),
        ];
        data.iter()
            .enumerate()
            .map(|(i, (title, description, visible, category))| Row {
                id: Uuid::from_u128(100 + i as u128),
                title: *title,
                description: *description,
                visible: *visible,
                category: *category,
                created_at: base + Duration::days(i as i64),
            })
            .collect()
    }

    #[test]
    fn default_order_is_newest_first() {
        let (items, total) = ListQuery::default().apply(rows());
        assert_eq!(total, 5);
        let titles: Vec<_> = items.iter().map(|r| r.title).collect();
        assert_eq!(
            titles,
            ["Zoning", "Budget", "Clinic Hours", "Road Repair", "Water Supply"]
        );
    }

    #[test]
    fn search_matches_title_or_description() {
        let query = ListQuery {
            filter: ListFilter {
                search: SearchTerm::parse(Some("water")).unwrap(),
                ..ListFilter::default()
            },
            ..ListQuery::default()
        };
        let (items, total) = query.apply(rows());
        assert_eq!(total, 2);
        assert!(items.iter().any(|r| r.title == "Water Supply"));
        assert!(items.iter().any(|r| r.title == "Clinic Hours"));
    }

    #[test]
    fn visibility_and_category_filters_combine() {
        let query = ListQuery {
            filter: ListFilter {
                category_id: Some(Uuid::from_u128(1)),
                visibility: VisibilityFilter::VisibleOnly,
                ..ListFilter::default()
            },
            ..ListQuery::default()
        };
        let (items, total) = query.apply(rows());
        assert_eq!(total, 1);
        assert_eq!(items[0].title, "Water Supply");
    }

    #[test]
    fn title_sort_ascending() {
        let query = ListQuery {
            sort: SortOrder {
                field: SortField::Title,
                direction: SortDirection::Asc,
            },
            ..ListQuery::default()
        };
        let (items, _) = query.apply(rows());
        assert_eq!(items.first().unwrap().title, "Budget");
        assert_eq!(items.last().unwrap().title, "Zoning");
    }

    #[test]
    fn page_count_and_overflow() {
        let page_two = ListQuery {
            page: PageRequest::new(2, 2).unwrap(),
            ..ListQuery::default()
        };
        let (items, total) = page_two.apply(rows());
        assert_eq!(total, 5);
        assert_eq!(items.len(), 2);
        assert_eq!(page_two.page.total_pages(total), 3);

        let beyond = ListQuery {
            page: PageRequest::new(9, 2).unwrap(),
            ..ListQuery::default()
        };
        let (items, total) = beyond.apply(rows());
        assert!(items.is_empty());
        assert_eq!(total, 5);
    }

    #[test]
    fn unknown_sort_field_is_deterministic() {
        let query = ListQuery {
            sort: SortOrder::from_params(Some("nonsense"), Some("asc")),
            ..ListQuery::default()
        };
        let (first, _) = query.apply(rows());
        let mut shuffled = rows();
        shuffled.reverse();
        let (second, _) = query.apply(shuffled);
        let a: Vec<_> = first.iter().map(|r| r.id).collect();
        let b: Vec<_> = second.iter().map(|r| r.id).collect();
        assert_eq!(a, b);
    }
}

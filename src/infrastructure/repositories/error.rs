// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;

const CNT_NEWS_SLUG: &str = "news_items_slug_key";
const CNT_SERVICE_SLUG: &str = "services_slug_key";
const CNT_CATEGORY_NAME: &str = "service_categories_name_key";
const CNT_SERVICE_STATUS_CHECK: &str = "services_status_check";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_NEWS_SLUG => DomainError::DuplicateSlug("news slug already exists".into()),
                    CNT_SERVICE_SLUG => {
                        DomainError::DuplicateSlug("service slug already exists".into())
                    }
                    CNT_CATEGORY_NAME => {
                        DomainError::Conflict("category name already exists".into())
                    }
                    CNT_SERVICE_STATUS_CHECK => {
                        DomainError::Validation("unknown service status".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_database_errors_are_persistence_failures() {
        let err = map_sqlx(sqlx::Error::RowNotFound);
        assert!(matches!(err, DomainError::Persistence(_)));

        let err = map_sqlx(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, DomainError::Persistence(_)));
    }
}

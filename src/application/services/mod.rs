// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            categories::CategoryCommandService, municipal::MunicipalCommandService,
            news::NewsCommandService,
        },
        dto::AuthenticatedUser,
        ports::{
            security::TokenVerifier, storage::BlobStore, time::Clock, util::SlugGenerator,
        },
        queries::{
            categories::CategoryQueryService, municipal::MunicipalQueryService,
            news::NewsQueryService,
        },
        ApplicationResult,
    },
    domain::{
        category::CategoryRepository, municipal::MunicipalServiceRepository,
        news::NewsRepository, slug::SlugService,
    },
};

pub struct ApplicationServices {
    pub news_commands: Arc<NewsCommandService>,
    pub news_queries: Arc<NewsQueryService>,
    pub service_commands: Arc<MunicipalCommandService>,
    pub service_queries: Arc<MunicipalQueryService>,
    pub category_commands: Arc<CategoryCommandService>,
    pub category_queries: Arc<CategoryQueryService>,
    token_verifier: Arc<dyn TokenVerifier>,
}

impl ApplicationServices {
    pub fn new(
        news_repo: Arc<dyn NewsRepository>,
        service_repo: Arc<dyn MunicipalServiceRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        token_verifier: Arc<dyn TokenVerifier>,
        blobs: Arc<dyn BlobStore>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let slug_service = Arc::new(SlugService::new(slugger));

        let news_commands = Arc::new(NewsCommandService::new(
            Arc::clone(&news_repo),
            Arc::clone(&slug_service),
            Arc::clone(&blobs),
            Arc::clone(&clock),
        ));
        let news_queries = Arc::new(NewsQueryService::new(news_repo));

        let service_commands = Arc::new(MunicipalCommandService::new(
            Arc::clone(&service_repo),
            Arc::clone(&category_repo),
            slug_service,
            blobs,
            clock,
        ));
        let service_queries = Arc::new(MunicipalQueryService::new(
            service_repo,
            Arc::clone(&category_repo),
        ));

        let category_commands = Arc::new(CategoryCommandService::new(Arc::clone(&category_repo)));
        let category_queries = Arc::new(CategoryQueryService::new(category_repo));

        Self {
            news_commands,
            news_queries,
            service_commands,
            service_queries,
            category_commands,
            category_queries,
            token_verifier,
        }
    }

    /// Resolve a raw bearer token into the caller's identity.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        self.token_verifier.authenticate(token).await
    }
}

use async_trait::async_trait;

use crate::shared::errors::AppResult;

use super::entities::MetadataCandidate;

/// Port for movie metadata services
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Free-text movie search, ranked by the provider
    async fn search_movies(&self, query: &str) -> AppResult<Vec<MetadataCandidate>>;

    /// Title of the movie `id` as published for `locale`
    async fn localized_title(&self, id: u64, locale: &str) -> AppResult<String>;
}

use async_trait::async_trait;

use crate::{
    modules::library::domain::{LibraryIndex, LibraryItem, MediaType},
    shared::{
        config::JellyfinConfig,
        errors::AppResult,
        infrastructure::http_client::{build_url, RateLimitClient},
    },
};

use super::models::ItemsResponse;

/// Jellyfin server used as the library index
pub struct JellyfinAdapter {
    http_client: RateLimitClient,
    config: JellyfinConfig,
}

impl JellyfinAdapter {
    pub fn new(http_client: RateLimitClient, config: JellyfinConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    fn items_url(&self, term: &str, media_type: MediaType) -> String {
        build_url(
            &format!("{}/Items", self.config.base_url),
            &[
                ("SearchTerm", term),
                ("IncludeItemTypes", media_type.as_str()),
                ("Recursive", "true"),
                ("api_key", self.config.api_key.as_str()),
            ],
        )
    }
}

#[async_trait]
impl LibraryIndex for JellyfinAdapter {
    async fn search_items(&self, term: &str, media_type: MediaType) -> AppResult<Vec<LibraryItem>> {
        log::info!("Jellyfin: Searching {} items for '{}'", media_type.as_str(), term);

        let response: ItemsResponse = self
            .http_client
            .get(&self.items_url(term, media_type))
            .await?;
        let items: Vec<LibraryItem> = response.items.into_iter().map(Into::into).collect();

        log::info!("Jellyfin: Found {} items for '{}'", items.len(), term);
        Ok(items)
    }
}

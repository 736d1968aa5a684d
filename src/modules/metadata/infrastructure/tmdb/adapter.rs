use async_trait::async_trait;

use crate::{
    modules::metadata::domain::{MetadataCandidate, MetadataProvider},
    shared::{
        errors::AppResult,
        infrastructure::http_client::{build_url, RateLimitClient},
    },
};

use super::models::{MovieDetails, TmdbSearchResponse};

const BASE_URL: &str = "https://api.themoviedb.org/3";

/// TMDB (The Movie Database) movie search and localized details
pub struct TmdbAdapter {
    http_client: RateLimitClient,
    base_url: String,
    api_key: String,
}

impl TmdbAdapter {
    pub fn new(http_client: RateLimitClient, api_key: String) -> Self {
        Self::with_base_url(http_client, api_key, BASE_URL.to_string())
    }

    /// Create adapter against another host (for testing)
    pub fn with_base_url(http_client: RateLimitClient, api_key: String, base_url: String) -> Self {
        Self {
            http_client,
            base_url,
            api_key,
        }
    }

    fn search_url(&self, query: &str) -> String {
        build_url(
            &format!("{}/search/movie", self.base_url),
            &[("api_key", self.api_key.as_str()), ("query", query)],
        )
    }

    fn details_url(&self, id: u64, locale: &str) -> String {
        build_url(
            &format!("{}/movie/{}", self.base_url, id),
            &[("api_key", self.api_key.as_str()), ("language", locale)],
        )
    }
}

#[async_trait]
impl MetadataProvider for TmdbAdapter {
    async fn search_movies(&self, query: &str) -> AppResult<Vec<MetadataCandidate>> {
        log::info!("TMDB: Searching movies for '{}'", query);

        let response: TmdbSearchResponse = self.http_client.get(&self.search_url(query)).await?;
        let candidates: Vec<MetadataCandidate> =
            response.results.into_iter().map(Into::into).collect();

        log::info!("TMDB: Found {} movies for '{}'", candidates.len(), query);
        Ok(candidates)
    }

    async fn localized_title(&self, id: u64, locale: &str) -> AppResult<String> {
        log::info!("TMDB: Getting movie {} in '{}'", id, locale);

        let details: MovieDetails = self.http_client.get(&self.details_url(id, locale)).await?;
        Ok(details.title)
    }
}

pub mod api;
pub mod modules;
pub mod shared;

use std::sync::Arc;

use api::ApiState;
use modules::{
    barcode::UpcItemDbAdapter,
    library::{CollectionMatcher, JellyfinAdapter},
    metadata::{TitleNormalizer, TmdbAdapter},
    search::SearchOrchestrator,
    title::TitleCleaner,
};
use shared::{
    config::AppConfig,
    errors::AppResult,
    infrastructure::http_client::RateLimitClient,
    utils::logger::init_logger,
};

/// Wire adapters and services from configuration
pub fn build_state(config: &AppConfig) -> AppResult<Arc<ApiState>> {
    let barcode_lookup = Arc::new(UpcItemDbAdapter::new(
        RateLimitClient::for_upcitemdb(config.http_timeout)?,
        config.upc_lookup_url.clone(),
    ));

    let normalizer = match &config.tmdb {
        Some(tmdb) => {
            let adapter = TmdbAdapter::new(
                RateLimitClient::for_tmdb(config.http_timeout)?,
                tmdb.api_key.clone(),
            );
            TitleNormalizer::new(Arc::new(adapter), config.locale.clone())
        }
        None => {
            log::warn!("TMDB_API_KEY not set, titles will not be normalized");
            TitleNormalizer::disabled()
        }
    };

    let library = Arc::new(JellyfinAdapter::new(
        RateLimitClient::for_jellyfin(config.http_timeout)?,
        config.jellyfin.clone(),
    ));

    let search = SearchOrchestrator::new(
        barcode_lookup,
        TitleCleaner::new(&config.junk_keywords)?,
        normalizer,
        CollectionMatcher::new(library),
    );

    Ok(Arc::new(ApiState::new(Arc::new(search))))
}

pub async fn run() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();
    init_logger();

    let config = AppConfig::from_env()?;
    log::info!(
        "Library: {} | normalization: {} ({}) | junk keywords: {}",
        config.jellyfin.base_url,
        if config.normalization_enabled() { "on" } else { "off" },
        config.locale,
        config.junk_keywords
    );

    let state = build_state(&config)?;
    let bind_addr = format!("0.0.0.0:{}", config.port);

    api::serve(state, &config.static_dir, &bind_addr).await
}

use std::sync::Arc;

use crate::{
    modules::{
        barcode::{Barcode, BarcodeLookup},
        library::{CollectionMatcher, LibraryItem},
        metadata::TitleNormalizer,
        title::TitleCleaner,
    },
    shared::{
        errors::AppResult,
        utils::{logger::TimedOperation, validation::Validator},
    },
};

use super::dto::SearchResult;

/// Normalize-then-match pipeline behind every check
///
/// Metadata problems are absorbed by the normalizer; barcode and library
/// failures abort the request as `AppError::ExternalServiceError`.
pub struct SearchOrchestrator {
    barcode_lookup: Arc<dyn BarcodeLookup>,
    cleaner: TitleCleaner,
    normalizer: TitleNormalizer,
    matcher: CollectionMatcher,
}

impl SearchOrchestrator {
    pub fn new(
        barcode_lookup: Arc<dyn BarcodeLookup>,
        cleaner: TitleCleaner,
        normalizer: TitleNormalizer,
        matcher: CollectionMatcher,
    ) -> Self {
        Self {
            barcode_lookup,
            cleaner,
            normalizer,
            matcher,
        }
    }

    pub fn normalization_enabled(&self) -> bool {
        self.normalizer.is_enabled()
    }

    /// Resolve a scanned code to a title and check it against the library
    pub async fn check_barcode(&self, raw_code: Option<&str>) -> AppResult<SearchResult> {
        let raw_code = Validator::search_input(raw_code, "Barcode")?;
        let barcode = Barcode::parse(&raw_code)?;
        log::info!("Scanning barcode: {}", barcode);

        let raw_titles = self
            .barcode_lookup
            .lookup(&barcode)
            .await
            .map_err(|e| e.into_upstream("Barcode lookup"))?;

        let Some(raw_title) = raw_titles.into_iter().next() else {
            log::info!("Barcode {} not found in barcode database", barcode);
            return Ok(SearchResult::NotFound);
        };

        let cleaned = self.cleaner.clean(&raw_title);
        if cleaned.trim().is_empty() {
            log::info!("Barcode title '{}' has nothing left after cleaning", raw_title);
            return Ok(SearchResult::NotFound);
        }
        log::info!("Cleaned search title: '{}' -> '{}'", raw_title, cleaned);

        self.search(&cleaned).await
    }

    /// Check a typed title against the library, without cleaning
    pub async fn check_title(&self, title: Option<&str>) -> AppResult<SearchResult> {
        let title = Validator::search_input(title, "Title")?;
        log::info!("Manual title search: '{}'", title);

        self.search(&title).await
    }

    /// Raw library listing for `term`, bypassing normalization
    pub async fn search_collection(&self, term: Option<&str>) -> AppResult<Vec<LibraryItem>> {
        let term = Validator::search_input(term, "Search term")?;
        log::info!("Searching collection for: '{}'", term);

        let items = self
            .matcher
            .search(&term)
            .await
            .map_err(|e| e.into_upstream("Library search"))?;

        log::info!("{} library items found for '{}'", items.len(), term);
        Ok(items)
    }

    /// Normalize `candidate`, then decide presence in the library
    pub async fn search(&self, candidate: &str) -> AppResult<SearchResult> {
        let timer = TimedOperation::new(&format!("search '{}'", candidate));

        let title = self.normalizer.normalize(candidate).await.into_title();

        let item = self
            .matcher
            .find_match(&title)
            .await
            .map_err(|e| e.into_upstream("Library search"))?;

        match &item {
            Some(found) => log::info!("In collection: '{}' ({:?})", found.title, found.year),
            None => log::info!("Missing from collection: '{}'", title),
        }

        timer.finish();
        Ok(SearchResult::from_match(title, item))
    }
}

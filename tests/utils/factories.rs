/// Stub adapters for the external services, configurable per test
use async_trait::async_trait;
use shelfcheck::modules::{
    barcode::{Barcode, BarcodeLookup},
    library::{LibraryIndex, LibraryItem, MediaType},
    metadata::{MetadataCandidate, MetadataProvider},
};
use shelfcheck::shared::errors::{AppError, AppResult};
use std::sync::{Arc, Mutex};

pub struct StubBarcodeLookup {
    titles: Vec<String>,
}

impl StubBarcodeLookup {
    pub fn with_titles(titles: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            titles: titles.iter().map(|t| t.to_string()).collect(),
        })
    }

    pub fn empty() -> Arc<Self> {
        Self::with_titles(&[])
    }
}

#[async_trait]
impl BarcodeLookup for StubBarcodeLookup {
    async fn lookup(&self, _barcode: &Barcode) -> AppResult<Vec<String>> {
        Ok(self.titles.clone())
    }
}

pub enum MetadataBehaviour {
    /// Search returns the given ranked candidates, detail returns `canonical`
    Returns {
        results: Vec<MetadataCandidate>,
        canonical: String,
    },
    /// Every call fails like a timed-out request
    Fails,
}

pub struct StubMetadataProvider {
    behaviour: MetadataBehaviour,
    searched: Mutex<Vec<String>>,
    details: Mutex<Vec<u64>>,
}

impl StubMetadataProvider {
    pub fn returning(results: Vec<MetadataCandidate>, canonical: &str) -> Arc<Self> {
        Arc::new(Self {
            behaviour: MetadataBehaviour::Returns {
                results,
                canonical: canonical.to_string(),
            },
            searched: Mutex::new(Vec::new()),
            details: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            behaviour: MetadataBehaviour::Fails,
            searched: Mutex::new(Vec::new()),
            details: Mutex::new(Vec::new()),
        })
    }

    pub fn searched_queries(&self) -> Vec<String> {
        self.searched.lock().unwrap().clone()
    }

    pub fn detail_ids(&self) -> Vec<u64> {
        self.details.lock().unwrap().clone()
    }
}

#[async_trait]
impl MetadataProvider for StubMetadataProvider {
    async fn search_movies(&self, query: &str) -> AppResult<Vec<MetadataCandidate>> {
        self.searched.lock().unwrap().push(query.to_string());
        match &self.behaviour {
            MetadataBehaviour::Returns { results, .. } => Ok(results.clone()),
            MetadataBehaviour::Fails => {
                Err(AppError::ExternalServiceError("Request timeout".to_string()))
            }
        }
    }

    async fn localized_title(&self, id: u64, _locale: &str) -> AppResult<String> {
        self.details.lock().unwrap().push(id);
        match &self.behaviour {
            MetadataBehaviour::Returns { canonical, .. } => Ok(canonical.clone()),
            MetadataBehaviour::Fails => {
                Err(AppError::ExternalServiceError("Request timeout".to_string()))
            }
        }
    }
}

pub struct StubLibraryIndex {
    items: Option<Vec<LibraryItem>>,
    searched: Mutex<Vec<String>>,
}

impl StubLibraryIndex {
    pub fn with_items(items: Vec<LibraryItem>) -> Arc<Self> {
        Arc::new(Self {
            items: Some(items),
            searched: Mutex::new(Vec::new()),
        })
    }

    /// Every search fails like an unreachable server
    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            items: None,
            searched: Mutex::new(Vec::new()),
        })
    }

    pub fn searched_terms(&self) -> Vec<String> {
        self.searched.lock().unwrap().clone()
    }
}

pub const LIBRARY_FAILURE_DETAIL: &str = "jellyfin.local:8096 refused connection";

#[async_trait]
impl LibraryIndex for StubLibraryIndex {
    async fn search_items(&self, term: &str, media_type: MediaType) -> AppResult<Vec<LibraryItem>> {
        assert_eq!(media_type, MediaType::Movie);
        self.searched.lock().unwrap().push(term.to_string());
        self.items
            .clone()
            .ok_or_else(|| AppError::ExternalServiceError(LIBRARY_FAILURE_DETAIL.to_string()))
    }
}

pub fn library_item(title: &str, year: Option<u32>) -> LibraryItem {
    LibraryItem {
        title: title.to_string(),
        year,
        id: format!("{}-id", title.to_lowercase().replace(' ', "-")),
    }
}

use async_trait::async_trait;

use crate::shared::errors::AppResult;

use super::entities::{LibraryItem, MediaType};

/// Port for the library index holding what is already owned
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LibraryIndex: Send + Sync {
    /// Recursive search over the whole library, ordered by the index's relevance
    async fn search_items(&self, term: &str, media_type: MediaType) -> AppResult<Vec<LibraryItem>>;
}

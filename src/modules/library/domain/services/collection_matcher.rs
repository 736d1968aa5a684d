use std::sync::Arc;

use crate::{
    modules::library::domain::{LibraryIndex, LibraryItem, MediaType},
    shared::{errors::AppResult, utils::logger::LogContext},
};

/// Looks titles up in the library index
///
/// The index's own relevance order is trusted: the first hit is the match.
/// Titles shared by several items (remakes) are not told apart by year.
pub struct CollectionMatcher {
    index: Arc<dyn LibraryIndex>,
    media_type: MediaType,
}

impl CollectionMatcher {
    pub fn new(index: Arc<dyn LibraryIndex>) -> Self {
        Self {
            index,
            media_type: MediaType::Movie,
        }
    }

    /// Best library entry for `title`, if any. Index failures propagate.
    pub async fn find_match(&self, title: &str) -> AppResult<Option<LibraryItem>> {
        Ok(self.search(title).await?.into_iter().next())
    }

    /// All library entries for `term`, in index order
    pub async fn search(&self, term: &str) -> AppResult<Vec<LibraryItem>> {
        LogContext::search_operation(term, Some("library"), None);
        let items = self.index.search_items(term, self.media_type).await?;
        LogContext::search_operation(term, Some("library"), Some(items.len()));
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::library::domain::MockLibraryIndex;
    use crate::shared::errors::AppError;

    fn item(title: &str, year: Option<u32>, id: &str) -> LibraryItem {
        LibraryItem {
            title: title.to_string(),
            year,
            id: id.to_string(),
        }
    }

    #[tokio::test]
    async fn test_first_entry_is_the_match() {
        let mut index = MockLibraryIndex::new();
        index
            .expect_search_items()
            .withf(|term, media_type| term == "Dune" && *media_type == MediaType::Movie)
            .times(1)
            .returning(|_, _| {
                Ok(vec![
                    item("Dune", Some(2021), "a"),
                    item("Dune", Some(1984), "b"),
                ])
            });

        let matcher = CollectionMatcher::new(Arc::new(index));
        let matched = matcher.find_match("Dune").await.unwrap();

        assert_eq!(matched, Some(item("Dune", Some(2021), "a")));
    }

    #[tokio::test]
    async fn test_empty_list_is_no_match() {
        let mut index = MockLibraryIndex::new();
        index.expect_search_items().returning(|_, _| Ok(vec![]));

        let matcher = CollectionMatcher::new(Arc::new(index));
        assert_eq!(matcher.find_match("Inception").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_index_failure_propagates() {
        let mut index = MockLibraryIndex::new();
        index
            .expect_search_items()
            .returning(|_, _| Err(AppError::ApiError("Jellyfin API returned error: 500".to_string())));

        let matcher = CollectionMatcher::new(Arc::new(index));
        let result = matcher.find_match("Inception").await;

        assert!(matches!(result, Err(AppError::ApiError(_))));
    }

    #[tokio::test]
    async fn test_search_returns_full_list() {
        let mut index = MockLibraryIndex::new();
        index.expect_search_items().returning(|_, _| {
            Ok(vec![
                item("Alien", Some(1979), "1"),
                item("Aliens", Some(1986), "2"),
                item("Alien³", None, "3"),
            ])
        });

        let matcher = CollectionMatcher::new(Arc::new(index));
        let items = matcher.search("Alien").await.unwrap();

        assert_eq!(items.len(), 3);
        assert_eq!(items[2].year, None);
    }
}

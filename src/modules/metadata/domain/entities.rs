use serde::{Deserialize, Serialize};

/// One hit of a metadata title search. Lists of candidates keep the
/// provider's ranking: index 0 is the most relevant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataCandidate {
    pub id: u64,
    pub title: String,
}

impl MetadataCandidate {
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }

    /// Case-insensitive title equality
    pub fn is_exact_match(&self, query: &str) -> bool {
        self.title.to_lowercase() == query.to_lowercase()
    }
}

use serde::{Serialize, Serializer};

use crate::modules::library::LibraryItem;

/// Decision for one barcode or title check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    /// The identifier itself resolved to nothing
    NotFound,
    /// Resolved, not in the library
    Missing { title: String },
    /// Resolved and owned
    Owned {
        title: String,
        matched: String,
        year: Option<u32>,
    },
}

impl SearchResult {
    pub fn from_match(title: String, item: Option<LibraryItem>) -> Self {
        match item {
            Some(item) => SearchResult::Owned {
                title,
                matched: item.title,
                year: item.year,
            },
            None => SearchResult::Missing { title },
        }
    }

    pub fn found(&self) -> bool {
        !matches!(self, SearchResult::NotFound)
    }

    pub fn in_collection(&self) -> Option<bool> {
        match self {
            SearchResult::NotFound => None,
            SearchResult::Missing { .. } => Some(false),
            SearchResult::Owned { .. } => Some(true),
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            SearchResult::NotFound => None,
            SearchResult::Missing { title } | SearchResult::Owned { title, .. } => {
                Some(title.as_str())
            }
        }
    }
}

/// Wire shape: `{found, inCollection?, title?, match?, year?}`
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchResponse<'a> {
    found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    in_collection: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(rename = "match", skip_serializing_if = "Option::is_none")]
    matched: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    year: Option<u32>,
}

impl Serialize for SearchResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let (matched, year) = match self {
            SearchResult::Owned { matched, year, .. } => (Some(matched.as_str()), *year),
            _ => (None, None),
        };

        SearchResponse {
            found: self.found(),
            in_collection: self.in_collection(),
            title: self.title(),
            matched,
            year,
        }
        .serialize(serializer)
    }
}

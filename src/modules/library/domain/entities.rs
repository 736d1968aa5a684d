use serde::{Deserialize, Serialize};

/// An entry already present in the library
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryItem {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
    pub id: String,
}

/// Item kinds the library index can be restricted to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Movie,
}

impl MediaType {
    /// Name used by the index's `IncludeItemTypes` filter
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Movie => "Movie",
        }
    }
}

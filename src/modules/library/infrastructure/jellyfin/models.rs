use serde::{Deserialize, Serialize};

use crate::modules::library::domain::LibraryItem;

/// Envelope of `GET /Items`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemsResponse {
    pub items: Vec<BaseItem>,
    #[serde(default)]
    pub total_record_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BaseItem {
    pub name: String,
    pub id: String,
    #[serde(default)]
    pub production_year: Option<u32>,
    #[serde(default)]
    pub r#type: Option<String>,
}

impl From<BaseItem> for LibraryItem {
    fn from(item: BaseItem) -> Self {
        LibraryItem {
            title: item.name,
            year: item.production_year,
            id: item.id,
        }
    }
}

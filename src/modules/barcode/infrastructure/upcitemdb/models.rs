use serde::{Deserialize, Serialize};

/// Response envelope of `GET /prod/trial/lookup`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpcLookupResponse {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub items: Vec<UpcItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpcItem {
    #[serde(default)]
    pub ean: Option<String>,
    #[serde(default)]
    pub upc: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
}

impl UpcLookupResponse {
    /// Non-empty product titles in response order
    pub fn titles(self) -> Vec<String> {
        if self.total == 0 {
            return Vec::new();
        }

        self.items
            .into_iter()
            .filter_map(|item| item.title)
            .filter(|title| !title.trim().is_empty())
            .collect()
    }
}

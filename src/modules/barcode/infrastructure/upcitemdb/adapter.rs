use async_trait::async_trait;

use crate::{
    modules::barcode::domain::{Barcode, BarcodeLookup},
    shared::{
        errors::AppResult,
        infrastructure::http_client::{build_url, RateLimitClient},
    },
};

use super::models::UpcLookupResponse;

/// UPCitemdb barcode lookup over the public trial endpoint
pub struct UpcItemDbAdapter {
    http_client: RateLimitClient,
    lookup_url: String,
}

impl UpcItemDbAdapter {
    pub fn new(http_client: RateLimitClient, lookup_url: String) -> Self {
        Self {
            http_client,
            lookup_url,
        }
    }
}

#[async_trait]
impl BarcodeLookup for UpcItemDbAdapter {
    async fn lookup(&self, barcode: &Barcode) -> AppResult<Vec<String>> {
        let url = build_url(&self.lookup_url, &[("upc", barcode.as_str())]);

        log::info!("UPCitemdb: Looking up barcode '{}'", barcode);

        let response: UpcLookupResponse = self.http_client.get(&url).await?;
        let titles = response.titles();

        log::info!(
            "UPCitemdb: Found {} titles for barcode '{}'",
            titles.len(),
            barcode
        );
        Ok(titles)
    }
}

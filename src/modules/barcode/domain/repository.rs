use async_trait::async_trait;

use crate::shared::errors::AppResult;

use super::barcode::Barcode;

/// Port for barcode databases
///
/// Returns the raw product titles known for the code, most relevant first.
/// An unknown code is an empty list, not an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BarcodeLookup: Send + Sync {
    async fn lookup(&self, barcode: &Barcode) -> AppResult<Vec<String>>;
}

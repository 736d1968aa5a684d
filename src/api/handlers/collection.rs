//! Direct library browsing.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;

use crate::{api::error::ApiError, api::ApiState, modules::library::LibraryItem};

/// Body of `POST /search-collection`.
#[derive(Debug, Deserialize)]
pub struct SearchCollectionRequest {
    #[serde(default)]
    pub term: Option<String>,
}

pub async fn search_collection(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<SearchCollectionRequest>, JsonRejection>,
) -> Result<Json<Vec<LibraryItem>>, ApiError> {
    let Json(request) = payload?;

    state
        .search
        .search_collection(request.term.as_deref())
        .await
        .map(Json)
        .map_err(|e| ApiError::new(e, "Library Search Failed"))
}

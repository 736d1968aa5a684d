//! Barcode and manual title checks.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;

use crate::{api::error::ApiError, api::ApiState, modules::search::SearchResult};

/// Body of `POST /check-barcode`.
#[derive(Debug, Deserialize)]
pub struct CheckBarcodeRequest {
    #[serde(default)]
    pub barcode: Option<String>,
}

/// Body of `POST /check-title`.
#[derive(Debug, Deserialize)]
pub struct CheckTitleRequest {
    #[serde(default)]
    pub title: Option<String>,
}

pub async fn check_barcode(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<CheckBarcodeRequest>, JsonRejection>,
) -> Result<Json<SearchResult>, ApiError> {
    let Json(request) = payload?;

    state
        .search
        .check_barcode(request.barcode.as_deref())
        .await
        .map(Json)
        .map_err(ApiError::server)
}

pub async fn check_title(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<CheckTitleRequest>, JsonRejection>,
) -> Result<Json<SearchResult>, ApiError> {
    let Json(request) = payload?;

    state
        .search
        .check_title(request.title.as_deref())
        .await
        .map(Json)
        .map_err(ApiError::server)
}

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::api::ApiState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    /// Whether titles are normalized through the metadata service.
    pub normalization: bool,
}

pub async fn health(State(state): State<Arc<ApiState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        normalization: state.search.normalization_enabled(),
    })
}

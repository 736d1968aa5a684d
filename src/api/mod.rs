//! HTTP API for the scanner front-end.
//!
//! Provides:
//! - barcode and manual title checks against the library
//! - raw library search for browsing
//! - static front-end assets

pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::modules::search::SearchOrchestrator;

/// Shared state for API handlers.
pub struct ApiState {
    pub search: Arc<SearchOrchestrator>,
}

impl ApiState {
    pub fn new(search: Arc<SearchOrchestrator>) -> Self {
        Self { search }
    }
}

/// Build the API router with all routes, serving `static_dir` for anything else.
pub fn router(state: Arc<ApiState>, static_dir: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::status::health))
        .route("/check-barcode", post(handlers::check::check_barcode))
        .route("/check-title", post(handlers::check::check_title))
        .route(
            "/search-collection",
            post(handlers::collection::search_collection),
        )
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
        .with_state(state)
}

/// Start the API server.
pub async fn serve(state: Arc<ApiState>, static_dir: &str, bind_addr: &str) -> anyhow::Result<()> {
    let app = router(state, static_dir);
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;

    log::info!("App running on {}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

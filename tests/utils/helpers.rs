/// Router builders and request helpers
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use shelfcheck::{
    api::{router, ApiState},
    modules::{
        barcode::BarcodeLookup,
        library::{CollectionMatcher, LibraryIndex},
        metadata::{MetadataProvider, TitleNormalizer},
        search::SearchOrchestrator,
        title::TitleCleaner,
    },
    shared::config::{DEFAULT_JUNK_KEYWORDS, DEFAULT_LOCALE},
};
use std::sync::Arc;
use tower::ServiceExt;

/// Build the full router over the given adapters
pub fn build_app(
    barcode: Arc<dyn BarcodeLookup>,
    metadata: Option<Arc<dyn MetadataProvider>>,
    library: Arc<dyn LibraryIndex>,
) -> Router {
    let normalizer = match metadata {
        Some(provider) => TitleNormalizer::new(provider, DEFAULT_LOCALE),
        None => TitleNormalizer::disabled(),
    };

    let search = SearchOrchestrator::new(
        barcode,
        TitleCleaner::new(DEFAULT_JUNK_KEYWORDS).unwrap(),
        normalizer,
        CollectionMatcher::new(library),
    );

    router(Arc::new(ApiState::new(Arc::new(search))), "public")
}

/// POST a JSON body and return the status and decoded JSON response
pub async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send(app, request).await
}

/// POST an arbitrary body, optionally without a content type
pub async fn post_raw(
    app: Router,
    uri: &str,
    content_type: Option<&str>,
    body: &str,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method("POST").uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();

    send(app, request).await
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}

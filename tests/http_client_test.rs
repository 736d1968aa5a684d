//! Outbound client and adapter failure tests
//!
//! Uses a refused local port so no real service is contacted.

use shelfcheck::modules::library::{CollectionMatcher, JellyfinAdapter};
use shelfcheck::shared::config::JellyfinConfig;
use shelfcheck::shared::errors::AppError;
use shelfcheck::shared::infrastructure::RateLimitClient;
use std::sync::Arc;
use std::time::{Duration, Instant};

#[tokio::test]
async fn test_failed_request_is_not_retried() {
    let client = RateLimitClient::for_jellyfin(Duration::from_secs(2)).unwrap();

    let start = Instant::now();
    let result: Result<serde_json::Value, AppError> = client.get("http://127.0.0.1:9/Items").await;

    assert!(result.is_err());
    // A single refused connection returns immediately; retries would back off
    assert!(start.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn test_unreachable_library_is_hard_failure() {
    let adapter = JellyfinAdapter::new(
        RateLimitClient::for_jellyfin(Duration::from_secs(2)).unwrap(),
        JellyfinConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            api_key: "key".to_string(),
        },
    );
    let matcher = CollectionMatcher::new(Arc::new(adapter));

    assert!(matcher.find_match("Inception").await.is_err());
}
